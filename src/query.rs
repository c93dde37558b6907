//! Identity lookups built on the fold, and the bounds that reject invalid
//! access.

use crate::descriptor::{Descriptor, KeyOf};
use crate::fold::{Folded, KeepIf, PositionsOf};
use crate::func::Not;
use crate::key::KeyEq;
use crate::list::{Cons, List, Nil};
use crate::logic::{self, False, True};
use crate::nat::Nat;

/// Returned by `index_of` when the descriptor does not occur.
pub const NPOS: usize = usize::MAX;

/// Sequences that have a first and a last element.
#[diagnostic::on_unimplemented(
    message = "cannot take the front or back of an empty type sequence",
    label = "`front` and `back` need at least one element"
)]
pub trait NonEmpty: List {
    type Front: ?Sized;
    type Back: ?Sized;
}

impl<H: ?Sized, T: List> NonEmpty for Cons<H, T> {
    type Front = H;
    type Back = T::LastOr<H>;
}

/// The positions at which `X` occurs in `L`, in increasing order.
pub type Positions<L, X> = Folded<L, PositionsOf<X>>;

/// A positions list with at most one entry.
#[diagnostic::on_unimplemented(
    message = "descriptor occurs more than once in type sequence",
    label = "`index_of` needs the descriptor to be absent or unique",
    note = "use `count_of` to count repeated descriptors"
)]
pub trait Unique {
    const INDEX: usize;
}

impl Unique for Nil {
    const INDEX: usize = NPOS;
}

impl<P: Nat> Unique for Cons<P, Nil> {
    const INDEX: usize = P::VALUE;
}

/// Element-wise descriptor identity.
pub trait SameSeq<M> {
    type Output: logic::Bool;
}

impl SameSeq<Nil> for Nil {
    type Output = True;
}

impl<G: ?Sized, U> SameSeq<Cons<G, U>> for Nil {
    type Output = False;
}

impl<H: ?Sized, T> SameSeq<Nil> for Cons<H, T> {
    type Output = False;
}

impl<H: ?Sized, T, G: ?Sized, U> SameSeq<Cons<G, U>> for Cons<H, T>
where
    H: Descriptor,
    G: Descriptor,
    KeyOf<H>: KeyEq<KeyOf<G>>,
    T: SameSeq<U>,
{
    type Output = logic::And<<KeyOf<H> as KeyEq<KeyOf<G>>>::Output, T::Output>;
}

pub type Contains<L, X> = logic::Not<<Positions<L, X> as List>::IsEmpty>;

pub type CountOf<L, X> = <Positions<L, X> as List>::Len;

pub type AllOf<L, F> = <Folded<L, KeepIf<Not<F>>> as List>::IsEmpty;

pub type OneOf<L, F> = logic::Not<<Folded<L, KeepIf<F>> as List>::IsEmpty>;
