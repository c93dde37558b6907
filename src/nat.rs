//! Type-level natural numbers and the static index carrier.
//!
//! Positions inside a sequence are Peano naturals (`Zero`, `Succ<N>`). The
//! user-facing carrier is [`Index<I>`], a const-generic marker that maps to
//! its natural through [`IndexMark`]. The mapping is a generated table, so
//! only indices `0..=255` are addressable.
//!
//! Comparisons on naturals recurse once per unit. Positions past roughly 60,
//! or large endpoints of an empty range, can exceed the default
//! `recursion_limit` of the crate that uses them; raise it there with
//! `#![recursion_limit = "1024"]`.

use core::marker::PhantomData;

use crate::logic::{self, Bool, False, True};

/// A natural number known to the type system.
pub trait Nat: Copy + Default + 'static {
    const VALUE: usize;

    type IsZero: Bool;

    /// Predecessor, saturating at zero.
    type Pred: Nat;

    type Lt<M: Nat>: Bool;
    type Eq<M: Nat>: Bool;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zero;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Succ<N>(PhantomData<N>);

impl Nat for Zero {
    const VALUE: usize = 0;

    type IsZero = True;
    type Pred = Zero;
    type Lt<M: Nat> = <M::IsZero as Bool>::Not;
    type Eq<M: Nat> = M::IsZero;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;

    type IsZero = False;
    type Pred = N;
    type Lt<M: Nat> = logic::And<logic::Not<M::IsZero>, N::Lt<M::Pred>>;
    type Eq<M: Nat> = logic::And<logic::Not<M::IsZero>, N::Eq<M::Pred>>;
}

/// `A <= B`
pub type Le<A, B> = <A as Nat>::Lt<Succ<B>>;

/// Whether position `P` falls in the half-open range `[S, E)`.
pub type InRange<P, S, E> = logic::And<Le<S, P>, <P as Nat>::Lt<E>>;

/// Static index carrier.
///
/// ```
/// use tyseq::{index, type_seq};
///
/// let seq = type_seq![u8, u16, u32];
/// let _: tyseq::Tag<u16> = seq.at(index::<1>());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index<const I: usize>;

pub const fn index<const I: usize>() -> Index<I> {
    Index
}

/// Maps an index carrier to its type-level natural.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported static index",
    label = "only indices 0..=255 can be passed as `Index<I>`"
)]
pub trait IndexMark {
    type Nat: Nat;
}

pub type ToNat<I> = <I as IndexMark>::Nat;

tyseq_macros::index_marks!(256);

/// `Self < Len`, as a bound.
#[diagnostic::on_unimplemented(
    message = "index out of range of type sequence",
    label = "index `{Self}` is not below the sequence length `{Len}`"
)]
pub trait Below<Len: Nat>: Nat {}

impl<L: Nat> Below<Succ<L>> for Zero {}

impl<N: Below<L>, L: Nat> Below<Succ<L>> for Succ<N> {}

/// `Self <= Len`, as a bound.
#[diagnostic::on_unimplemented(
    message = "range end is past the end of type sequence",
    label = "range end `{Self}` is greater than the sequence length `{Len}`"
)]
pub trait EndWithin<Len: Nat>: Nat {}

impl<L: Nat> EndWithin<L> for Zero {}

impl<N: EndWithin<L>, L: Nat> EndWithin<Succ<L>> for Succ<N> {}

/// Implemented on `S < E`: an empty range passes unchecked, a non-empty one
/// must end within the sequence.
pub trait RangeGuard<E: Nat, Len: Nat>: Bool {}

impl<E: Nat, Len: Nat> RangeGuard<E, Len> for False {}

impl<E: EndWithin<Len>, Len: Nat> RangeGuard<E, Len> for True {}

/// `[Self, E)` is an acceptable range for a sequence of length `Len`.
pub trait ValidRange<E: Nat, Len: Nat>: Nat {}

impl<S: Nat, E: Nat, Len: Nat> ValidRange<E, Len> for S where S::Lt<E>: RangeGuard<E, Len> {}
