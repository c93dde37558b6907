//! The structural list underneath [`TypeSeq`](crate::TypeSeq).
//!
//! `Nil` and `Cons<H, T>` are never instantiated; they only exist to be
//! named. Everything a list knows about itself (length, concatenation, the
//! result of popping an end) is an associated item resolved by the compiler.
//! Elements may be unsized (`str`, `[u8]`, `dyn Trait`).

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use crate::logic::{Bool, False, True};
use crate::nat::{Nat, Succ, Zero};

pub struct Nil;

pub struct Cons<H: ?Sized, T>(PhantomData<(fn() -> *const H, fn() -> T)>);

pub trait List {
    const LEN: usize;

    type Len: Nat;
    type IsEmpty: Bool;

    /// `Self` followed by `R`.
    type Concat<R: List>: List;

    /// Without the first element. `Nil` stays `Nil`.
    type PopFront: List;

    /// Without the last element. `Nil` stays `Nil`.
    type PopBack: List;

    /// `PopBack` of `Cons<H, Self>`.
    #[doc(hidden)]
    type PopBackAfter<H: ?Sized>: List;

    /// The last element, or `D` when the list is empty.
    type LastOr<D: ?Sized>: ?Sized;

    /// Writes the element type names separated by `", "`.
    fn write_names(out: &mut dyn fmt::Write, leading: bool) -> fmt::Result;
}

impl List for Nil {
    const LEN: usize = 0;

    type Len = Zero;
    type IsEmpty = True;
    type Concat<R: List> = R;
    type PopFront = Nil;
    type PopBack = Nil;
    type PopBackAfter<H: ?Sized> = Nil;
    type LastOr<D: ?Sized> = D;

    fn write_names(_out: &mut dyn fmt::Write, _leading: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: ?Sized, T: List> List for Cons<H, T> {
    const LEN: usize = T::LEN + 1;

    type Len = Succ<T::Len>;
    type IsEmpty = False;
    type Concat<R: List> = Cons<H, T::Concat<R>>;
    type PopFront = T;
    type PopBack = T::PopBackAfter<H>;
    type PopBackAfter<G: ?Sized> = Cons<G, T::PopBackAfter<H>>;
    type LastOr<D: ?Sized> = T::LastOr<H>;

    fn write_names(out: &mut dyn fmt::Write, leading: bool) -> fmt::Result {
        if leading {
            out.write_str(", ")?;
        }
        out.write_str(type_name::<H>())?;
        T::write_names(out, true)
    }
}

/// Positional access. Only implemented for positions inside the list.
#[diagnostic::on_unimplemented(
    message = "index out of range of type sequence",
    label = "no element at position `{N}`"
)]
pub trait Get<N: Nat> {
    type Output: ?Sized;
}

impl<H: ?Sized, T> Get<Zero> for Cons<H, T> {
    type Output = H;
}

impl<H: ?Sized, T: Get<N>, N: Nat> Get<Succ<N>> for Cons<H, T> {
    type Output = T::Output;
}
