//! Static transforms and predicates, and the `Func` carrier that passes them
//! to sequence operations.
//!
//! A transform is a marker type implementing [`Transform<T>`] for the types
//! it accepts; a predicate implements [`Predicate<T>`] with a type-level
//! boolean answer:
//!
//! ```
//! use tyseq::func::Predicate;
//! use tyseq::logic::{False, True};
//! use tyseq::{func, type_seq};
//!
//! struct IsSigned;
//!
//! impl Predicate<i32> for IsSigned {
//!     type Output = True;
//! }
//!
//! impl Predicate<u32> for IsSigned {
//!     type Output = False;
//! }
//!
//! let seq = type_seq![i32, u32, i32];
//! assert!(seq.filter(func::<IsSigned>()) == type_seq![i32, i32]);
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::descriptor::{Descriptor, KeyOf};
use crate::fold::{Folded, PositionsOf};
use crate::key::KeyEq;
use crate::list::List;
use crate::logic::{self, Bool, False, True};
use crate::nat::Zero;
use crate::seq::TypeSeq;

/// Zero-sized carrier of a transform or predicate `F`.
pub struct Func<F>(PhantomData<fn() -> F>);

pub const fn func<F>() -> Func<F> {
    Func::new()
}

impl<F> Func<F> {
    pub const fn new() -> Self {
        Func(PhantomData)
    }
}

impl<F> Clone for Func<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Func<F> {}

impl<F> Default for Func<F> {
    fn default() -> Self {
        Func::new()
    }
}

impl<F> fmt::Debug for Func<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func<{}>", core::any::type_name::<F>())
    }
}

/// A type-to-type function.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a transform over `{T}`",
    label = "implement `Transform<{T}>` for `{Self}`"
)]
pub trait Transform<T: ?Sized> {
    type Output: ?Sized;
}

/// A type-to-boolean function.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{T}`",
    label = "implement `Predicate<{T}>` for `{Self}`"
)]
pub trait Predicate<T: ?Sized> {
    type Output: Bool;
}

pub type Apply<F, T> = <F as Transform<T>>::Output;
pub type Test<F, T> = <F as Predicate<T>>::Output;

// ============================================================================
// Transforms
// ============================================================================

pub struct Identity;

impl<T: ?Sized> Transform<T> for Identity {
    type Output = T;
}

/// Maps every type to `U`.
pub struct Constant<U>(PhantomData<fn() -> U>);

impl<T: ?Sized, U> Transform<T> for Constant<U> {
    type Output = U;
}

pub struct ToOption;

impl<T> Transform<T> for ToOption {
    type Output = Option<T>;
}

pub struct ToRef;

impl<T: ?Sized + 'static> Transform<T> for ToRef {
    type Output = &'static T;
}

/// `G` applied to the result of `F`.
pub struct Compose<F, G>(PhantomData<fn() -> (F, G)>);

impl<T: ?Sized, F, G> Transform<T> for Compose<F, G>
where
    F: Transform<T>,
    G: Transform<F::Output>,
{
    type Output = G::Output;
}

// ============================================================================
// Predicates
// ============================================================================

pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    type Output = True;
}

pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    type Output = False;
}

/// Descriptor identity with `X`.
pub struct IsSame<X: ?Sized>(PhantomData<fn() -> *const X>);

impl<T: ?Sized, X: ?Sized> Predicate<T> for IsSame<X>
where
    T: Descriptor,
    X: Descriptor,
    KeyOf<T>: KeyEq<KeyOf<X>>,
{
    type Output = <KeyOf<T> as KeyEq<KeyOf<X>>>::Output;
}

/// Membership in the sequence `S`.
pub struct IsIn<S>(PhantomData<fn() -> S>);

impl<T: ?Sized, L> Predicate<T> for IsIn<TypeSeq<L>>
where
    L: List + crate::fold::Fold<PositionsOf<T>, Zero>,
{
    type Output = logic::Not<<Folded<L, PositionsOf<T>> as List>::IsEmpty>;
}

pub struct Not<P>(PhantomData<fn() -> P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    type Output = logic::Not<P::Output>;
}

pub struct Both<P, Q>(PhantomData<fn() -> (P, Q)>);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Both<P, Q> {
    type Output = logic::And<P::Output, Q::Output>;
}

pub struct Either<P, Q>(PhantomData<fn() -> (P, Q)>);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Either<P, Q> {
    type Output = logic::Or<P::Output, Q::Output>;
}
