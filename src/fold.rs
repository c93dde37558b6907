//! The position-indexed fold behind every sequence transformation.
//!
//! [`Fold<R, P>`] walks a list carrying the current position `P`. At each
//! element a [`Step`] rule decides what the element becomes: a one-element
//! list (kept or replaced) or `Nil` (dropped). The pieces are concatenated in
//! order. `remove`, `apply`, `filter` and the position queries are all this
//! fold with a different rule.
//!
//! Rules pick between two [`Action`]s with a type-level boolean through
//! [`Choose`]. Only the chosen action's bounds are checked, so a transform
//! or predicate is never required for elements the rule leaves alone.

use core::marker::PhantomData;

use crate::descriptor::{Descriptor, KeyOf};
use crate::func::{Predicate, Transform};
use crate::key::KeyEq;
use crate::list::{Cons, List, Nil};
use crate::logic::{False, True};
use crate::nat::{InRange, Nat, Succ, Zero};

/// What happens to a single element `H`.
pub trait Action<H: ?Sized> {
    type Output: List;
}

pub struct Keep;

impl<H: ?Sized> Action<H> for Keep {
    type Output = Cons<H, Nil>;
}

pub struct Discard;

impl<H: ?Sized> Action<H> for Discard {
    type Output = Nil;
}

pub struct MapWith<F>(PhantomData<fn() -> F>);

impl<H: ?Sized, F: Transform<H>> Action<H> for MapWith<F> {
    type Output = Cons<F::Output, Nil>;
}

/// Keep when `F` holds, discard otherwise.
pub struct FilterWith<F>(PhantomData<fn() -> F>);

impl<H: ?Sized, F> Action<H> for FilterWith<F>
where
    F: Predicate<H>,
    F::Output: Choose<Keep, Discard, H>,
{
    type Output = <F::Output as Choose<Keep, Discard, H>>::Output;
}

/// Replaces the element with its position.
pub struct EmitPosition<P>(PhantomData<fn() -> P>);

impl<H: ?Sized, P: Nat> Action<H> for EmitPosition<P> {
    type Output = Cons<P, Nil>;
}

/// Runs `A` on `True` and `B` on `False`.
pub trait Choose<A, B, H: ?Sized> {
    type Output: List;
}

impl<A: Action<H>, B, H: ?Sized> Choose<A, B, H> for True {
    type Output = A::Output;
}

impl<A, B: Action<H>, H: ?Sized> Choose<A, B, H> for False {
    type Output = B::Output;
}

/// Per-position decision of a fold.
pub trait Step<H: ?Sized, P: Nat> {
    type Output: List;
}

pub trait Fold<R, P: Nat>: List {
    type Output: List;
}

impl<R, P: Nat> Fold<R, P> for Nil {
    type Output = Nil;
}

impl<H: ?Sized, T, R, P> Fold<R, P> for Cons<H, T>
where
    P: Nat,
    T: Fold<R, Succ<P>>,
    R: Step<H, P>,
{
    type Output = <<R as Step<H, P>>::Output as List>::Concat<<T as Fold<R, Succ<P>>>::Output>;
}

/// The list `L` folded with rule `R` from position zero.
pub type Folded<L, R> = <L as Fold<R, Zero>>::Output;

// ============================================================================
// Rules
// ============================================================================

/// `apply(f)`
pub struct MapAll<F>(PhantomData<fn() -> F>);

impl<H: ?Sized, P: Nat, F: Transform<H>> Step<H, P> for MapAll<F> {
    type Output = <MapWith<F> as Action<H>>::Output;
}

/// `apply(index, f)`
pub struct MapAt<I, F>(PhantomData<fn() -> (I, F)>);

impl<H: ?Sized, P: Nat, I: Nat, F> Step<H, P> for MapAt<I, F>
where
    P::Eq<I>: Choose<MapWith<F>, Keep, H>,
{
    type Output = <P::Eq<I> as Choose<MapWith<F>, Keep, H>>::Output;
}

/// `apply_range(start, end, f)`
pub struct MapRange<S, E, F>(PhantomData<fn() -> (S, E, F)>);

impl<H: ?Sized, P: Nat, S: Nat, E: Nat, F> Step<H, P> for MapRange<S, E, F>
where
    InRange<P, S, E>: Choose<MapWith<F>, Keep, H>,
{
    type Output = <InRange<P, S, E> as Choose<MapWith<F>, Keep, H>>::Output;
}

/// `filter(f)`
pub struct KeepIf<F>(PhantomData<fn() -> F>);

impl<H: ?Sized, P: Nat, F> Step<H, P> for KeepIf<F>
where
    FilterWith<F>: Action<H>,
{
    type Output = <FilterWith<F> as Action<H>>::Output;
}

/// `filter_range(start, end, f)`
pub struct KeepIfInRange<S, E, F>(PhantomData<fn() -> (S, E, F)>);

impl<H: ?Sized, P: Nat, S: Nat, E: Nat, F> Step<H, P> for KeepIfInRange<S, E, F>
where
    InRange<P, S, E>: Choose<FilterWith<F>, Keep, H>,
{
    type Output = <InRange<P, S, E> as Choose<FilterWith<F>, Keep, H>>::Output;
}

/// `remove(tag)`
pub struct DiscardMatching<X: ?Sized>(PhantomData<fn() -> *const X>);

impl<H: ?Sized, P: Nat, X: ?Sized> Step<H, P> for DiscardMatching<X>
where
    H: Descriptor,
    X: Descriptor,
    KeyOf<H>: KeyEq<KeyOf<X>>,
    <KeyOf<H> as KeyEq<KeyOf<X>>>::Output: Choose<Discard, Keep, H>,
{
    type Output = <<KeyOf<H> as KeyEq<KeyOf<X>>>::Output as Choose<Discard, Keep, H>>::Output;
}

/// `remove(index)` and `remove_range(start, end)`
pub struct DiscardRange<S, E>(PhantomData<fn() -> (S, E)>);

impl<H: ?Sized, P: Nat, S: Nat, E: Nat> Step<H, P> for DiscardRange<S, E>
where
    InRange<P, S, E>: Choose<Discard, Keep, H>,
{
    type Output = <InRange<P, S, E> as Choose<Discard, Keep, H>>::Output;
}

/// The positions at which `X` occurs, as a list of naturals.
pub struct PositionsOf<X: ?Sized>(PhantomData<fn() -> *const X>);

impl<H: ?Sized, P: Nat, X: ?Sized> Step<H, P> for PositionsOf<X>
where
    H: Descriptor,
    X: Descriptor,
    KeyOf<H>: KeyEq<KeyOf<X>>,
    <KeyOf<H> as KeyEq<KeyOf<X>>>::Output: Choose<EmitPosition<P>, Discard, H>,
{
    type Output =
        <<KeyOf<H> as KeyEq<KeyOf<X>>>::Output as Choose<EmitPosition<P>, Discard, H>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{IsSame, ToOption, ToRef};
    use crate::nat::{Index, ToNat};
    use static_assertions::assert_type_eq_all;

    type Abc = Cons<u8, Cons<u16, Cons<u32, Nil>>>;
    type N1 = ToNat<Index<1>>;
    type N2 = ToNat<Index<2>>;

    assert_type_eq_all!(Folded<Nil, MapAll<ToOption>>, Nil);
    assert_type_eq_all!(
        Folded<Abc, MapAll<ToOption>>,
        Cons<Option<u8>, Cons<Option<u16>, Cons<Option<u32>, Nil>>>
    );
    assert_type_eq_all!(
        Folded<Abc, MapAt<N1, ToOption>>,
        Cons<u8, Cons<Option<u16>, Cons<u32, Nil>>>
    );
    assert_type_eq_all!(
        Folded<Abc, MapRange<N1, N2, ToOption>>,
        Cons<u8, Cons<Option<u16>, Cons<u32, Nil>>>
    );
    assert_type_eq_all!(Folded<Abc, KeepIf<IsSame<u16>>>, Cons<u16, Nil>);
    assert_type_eq_all!(
        Folded<Abc, KeepIfInRange<N2, N2, IsSame<u16>>>,
        Abc
    );
    assert_type_eq_all!(Folded<Abc, DiscardMatching<u8>>, Cons<u16, Cons<u32, Nil>>);
    assert_type_eq_all!(Folded<Abc, DiscardRange<Zero, N2>>, Cons<u32, Nil>);

    type Twice = Cons<u8, Cons<u16, Cons<u8, Nil>>>;
    assert_type_eq_all!(Folded<Twice, PositionsOf<u8>>, Cons<Zero, Cons<N2, Nil>>);
    assert_type_eq_all!(Folded<Twice, PositionsOf<u16>>, Cons<N1, Nil>);
    assert_type_eq_all!(Folded<Twice, PositionsOf<i64>>, Nil);

    type Text = Cons<str, Cons<u8, Cons<str, Nil>>>;
    assert_type_eq_all!(Folded<Text, PositionsOf<str>>, Cons<Zero, Cons<N2, Nil>>);
    assert_type_eq_all!(Folded<Text, DiscardMatching<str>>, Cons<u8, Nil>);
    assert_type_eq_all!(Folded<Text, MapAt<Zero, ToRef>>, Cons<&'static str, Cons<u8, Cons<str, Nil>>>);

    // The transform is only required where it is applied.
    struct OnlyU16;
    impl Transform<u16> for OnlyU16 {
        type Output = i16;
    }
    assert_type_eq_all!(
        Folded<Abc, MapAt<N1, OnlyU16>>,
        Cons<u8, Cons<i16, Cons<u32, Nil>>>
    );
}
