//! [`TypeSeq`], the user-facing type sequence, and its algebra.
//!
//! A `TypeSeq<L>` has no runtime content. Every method returns a new
//! zero-sized value whose type is the result; scalar queries are `const fn`
//! reading associated constants. Preconditions are trait bounds, so an
//! invalid call does not compile:
//!
//! ```compile_fail
//! use tyseq::type_seq;
//!
//! let _ = type_seq![].front();
//! ```
//!
//! ```compile_fail
//! use tyseq::{index, type_seq};
//!
//! let _ = type_seq![u8, u16].at(index::<2>());
//! ```
//!
//! ```compile_fail
//! use tyseq::{tag, type_seq};
//!
//! const I: usize = type_seq![u8, u16, u8].index_of(tag::<u8>());
//! ```
//!
//! ```compile_fail
//! use tyseq::{index, type_seq};
//!
//! let _ = type_seq![u8, u16].remove_range(index::<1>(), index::<3>());
//! ```
//!
//! ```compile_fail
//! use tyseq::func::ToOption;
//! use tyseq::{func, index, type_seq};
//!
//! let _ = type_seq![u8].apply_at(index::<1>(), func::<ToOption>());
//! ```

use core::marker::PhantomData;
use core::ops::Add;

use crate::fold::{
    DiscardMatching, DiscardRange, Fold, Folded, KeepIf, KeepIfInRange, MapAll, MapAt, MapRange,
    PositionsOf,
};
use crate::func::{Func, Not};
use crate::list::{Cons, Get, List, Nil};
use crate::logic::Bool;
use crate::nat::{Below, Index, IndexMark, Succ, ToNat, ValidRange, Zero};
use crate::query::{NonEmpty, Positions, SameSeq, Unique};
use crate::tag::Tag;

/// An ordered, immutable sequence of types.
///
/// Name one with [`TypeSeq!`](crate::TypeSeq!) and create one with
/// [`type_seq!`](crate::type_seq!):
///
/// ```
/// use tyseq::{index, tag, type_seq, TypeSeq};
///
/// let seq: TypeSeq![i32, &str, i32] = type_seq![i32, &str, i32];
///
/// assert_eq!(seq.size(), 3);
/// assert_eq!(seq.count_of(tag::<i32>()), 2);
/// assert_eq!(seq.index_of(tag::<&str>()), 1);
/// assert!(seq.remove(tag::<i32>()) == type_seq![&str]);
/// assert!(seq.remove(index::<0>()) == type_seq![&str, i32]);
/// ```
pub struct TypeSeq<L>(PhantomData<fn() -> L>);

impl<L> Clone for TypeSeq<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for TypeSeq<L> {}

impl<L> Default for TypeSeq<L> {
    fn default() -> Self {
        TypeSeq(PhantomData)
    }
}

impl<L: List> TypeSeq<L> {
    pub const LEN: usize = L::LEN;

    pub const fn new() -> Self {
        TypeSeq(PhantomData)
    }

    // ------------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------------

    pub const fn size(&self) -> usize {
        L::LEN
    }

    pub const fn empty(&self) -> bool {
        L::LEN == 0
    }

    pub const fn is_empty(&self) -> bool {
        self.empty()
    }

    pub const fn front(&self) -> Tag<<L as NonEmpty>::Front>
    where
        L: NonEmpty,
    {
        Tag::new()
    }

    pub const fn back(&self) -> Tag<<L as NonEmpty>::Back>
    where
        L: NonEmpty,
    {
        Tag::new()
    }

    pub const fn at<const I: usize>(&self, _index: Index<I>) -> Tag<<L as Get<ToNat<Index<I>>>>::Output>
    where
        Index<I>: IndexMark,
        ToNat<Index<I>>: Below<L::Len>,
        L: Get<ToNat<Index<I>>>,
    {
        Tag::new()
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    pub const fn contains<X: ?Sized>(&self, _tag: Tag<X>) -> bool
    where
        L: Fold<PositionsOf<X>, Zero>,
    {
        <Positions<L, X> as List>::LEN != 0
    }

    /// Position of `X`, or [`NPOS`](crate::NPOS) when absent. `X` must not
    /// occur more than once.
    pub const fn index_of<X: ?Sized>(&self, _tag: Tag<X>) -> usize
    where
        L: Fold<PositionsOf<X>, Zero>,
        Positions<L, X>: Unique,
    {
        <Positions<L, X> as Unique>::INDEX
    }

    pub const fn count_of<X: ?Sized>(&self, _tag: Tag<X>) -> usize
    where
        L: Fold<PositionsOf<X>, Zero>,
    {
        <Positions<L, X> as List>::LEN
    }

    /// Whether `F` holds for every element. True for an empty sequence.
    pub const fn all_of<F>(&self, _f: Func<F>) -> bool
    where
        L: Fold<KeepIf<Not<F>>, Zero>,
    {
        <Folded<L, KeepIf<Not<F>>> as List>::LEN == 0
    }

    /// Whether `F` holds for at least one element. False for an empty
    /// sequence.
    pub const fn one_of<F>(&self, _f: Func<F>) -> bool
    where
        L: Fold<KeepIf<F>, Zero>,
    {
        <Folded<L, KeepIf<F>> as List>::LEN != 0
    }

    /// Same length and the same descriptor at every position.
    pub const fn same_as<M>(&self, _other: TypeSeq<M>) -> bool
    where
        L: SameSeq<M>,
    {
        <<L as SameSeq<M>>::Output as Bool>::VALUE
    }

    // ------------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------------

    #[inline(always)]
    pub const fn apply<F>(self, _f: Func<F>) -> TypeSeq<Folded<L, MapAll<F>>>
    where
        L: Fold<MapAll<F>, Zero>,
    {
        TypeSeq::new()
    }

    #[inline(always)]
    pub const fn apply_at<const I: usize, F>(
        self,
        _index: Index<I>,
        _f: Func<F>,
    ) -> TypeSeq<Folded<L, MapAt<ToNat<Index<I>>, F>>>
    where
        Index<I>: IndexMark,
        ToNat<Index<I>>: Below<L::Len>,
        L: Fold<MapAt<ToNat<Index<I>>, F>, Zero>,
    {
        TypeSeq::new()
    }

    /// Maps the positions in `[S, E)`. An empty range returns the sequence
    /// unchanged without checking the endpoints.
    #[inline(always)]
    pub const fn apply_range<const S: usize, const E: usize, F>(
        self,
        _start: Index<S>,
        _end: Index<E>,
        _f: Func<F>,
    ) -> TypeSeq<Folded<L, MapRange<ToNat<Index<S>>, ToNat<Index<E>>, F>>>
    where
        Index<S>: IndexMark,
        Index<E>: IndexMark,
        ToNat<Index<S>>: ValidRange<ToNat<Index<E>>, L::Len>,
        L: Fold<MapRange<ToNat<Index<S>>, ToNat<Index<E>>, F>, Zero>,
    {
        TypeSeq::new()
    }

    #[inline(always)]
    pub const fn filter<F>(self, _f: Func<F>) -> TypeSeq<Folded<L, KeepIf<F>>>
    where
        L: Fold<KeepIf<F>, Zero>,
    {
        TypeSeq::new()
    }

    /// Filters the positions in `[S, E)` and keeps everything outside it.
    #[inline(always)]
    pub const fn filter_range<const S: usize, const E: usize, F>(
        self,
        _start: Index<S>,
        _end: Index<E>,
        _f: Func<F>,
    ) -> TypeSeq<Folded<L, KeepIfInRange<ToNat<Index<S>>, ToNat<Index<E>>, F>>>
    where
        Index<S>: IndexMark,
        Index<E>: IndexMark,
        ToNat<Index<S>>: ValidRange<ToNat<Index<E>>, L::Len>,
        L: Fold<KeepIfInRange<ToNat<Index<S>>, ToNat<Index<E>>, F>, Zero>,
    {
        TypeSeq::new()
    }

    /// Appends a [`Tag`] or another sequence.
    #[inline]
    pub fn append<A: SeqArg>(self, _arg: A) -> TypeSeq<A::AppendTo<L>> {
        TypeSeq::new()
    }

    /// Prepends a [`Tag`] or another sequence.
    #[inline]
    pub fn prepend<A: SeqArg>(self, _arg: A) -> TypeSeq<A::PrependTo<L>> {
        TypeSeq::new()
    }

    /// Removes every occurrence of a [`Tag`], or the element at an
    /// [`Index`].
    #[inline]
    pub fn remove<A: Removal<L>>(self, _arg: A) -> TypeSeq<A::Output> {
        TypeSeq::new()
    }

    /// Removes the positions in `[S, E)`. An empty range returns the sequence
    /// unchanged without checking the endpoints.
    #[inline(always)]
    pub const fn remove_range<const S: usize, const E: usize>(
        self,
        _start: Index<S>,
        _end: Index<E>,
    ) -> TypeSeq<Folded<L, DiscardRange<ToNat<Index<S>>, ToNat<Index<E>>>>>
    where
        Index<S>: IndexMark,
        Index<E>: IndexMark,
        ToNat<Index<S>>: ValidRange<ToNat<Index<E>>, L::Len>,
        L: Fold<DiscardRange<ToNat<Index<S>>, ToNat<Index<E>>>, Zero>,
    {
        TypeSeq::new()
    }

    /// Drops the first element. No-op on an empty sequence.
    #[inline(always)]
    pub const fn pop_front(self) -> TypeSeq<L::PopFront> {
        TypeSeq::new()
    }

    /// Drops the last element. No-op on an empty sequence.
    #[inline(always)]
    pub const fn pop_back(self) -> TypeSeq<L::PopBack> {
        TypeSeq::new()
    }
}

/// Arguments accepted by `append`, `prepend` and `+`.
pub trait SeqArg {
    type AppendTo<L: List>: List;
    type PrependTo<L: List>: List;
}

impl<X: ?Sized> SeqArg for Tag<X> {
    type AppendTo<L: List> = L::Concat<Cons<X, Nil>>;
    type PrependTo<L: List> = Cons<X, L>;
}

impl<M: List> SeqArg for TypeSeq<M> {
    type AppendTo<L: List> = L::Concat<M>;
    type PrependTo<L: List> = M::Concat<L>;
}

/// Arguments accepted by `remove`.
pub trait Removal<L: List> {
    type Output: List;
}

impl<L, X: ?Sized> Removal<L> for Tag<X>
where
    L: Fold<DiscardMatching<X>, Zero>,
{
    type Output = Folded<L, DiscardMatching<X>>;
}

impl<L, const I: usize> Removal<L> for Index<I>
where
    L: List,
    Index<I>: IndexMark,
    ToNat<Index<I>>: Below<L::Len>,
    L: Fold<DiscardRange<ToNat<Index<I>>, Succ<ToNat<Index<I>>>>, Zero>,
{
    type Output = Folded<L, DiscardRange<ToNat<Index<I>>, Succ<ToNat<Index<I>>>>>;
}

impl<L: List, A: SeqArg> Add<A> for TypeSeq<L> {
    type Output = TypeSeq<A::AppendTo<L>>;

    fn add(self, rhs: A) -> Self::Output {
        self.append(rhs)
    }
}

impl<L, M> PartialEq<TypeSeq<M>> for TypeSeq<L>
where
    L: List + SameSeq<M>,
{
    fn eq(&self, other: &TypeSeq<M>) -> bool {
        self.same_as(*other)
    }
}

impl<L> Eq for TypeSeq<L> where L: List + SameSeq<L> {}

/// Access to the list behind a sequence type, for the aliases below.
pub trait Sequence {
    type List: List;
}

impl<L: List> Sequence for TypeSeq<L> {
    type List = L;
}

pub type Front<S> = <<S as Sequence>::List as NonEmpty>::Front;

pub type Back<S> = <<S as Sequence>::List as NonEmpty>::Back;

pub type At<S, I> = <<S as Sequence>::List as Get<ToNat<I>>>::Output;

pub type Concat<S, R> =
    TypeSeq<<<S as Sequence>::List as List>::Concat<<R as Sequence>::List>>;

pub type Mapped<S, F> = TypeSeq<Folded<<S as Sequence>::List, MapAll<F>>>;

pub type Filtered<S, F> = TypeSeq<Folded<<S as Sequence>::List, KeepIf<F>>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{IsSame, ToOption};
    use crate::{TypeSeq, index, tag, type_seq};
    use pretty_assertions::assert_eq;
    use static_assertions::{assert_eq_size, assert_impl_all, assert_type_eq_all, const_assert, const_assert_eq};

    type Abc = TypeSeq![u8, u16, u32];

    assert_eq_size!(Abc, ());
    assert_impl_all!(Abc: Copy, Send, Sync, Default);

    assert_type_eq_all!(Front<Abc>, u8);
    assert_type_eq_all!(Back<Abc>, u32);
    assert_type_eq_all!(At<Abc, Index<1>>, u16);
    assert_type_eq_all!(Concat<Abc, TypeSeq![i8]>, TypeSeq![u8, u16, u32, i8]);
    assert_type_eq_all!(Mapped<TypeSeq![u8], ToOption>, TypeSeq![Option<u8>]);
    assert_type_eq_all!(Filtered<Abc, IsSame<u32>>, TypeSeq![u32]);

    const_assert_eq!(Abc::LEN, 3);
    const_assert_eq!(type_seq![u8, u16, u32].size(), 3);
    const_assert!(type_seq![].empty());
    const_assert!(type_seq![u8, u16].contains(tag::<u16>()));
    const_assert_eq!(type_seq![u8, u16].index_of(tag::<u16>()), 1);
    const_assert_eq!(type_seq![u8, u8].count_of(tag::<u8>()), 2);

    #[test]
    fn test_carriers_resolve() {
        let seq: Abc = type_seq![u8, u16, u32];
        assert_eq!(seq.front(), tag::<u8>());
        assert_eq!(seq.back(), tag::<u32>());
        assert_eq!(seq.at(index::<2>()), tag::<u32>());
        assert_eq!(seq.is_empty(), false);
    }

    #[test]
    fn test_add_operator() {
        let seq = type_seq![u8] + tag::<u16>() + type_seq![u32];
        assert!(seq == type_seq![u8, u16, u32]);
    }
}
