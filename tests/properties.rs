//! Algebraic laws of the sequence operations, checked on concrete sequences.

use pretty_assertions::{assert_eq, assert_ne};
use static_assertions::{assert_eq_size, const_assert};
use tyseq::func::{IsSame, Not};
use tyseq::{Descriptor, TypeSeq, func, index, tag, type_seq};

#[derive(Descriptor)]
struct A;

#[derive(Descriptor)]
struct B;

#[derive(Descriptor)]
struct C;

assert_eq_size!(TypeSeq![A, B, C], ());
assert_eq_size!(TypeSeq![], ());

const_assert!(type_seq![A, B].same_as(type_seq![A, B]));
const_assert!(!type_seq![A, B].same_as(type_seq![B, A]));

#[test]
fn test_size_zero_iff_empty() {
    assert_eq!(type_seq![].size() == 0, type_seq![].empty());
    assert_eq!(type_seq![A].size() == 0, type_seq![A].empty());
    assert_eq!(type_seq![A, B, C].size() == 0, type_seq![A, B, C].empty());
}

#[test]
fn test_append_literals() {
    assert_eq!(type_seq![A].append(type_seq![B, C]), type_seq![A, B, C]);
    assert_eq!(type_seq![A, B].append(tag::<C>()), type_seq![A, B, C]);
}

#[test]
fn test_removal_literals() {
    assert_eq!(type_seq![A, B, C].remove(index::<1>()), type_seq![A, C]);
    assert_eq!(type_seq![A, B, C].remove_range(index::<0>(), index::<2>()), type_seq![C]);
    assert_eq!(type_seq![A, A, B].remove(tag::<A>()), type_seq![B]);
}

#[test]
fn test_pop_back_then_append_back_round_trips() {
    let abc = type_seq![A, B, C];
    assert_eq!(abc.pop_back().append(abc.back()), abc);

    let aab = type_seq![A, A, B];
    assert_eq!(aab.pop_back().append(aab.back()), aab);

    let single = type_seq![C];
    assert_eq!(single.pop_back().append(single.back()), single);
}

#[test]
fn test_pop_front_then_prepend_front_round_trips() {
    let abc = type_seq![A, B, C];
    assert_eq!(abc.pop_front().prepend(abc.front()), abc);
}

#[test]
fn test_filter_is_idempotent() {
    let seq = type_seq![A, B, A, C, B];
    let once = seq.filter(func::<IsSame<B>>());
    assert_eq!(once.filter(func::<IsSame<B>>()), once);

    let once = seq.filter(func::<Not<IsSame<B>>>());
    assert_eq!(once.filter(func::<Not<IsSame<B>>>()), once);
}

#[test]
fn test_filter_and_complement_partition() {
    let seq = type_seq![A, B, A, C];
    let kept = seq.filter(func::<IsSame<A>>());
    let dropped = seq.filter(func::<Not<IsSame<A>>>());
    assert_eq!(kept.size() + dropped.size(), seq.size());
    assert_eq!(dropped, seq.remove(tag::<A>()));
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let ab = type_seq![A, B];
    assert_eq!(ab, ab);
    assert_eq!(type_seq![], type_seq![]);
    assert!(ab == type_seq![A, B] && type_seq![A, B] == ab);
    assert!(ab != type_seq![B, A] && type_seq![B, A] != ab);
}

#[test]
fn test_equality_is_length_and_order_sensitive() {
    assert_ne!(type_seq![A], type_seq![A, A]);
    assert_ne!(type_seq![A, A], type_seq![A]);
    assert_ne!(type_seq![A, B], type_seq![B, A]);
    assert_ne!(type_seq![], type_seq![A]);
}

#[test]
fn test_count_matches_filter_size() {
    let seq = type_seq![A, B, A, C, A];
    assert_eq!(seq.count_of(tag::<A>()), seq.filter(func::<IsSame<A>>()).size());
    assert_eq!(seq.count_of(tag::<A>()), 3);
}

#[test]
fn test_index_of_agrees_with_at() {
    let seq = type_seq![A, B, C];
    assert_eq!(seq.index_of(tag::<C>()), 2);
    assert_eq!(seq.at(index::<2>()), tag::<C>());
}
