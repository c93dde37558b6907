//! Type-level identity keys.
//!
//! Rust cannot ask "are these two types equal?" and get a type-level answer
//! back, so every descriptor carries a key and sequences compare keys
//! instead. A key is a list of [`Byte`]s: the 64-bit FNV-1a hash of the
//! descriptor's name (eight bytes, produced by the `key!` macro) followed by
//! the keys of its type parameters.

use core::marker::PhantomData;

use crate::logic::{self, Bool};

/// Eight type-level bits, most significant first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Byte<B7, B6, B5, B4, B3, B2, B1, B0>(PhantomData<(B7, B6, B5, B4, B3, B2, B1, B0)>);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KNil;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KCons<B, T>(PhantomData<(B, T)>);

pub trait Key: 'static {
    type Append<R: Key>: Key;
}

impl Key for KNil {
    type Append<R: Key> = R;
}

impl<B: 'static, T: Key> Key for KCons<B, T> {
    type Append<R: Key> = KCons<B, T::Append<R>>;
}

/// Byte equality.
pub trait ByteEq<Rhs> {
    type Output: Bool;
}

impl<A7, A6, A5, A4, A3, A2, A1, A0, B7, B6, B5, B4, B3, B2, B1, B0>
    ByteEq<Byte<B7, B6, B5, B4, B3, B2, B1, B0>> for Byte<A7, A6, A5, A4, A3, A2, A1, A0>
where
    A7: Bool,
    A6: Bool,
    A5: Bool,
    A4: Bool,
    A3: Bool,
    A2: Bool,
    A1: Bool,
    A0: Bool,
    B7: Bool,
    B6: Bool,
    B5: Bool,
    B4: Bool,
    B3: Bool,
    B2: Bool,
    B1: Bool,
    B0: Bool,
{
    type Output = logic::And<
        logic::And<
            logic::And<A7::Eq<B7>, A6::Eq<B6>>,
            logic::And<A5::Eq<B5>, A4::Eq<B4>>,
        >,
        logic::And<
            logic::And<A3::Eq<B3>, A2::Eq<B2>>,
            logic::And<A1::Eq<B1>, A0::Eq<B0>>,
        >,
    >;
}

/// Key equality. Keys of different lengths are never equal.
pub trait KeyEq<Rhs> {
    type Output: Bool;
}

impl KeyEq<KNil> for KNil {
    type Output = logic::True;
}

impl<B, T> KeyEq<KCons<B, T>> for KNil {
    type Output = logic::False;
}

impl<B, T> KeyEq<KNil> for KCons<B, T> {
    type Output = logic::False;
}

impl<A, T, B, U> KeyEq<KCons<B, U>> for KCons<A, T>
where
    A: ByteEq<B>,
    T: KeyEq<U>,
{
    type Output = logic::And<A::Output, T::Output>;
}
