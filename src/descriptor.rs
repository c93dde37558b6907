//! Descriptor identity.
//!
//! A descriptor is a type that can be compared with other types inside a
//! sequence. Operations that never look at element identity (`size`, `at`,
//! `apply`, `filter`, `append`, ...) accept any type; `contains`,
//! `index_of`, `count_of`, `remove(tag)` and sequence equality require
//! every element involved to implement [`Descriptor`].
//!
//! Implementations for the core primitives, `str`, slices, references and
//! raw pointers (to sized or unsized types), `Option`, `Result`, tuples up to
//! six elements and `PhantomData` are provided here. User types derive it:
//!
//! ```
//! use tyseq::{Descriptor, tag, type_seq};
//!
//! #[derive(Descriptor)]
//! struct Position;
//!
//! #[derive(Descriptor)]
//! struct Velocity;
//!
//! let components = type_seq![Position, Velocity];
//! assert!(components.contains(tag::<Velocity>()));
//! assert!(!components.contains(tag::<u8>()));
//! ```
//!
//! Not covered:
//!
//! - Arrays `[T; N]`: the length is a const generic and keys are types.
//! - Function pointers and closures.
//! - Trait objects of foreign traits. For a trait of your own, implement
//!   `Descriptor` for `dyn Trait` with [`key!`](crate::key!).
//!
//! Lifetimes are not part of identity: `&'a str` and `&'static str` are the
//! same descriptor.

use core::marker::{PhantomData, PhantomPinned};

use crate::key::Key;

/// A type with a static identity key.
///
/// Two descriptors are the same descriptor when their keys are equal. A
/// derived key hashes the type's name together with where it is declared,
/// so same-named types in different modules stay distinct. Hand-written
/// keys (`key!("...")` or `#[descriptor(key = "...")]`) are taken as given:
/// equal strings mean the same descriptor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type descriptor",
    label = "identity comparisons need `{Self}: Descriptor`",
    note = "derive it with `#[derive(tyseq::Descriptor)]` or implement it with `tyseq::key!`"
)]
pub trait Descriptor {
    type Key: Key;
}

/// The key of a descriptor.
pub type KeyOf<T> = <T as Descriptor>::Key;

macro_rules! leaf_descriptors {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Descriptor for $ty {
                type Key = crate::key!($name);
            }
        )*
    };
}

leaf_descriptors! {
    () => "()",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    PhantomPinned => "core::marker::PhantomPinned",
}

#[cfg(feature = "alloc")]
leaf_descriptors! {
    alloc::string::String => "alloc::string::String",
}

macro_rules! wrapper_descriptors {
    ($(impl<$($param:ident),+> $ty:ty => $name:literal;)*) => {
        $(
            impl<$($param: Descriptor),+> Descriptor for $ty {
                type Key = wrapper_descriptors!(@key crate::key!($name); $($param),+);
            }
        )*
    };

    (@key $acc:ty; $param:ident $(, $rest:ident)*) => {
        wrapper_descriptors!(@key <$acc as Key>::Append<<$param as Descriptor>::Key>; $($rest),*)
    };

    (@key $acc:ty;) => {
        $acc
    };
}

wrapper_descriptors! {
    impl<T> [T] => "[]";
    impl<T> Option<T> => "core::option::Option";
    impl<T, E> Result<T, E> => "core::result::Result";
    impl<A> (A,) => "(A,)";
    impl<A, B> (A, B) => "(A, B)";
    impl<A, B, C> (A, B, C) => "(A, B, C)";
    impl<A, B, C, D> (A, B, C, D) => "(A, B, C, D)";
    impl<A, B, C, D, E> (A, B, C, D, E) => "(A, B, C, D, E)";
    impl<A, B, C, D, E, F> (A, B, C, D, E, F) => "(A, B, C, D, E, F)";
}

#[cfg(feature = "alloc")]
wrapper_descriptors! {
    impl<T> alloc::vec::Vec<T> => "alloc::vec::Vec";
}

/// Wrappers whose parameter may be unsized.
macro_rules! pointer_descriptors {
    ($(impl<$($lt:lifetime,)? $param:ident> $ty:ty => $name:literal;)*) => {
        $(
            impl<$($lt,)? $param: Descriptor + ?Sized> Descriptor for $ty {
                type Key = <crate::key!($name) as Key>::Append<<$param as Descriptor>::Key>;
            }
        )*
    };
}

pointer_descriptors! {
    impl<'a, T> &'a T => "&";
    impl<'a, T> &'a mut T => "&mut";
    impl<T> *const T => "*const";
    impl<T> *mut T => "*mut";
    impl<T> PhantomData<T> => "core::marker::PhantomData";
}

#[cfg(feature = "alloc")]
pointer_descriptors! {
    impl<T> alloc::boxed::Box<T> => "alloc::boxed::Box";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyEq;
    use crate::logic::{False, True};
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Same<A, B> = <KeyOf<A> as KeyEq<KeyOf<B>>>::Output;

    assert_type_eq_all!(Same<i32, i32>, True);
    assert_type_eq_all!(Same<i32, u32>, False);
    assert_type_eq_all!(Same<Option<u8>, Option<u8>>, True);
    assert_type_eq_all!(Same<Option<u8>, Option<u16>>, False);
    assert_type_eq_all!(Same<Option<Option<u8>>, Option<u8>>, False);
    assert_type_eq_all!(Same<&'static i32, *const i32>, False);
    assert_type_eq_all!(Same<(u8, u16), (u8, u16)>, True);
    assert_type_eq_all!(Same<(u8, u16), (u16, u8)>, False);
    assert_type_eq_all!(Same<(u8,), u8>, False);
    assert_type_eq_all!(Same<Result<u8, ()>, Result<u8, ()>>, True);

    assert_impl_all!(&'static str: Descriptor);
    assert_impl_all!(str: Descriptor);
    assert_impl_all!([u8]: Descriptor);
    assert_impl_all!(*const [u8]: Descriptor);
    assert_type_eq_all!(Same<str, str>, True);
    assert_type_eq_all!(Same<str, &'static str>, False);
    assert_type_eq_all!(Same<[u8], [u16]>, False);
    assert_type_eq_all!(Same<&'static [u8], &'static mut [u8]>, False);
    assert_impl_all!((bool, char, f64): Descriptor);

    struct Opaque;
    assert_not_impl_any!(Opaque: Descriptor);
    assert_not_impl_any!(Option<Opaque>: Descriptor);

    #[cfg(feature = "alloc")]
    #[test]
    fn test_alloc_descriptors() {
        use alloc::{boxed::Box, string::String, vec::Vec};
        assert!(<Same<Vec<String>, Vec<String>> as crate::logic::Bool>::VALUE);
        assert!(!<Same<Box<u8>, Vec<u8>> as crate::logic::Bool>::VALUE);
        assert!(<Same<Box<str>, Box<str>> as crate::logic::Bool>::VALUE);
        assert!(!<Same<Box<str>, Box<[u8]>> as crate::logic::Bool>::VALUE);
    }
}
