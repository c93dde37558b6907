//! Procedural macros for tyseq descriptor identity.
//!
//! - `key!("name")` - The type-level identity key for a name
//! - `#[derive(Descriptor)]` - Implement `tyseq::Descriptor` for a type
//!
//! Both macros expand to paths under `::tyseq`, so they are meant to be used
//! through the re-exports in the `tyseq` crate.

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod descriptor;
mod index;
mod key;

/// Expands to the type-level identity key of a name.
///
/// The key is the 64-bit FNV-1a hash of the string, spelled as eight
/// type-level bytes. Use it in type position when implementing `Descriptor`
/// by hand:
///
/// ```ignore
/// use tyseq::{Descriptor, key};
///
/// struct Meters(f64);
///
/// impl Descriptor for Meters {
///     type Key = key!("units::Meters");
/// }
/// ```
#[proc_macro]
pub fn key(input: TokenStream) -> TokenStream {
    key::key_impl(input)
}

/// Derive `tyseq::Descriptor`.
///
/// The key is built from the type's identifier and the source location of
/// its declaration, followed by the keys of its type parameters. Types with
/// the same name in different modules are therefore distinct, and so are
/// `Wrapper<u8>` and `Wrapper<u16>`. Every type parameter receives a
/// `Descriptor` bound.
///
/// # Example
///
/// ```ignore
/// use tyseq::Descriptor;
///
/// #[derive(Descriptor)]
/// struct Position;
///
/// #[derive(Descriptor)]
/// struct Wrapper<T>(T);
/// ```
///
/// # Key Override
///
/// The `key` attribute replaces the name and location with a fixed string.
/// Use it when a hand-written `impl Descriptor` elsewhere (with
/// `key!("physics::Position")`) must name the same identity:
///
/// ```ignore
/// #[derive(Descriptor)]
/// #[descriptor(key = "physics::Position")]
/// struct Position;
/// ```
///
/// Two declarations with the same `key` value are the same descriptor.
///
/// # Restrictions
///
/// - Const generic parameters are not supported
/// - A `struct` written literally inside a `macro_rules!` body has one
///   declaration site for every expansion; give it a `key` if the macro is
///   expanded more than once
#[proc_macro_derive(Descriptor, attributes(descriptor))]
pub fn derive_descriptor(input: TokenStream) -> TokenStream {
    descriptor::derive_descriptor_impl(input)
}

/// Generates `IndexMark` impls for `Index<0>` up to `Index<count - 1>`.
///
/// Only used inside `tyseq::nat`.
#[doc(hidden)]
#[proc_macro]
pub fn index_marks(input: TokenStream) -> TokenStream {
    index::index_marks_impl(input)
}
