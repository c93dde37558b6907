//! Implementation of the `key!` macro.
//!
//! A key is the 64-bit FNV-1a hash of a name, spelled as a type-level list of
//! eight `Byte`s (most significant first), each byte being eight type-level
//! bits.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{LitStr, parse_macro_input};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub fn key_impl(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as LitStr);
    key_type(&name.value()).into()
}

pub(crate) fn fnv1a(name: &str) -> u64 {
    name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Expands to `KCons<Byte<..>, KCons<Byte<..>, ... KNil>>` for `name`.
pub(crate) fn key_type(name: &str) -> TokenStream2 {
    let bytes = fnv1a(name).to_be_bytes();
    bytes
        .iter()
        .rev()
        .fold(quote!(::tyseq::key::KNil), |tail, &byte| {
            let bits = (0..8).rev().map(|shift| bit((byte >> shift) & 1 == 1));
            quote!(::tyseq::key::KCons<::tyseq::key::Byte<#(#bits),*>, #tail>)
        })
}

fn bit(set: bool) -> TokenStream2 {
    if set {
        quote!(::tyseq::logic::True)
    } else {
        quote!(::tyseq::logic::False)
    }
}
