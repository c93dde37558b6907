//! Generation of the `Index<I> -> Nat` table used by `tyseq::nat`.
//!
//! Each entry spells its natural out as `Succ<Succ<..Zero>>` instead of
//! referring to the previous entry, so resolving `Index<I>` never walks the
//! table.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{LitInt, parse_macro_input};

pub fn index_marks_impl(input: TokenStream) -> TokenStream {
    let count = parse_macro_input!(input as LitInt);
    match count.base10_parse::<usize>() {
        Ok(count) => index_marks(count).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn index_marks(count: usize) -> TokenStream2 {
    let mut nat = quote!(::tyseq::nat::Zero);
    let mut impls = TokenStream2::new();
    for i in 0..count {
        let lit = Literal::usize_unsuffixed(i);
        impls.extend(quote! {
            impl ::tyseq::nat::IndexMark for ::tyseq::nat::Index<#lit> {
                type Nat = #nat;
            }
        });
        nat = quote!(::tyseq::nat::Succ<#nat>);
    }
    impls
}
