//! Implementation of `#[derive(Descriptor)]`.
//!
//! The generated key is the key of the type's name qualified by the source
//! location of its declaration (or the `key` attribute value verbatim),
//! followed by the keys of its type parameters, in declaration order.

use proc_macro::{TokenStream, TokenTree};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_macro_input, parse_quote};

use crate::common::get_value_from_attrs;
use crate::key::key_type;

pub fn derive_descriptor_impl(input: TokenStream) -> TokenStream {
    let site = declaration_site(&input);
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input, site.as_deref()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// `file:line:column` of the identifier following `struct`, `enum` or
/// `union`. Attributes and visibility restrictions are delimited groups, so
/// the keyword is always a top-level token.
fn declaration_site(input: &TokenStream) -> Option<String> {
    let mut tokens = input.clone().into_iter();
    while let Some(token) = tokens.next() {
        let TokenTree::Ident(keyword) = token else {
            continue;
        };
        if !matches!(keyword.to_string().as_str(), "struct" | "enum" | "union") {
            continue;
        }
        let Some(TokenTree::Ident(ident)) = tokens.next() else {
            return None;
        };
        let span = ident.span();
        return Some(format!("{}:{}:{}", span.file(), span.line(), span.column()));
    }
    None
}

/// Name hashed into the key: the override as written, otherwise the
/// identifier qualified by its declaration site.
fn key_name(input: &DeriveInput, site: Option<&str>) -> syn::Result<String> {
    if let Some(name) = get_value_from_attrs(&input.attrs, "descriptor", "key")? {
        return Ok(name);
    }
    Ok(match site {
        Some(site) => format!("{}@{site}", input.ident),
        None => input.ident.to_string(),
    })
}

fn expand(mut input: DeriveInput, site: Option<&str>) -> syn::Result<TokenStream2> {
    let name = key_name(&input, site)?;

    let mut key = key_type(&name);
    let mut bounded = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Lifetime(_) => {}
            GenericParam::Type(param) => {
                let ident = &param.ident;
                key = quote! {
                    <#key as ::tyseq::key::Key>::Append<<#ident as ::tyseq::Descriptor>::Key>
                };
                bounded.push(ident.clone());
            }
            GenericParam::Const(param) => {
                return Err(syn::Error::new_spanned(
                    param,
                    "[tyseq] #[derive(Descriptor)] does not support const generic parameters",
                ));
            }
        }
    }

    let where_clause = input.generics.make_where_clause();
    for ident in &bounded {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::tyseq::Descriptor));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::tyseq::Descriptor for #ident #ty_generics #where_clause {
            type Key = #key;
        }
    })
}
