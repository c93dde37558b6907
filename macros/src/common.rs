//! Shared utilities for tyseq procedural macros.

use proc_macro2::TokenStream as TokenStream2;
use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// Parse a single `key = "value"` from attribute tokens.
///
/// # Arguments
/// - `tokens`: The token stream inside the attribute's parentheses.
/// - `key`: The identifier to look for (e.g., "key").
///
/// # Returns
/// - `Ok(Some(value))` if `key = "value"` is found.
/// - `Ok(None)` if the tokens are empty.
/// - `Err(...)` if malformed or another key is present.
pub(crate) fn parse_name_value(tokens: TokenStream2, key: &str) -> syn::Result<Option<String>> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let meta: Meta = syn::parse2(tokens)?;
    match meta {
        Meta::NameValue(nv) if nv.path.is_ident(key) => {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(value),
                ..
            }) = &nv.value
            {
                return Ok(Some(value.value()));
            }
            Err(syn::Error::new_spanned(
                &nv.value,
                format!("[tyseq] {} must be a string literal", key),
            ))
        }
        _ => Err(syn::Error::new_spanned(
            meta,
            format!("[tyseq] expected `{} = \"...\"`, or no arguments", key),
        )),
    }
}

/// Looks up `#[attr_name(key = "...")]` among an item's attributes.
///
/// # Returns
/// - `Ok(Some(value))`: the attribute is present and carries the key.
/// - `Ok(None)`: the attribute is absent, or present without arguments.
/// - `Err(...)`: the attribute is present but malformed.
pub(crate) fn get_value_from_attrs(
    item_attrs: &[Attribute],
    attr_name: &str,
    key: &str,
) -> syn::Result<Option<String>> {
    let attr = item_attrs.iter().find(|a| a.path().is_ident(attr_name));
    let Some(attr) = attr else {
        return Ok(None);
    };

    let tokens = match &attr.meta {
        Meta::Path(_) => TokenStream2::new(), // #[attr] - no arguments
        Meta::List(list) => list.tokens.clone(), // #[attr(...)] - get the tokens inside parens
        Meta::NameValue(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                format!("[tyseq] invalid attribute syntax for `#[{}]`", attr_name),
            ));
        }
    };

    parse_name_value(tokens, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_value() {
        let value = parse_name_value(quote!(key = "app::Position"), "key").unwrap();
        assert_eq!(value.as_deref(), Some("app::Position"));

        assert_eq!(parse_name_value(TokenStream2::new(), "key").unwrap(), None);
    }

    #[test]
    fn test_parse_name_value_rejects_non_string() {
        let err = parse_name_value(quote!(key = 123), "key").unwrap_err();
        assert!(err.to_string().contains("must be a string literal"));

        let err = parse_name_value(quote!(name = "x"), "key").unwrap_err();
        assert!(err.to_string().contains("expected `key = \"...\"`"));
    }

    #[test]
    fn test_get_value_from_attrs() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[doc = "A position"]),
            parse_quote!(#[descriptor(key = "physics::Position")]),
        ];
        let value = get_value_from_attrs(&attrs, "descriptor", "key").unwrap();
        assert_eq!(value.as_deref(), Some("physics::Position"));

        let bare: Vec<Attribute> = vec![parse_quote!(#[descriptor])];
        assert_eq!(get_value_from_attrs(&bare, "descriptor", "key").unwrap(), None);

        let malformed: Vec<Attribute> = vec![parse_quote!(#[descriptor = "x"])];
        assert!(get_value_from_attrs(&malformed, "descriptor", "key").is_err());
    }
}
