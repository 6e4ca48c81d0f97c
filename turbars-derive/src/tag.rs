//! Implementation of the `#[derive(Tag)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input};

/// Main implementation of the Tag derive macro.
pub fn derive_tag_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand_tag(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// Emits the `Tag` impl naming the type by its module path.
pub fn expand_tag(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // A tag name has to identify one type, so parameters would collide.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Tag can only be derived for non-generic types.",
        ));
    }

    let literal = LitStr::new(&name.to_string(), name.span());

    Ok(quote! {
        impl ::turbars::boxed::Tag for #name {
            const NAME: &'static str = ::core::concat!(::core::module_path!(), "::", #literal);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn tag_name_is_module_qualified() {
        let input: DeriveInput = parse_quote! {
            pub struct Maybe;
        };

        let output = expand_tag(&input).unwrap().to_string();

        assert!(output.contains("module_path"));
        assert!(output.contains("\"Maybe\""));
    }

    #[test]
    fn generic_tags_are_rejected() {
        let input: DeriveInput = parse_quote! {
            pub struct Tagged<T>(T);
        };

        let error = expand_tag(&input).unwrap_err();

        assert!(error.to_string().contains("non-generic"));
    }
}
