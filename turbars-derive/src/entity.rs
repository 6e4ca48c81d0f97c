//! Implementation of the function-entity derive macros.
//!
//! `Value`, `TurboFunction`, `StlFunction` and `MetafunctionClass` all emit an
//! `Entity` impl declaring the shape of the type. The two slot-carrying shapes
//! additionally emit the slot trait from a helper attribute.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Type, parse_macro_input};

/// The shape an entity derive declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Value,
    Turbo,
    Stl,
    Class,
}

impl EntityKind {
    const fn derive_name(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Turbo => "TurboFunction",
            Self::Stl => "StlFunction",
            Self::Class => "MetafunctionClass",
        }
    }

    fn shape(self) -> TokenStream2 {
        match self {
            Self::Value => quote!(::turbars::function::ValueShape),
            Self::Turbo => quote!(::turbars::function::TurboShape),
            Self::Stl => quote!(::turbars::function::StlShape),
            Self::Class => quote!(::turbars::function::ClassShape),
        }
    }
}

/// Entry point shared by the four entity derives.
pub fn derive_entity_impl(input: TokenStream, kind: EntityKind) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand_entity(&input, kind).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// Builds the impls for one entity derive.
pub fn expand_entity(input: &DeriveInput, kind: EntityKind) -> syn::Result<TokenStream2> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!("{} cannot be derived for unions.", kind.derive_name()),
        ));
    }

    let name = &input.ident;
    let shape = kind.shape();
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let slot = match kind {
        EntityKind::Turbo => {
            let result = slot_type(input, "result", kind)?;
            quote! {
                impl #impl_generics ::turbars::function::TurboFunction for #name #type_generics #where_clause {
                    type Result = #result;
                }
            }
        }
        EntityKind::Stl => {
            let slot = slot_type(input, "type_slot", kind)?;
            quote! {
                impl #impl_generics ::turbars::function::StlFunction for #name #type_generics #where_clause {
                    type Type = #slot;
                }
            }
        }
        EntityKind::Value | EntityKind::Class => TokenStream2::new(),
    };

    Ok(quote! {
        impl #impl_generics ::turbars::function::Entity for #name #type_generics #where_clause {
            type Shape = #shape;
        }

        #slot
    })
}

/// Reads the type out of the single `#[attribute(Type)]` on the input.
fn slot_type(input: &DeriveInput, attribute: &str, kind: EntityKind) -> syn::Result<Type> {
    let mut candidates = input
        .attrs
        .iter()
        .filter(|candidate| candidate.path().is_ident(attribute));

    let Some(first) = candidates.next() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "#[derive({})] requires a #[{attribute}(Type)] attribute naming the slot value.",
                kind.derive_name()
            ),
        ));
    };

    if let Some(duplicate) = candidates.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            format!("duplicate #[{attribute}(..)] attribute."),
        ));
    }

    first.parse_args::<Type>()
}
