//! Derive macros for turbars function entities and type tags.
//!
//! Every type taking part in type-level evaluation declares its shape through
//! `turbars::function::Entity`. These derives write that declaration, and the
//! matching slot trait where the shape has one.
//!
//! # Available Derive Macros
//!
//! - [`Value`]: a plain value, never called
//! - [`TurboFunction`]: a function holding its result in a `Result` slot
//! - [`StlFunction`]: a function holding its result in a `Type` slot
//! - [`MetafunctionClass`]: a function invoked through `apply`
//! - [`Tag`]: a metatype or constructor tag with a module-qualified name
//!
//! # Example
//!
//! ```rust,ignore
//! use std::marker::PhantomData;
//! use turbars::function::{Eval, TurboFunction, Value};
//!
//! #[derive(Value)]
//! struct Answer;
//!
//! #[derive(TurboFunction)]
//! #[result(Answer)]
//! struct Compute;
//!
//! static_assertions::assert_type_eq_all!(Eval<Compute>, Answer);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod entity;
mod tag;

use entity::EntityKind;
use proc_macro::TokenStream;

/// Declares a type as a plain value.
///
/// Values normalize to themselves and are rejected by `Eval`.
///
/// ```rust,ignore
/// #[derive(Value)]
/// struct Point<X, Y>(PhantomData<(X, Y)>);
/// ```
#[proc_macro_derive(Value)]
pub fn derive_value(input: TokenStream) -> TokenStream {
    entity::derive_entity_impl(input, EntityKind::Value)
}

/// Declares a Turbo function: the type carries its already computed result.
///
/// The result is named with a `#[result(Type)]` attribute. Generic parameters
/// of the deriving type are in scope.
///
/// ```rust,ignore
/// #[derive(TurboFunction)]
/// #[result(Succ<N>)]
/// struct Next<N>(PhantomData<N>);
/// ```
#[proc_macro_derive(TurboFunction, attributes(result))]
pub fn derive_turbo_function(input: TokenStream) -> TokenStream {
    entity::derive_entity_impl(input, EntityKind::Turbo)
}

/// Declares an STL-style function: the result sits in a `Type` slot.
///
/// The slot is named with a `#[type_slot(Type)]` attribute.
///
/// ```rust,ignore
/// #[derive(StlFunction, Tag)]
/// #[type_slot(Boxed<Maybe, Nothing>)]
/// struct Nothing;
/// ```
#[proc_macro_derive(StlFunction, attributes(type_slot))]
pub fn derive_stl_function(input: TokenStream) -> TokenStream {
    entity::derive_entity_impl(input, EntityKind::Stl)
}

/// Declares a metafunction class.
///
/// Only the shape is derived. Each accepted argument list is a hand-written
/// `MetafunctionClass<Args>` impl.
///
/// ```rust,ignore
/// #[derive(MetafunctionClass)]
/// struct Twice;
///
/// impl<A> turbars::function::MetafunctionClass<(A,)> for Twice {
///     type Apply = (A, A);
/// }
/// ```
#[proc_macro_derive(MetafunctionClass)]
pub fn derive_metafunction_class(input: TokenStream) -> TokenStream {
    entity::derive_entity_impl(input, EntityKind::Class)
}

/// Derives `turbars::boxed::Tag` for a non-generic type.
///
/// The tag name is `module_path!()` joined with the type name, so two tags
/// compare equal only when they are the same type.
#[proc_macro_derive(Tag)]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    tag::derive_tag_impl(input)
}
