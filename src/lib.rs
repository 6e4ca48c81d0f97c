//! # turbars
//!
//! Compile-time metaprogramming for Rust: computation expressed as types and
//! evaluated by the trait solver.
//!
//! ## Overview
//!
//! Every value is a type. A type that takes part in evaluation declares one
//! of four shapes (plain value, Turbo function, STL-style function or
//! metafunction class), and [`function::Eval`] is the single call surface
//! that turns a function and its argument tuple into a result. On top of
//! that the crate provides:
//!
//! - **Boxed values**: algebraic data as `(metatype, constructor, payload)`
//!   triples with `is_a` / `constructed_by` predicates
//! - **Type Classes**: `Functor`, `Monad` and `Foldable`, attached to the
//!   metatype tag
//! - **Algebraic Types**: `Boolean`, `List` and `Maybe` with their instances
//! - **Naturals**: unary `Zero` / `Succ` numbers to compute with
//! - **Dynamic Evaluation**: the same evaluation model over a graph built at
//!   runtime, with an explicit depth limit
//!
//! ## Feature Flags
//!
//! - `typeclass`: type classes and the bundled algebraic types
//! - `dynamic`: the runtime graph interpreter (implies `typeclass`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use turbars::prelude::*;
//! use turbars::algebraic::maybe::{Just, Maybe};
//! use static_assertions::assert_type_eq_all;
//!
//! type Two = Succ<Succ<Zero>>;
//! type Lifted = Eval<Return, (Maybe, Zero)>;
//!
//! assert_type_eq_all!(Eval<Fmap, (Eval<Fmap, (Lifted, Inc)>, Inc)>, Eval<Just, (Two,)>);
//! assert!(is_a::<Maybe, Lifted>());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![recursion_limit = "256"]

extern crate self as turbars;

/// Prelude module for convenient imports.
///
/// Re-exports the function convention, boxed values, naturals and the
/// generic type class operations. Algebraic types are imported from their
/// own modules since their operation names (`Not`, `And`, ...) are generic.
///
/// # Usage
///
/// ```rust
/// use turbars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boxed::*;
    pub use crate::function::*;
    pub use crate::nat::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::{EvalConfig, EvalError, Evaluator, Graph, NodeId, Prelude, Reflect};
}

pub mod boxed;
pub mod function;
pub mod nat;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod algebraic;

#[cfg(feature = "dynamic")]
pub mod dynamic;
