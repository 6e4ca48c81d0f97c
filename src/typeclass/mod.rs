//! Type classes over boxed algebraic values.
//!
//! This module provides the Haskell-style type classes, each split in two:
//!
//! - An instance trait implemented on a metatype tag, naming the function
//!   entities that implement the class for that type:
//!   [`Functor`], [`Monad`], [`Foldable`].
//! - Generic operations that are themselves metafunction classes:
//!   [`Fmap`], [`Return`], [`Bind`], [`Then`], [`Fold`], [`Foldl`], [`Foldr`].
//!   They normalize the boxed argument, read its metatype and call the
//!   instance's function through [`Call`](crate::function::Call).
//!
//! Instances are fixed where the algebraic type is declared. An operation on a
//! type without the instance is an unsatisfied bound, so it does not compile:
//!
//! ```rust,compile_fail
//! use turbars::algebraic::boolean::True;
//! use turbars::function::{Eval, Identity};
//! use turbars::typeclass::Fmap;
//!
//! // Boolean is not a Functor.
//! type Mapped = Eval<Fmap, (True, Identity)>;
//! fn force<T>() {}
//! force::<Mapped>();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use turbars::algebraic::maybe::{Just, Maybe};
//! use turbars::boxed::Boxed;
//! use turbars::function::Eval;
//! use turbars::nat::{Add, Succ, Zero};
//! use turbars::typeclass::Fold;
//! use static_assertions::assert_type_eq_all;
//!
//! type Two = Succ<Succ<Zero>>;
//! assert_type_eq_all!(Eval<Fold, (Add, Two, Boxed<Maybe, Just, Two>)>, Succ<Succ<Two>>);
//! ```

mod foldable;
mod functor;
mod monad;

pub use foldable::{Fold, Foldable, Foldl, Foldr};
pub use functor::{Fmap, Functor};
pub use monad::{Bind, BindAfter, Discard, Monad, Return, Then};
