//! Functor type class - mapping over boxed values.
//!
//! An algebraic type becomes a `Functor` by naming, on its metatype tag, the
//! function that maps over one of its values. The generic [`Fmap`] operation
//! looks that function up from the value and delegates to it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! Eval<Fmap, (V, Identity)> == V
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! Eval<Fmap, (Eval<Fmap, (V, F)>, G)> == Eval<Fmap, (V, Compose<G, F>)>
//! ```
//!
//! # Examples
//!
//! ```rust
//! use turbars::algebraic::maybe::{Just, Maybe, Nothing};
//! use turbars::boxed::Boxed;
//! use turbars::function::Eval;
//! use turbars::nat::{Inc, Succ, Zero};
//! use turbars::typeclass::Fmap;
//! use static_assertions::assert_type_eq_all;
//!
//! type One = Eval<Fmap, (Boxed<Maybe, Just, Zero>, Inc)>;
//! assert_type_eq_all!(One, Boxed<Maybe, Just, Succ<Zero>>);
//!
//! // The empty constructor is preserved.
//! assert_type_eq_all!(Eval<Fmap, (Nothing, Inc)>, Boxed<Maybe, Nothing>);
//! ```

use crate::boxed::{BoxedValue, MetatypeOf};
use crate::function::{Call, MetafunctionClass, Norm, Normalize};

/// A type class for algebraic types whose values can be mapped over.
///
/// Implemented on the metatype tag. `Fmap` is a function entity called with
/// `(value, function)` where `value` is already normalized to a boxed value
/// of this type.
pub trait Functor {
    /// Maps a function over one value of the type.
    type Fmap;
}

/// `fmap(value, function)`: dispatches to the value's [`Functor`] instance.
///
/// Fails to compile when the value's type has no instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Fmap;

impl<V, F> MetafunctionClass<(V, F)> for Fmap
where
    V: Normalize,
    Norm<V>: BoxedValue,
    MetatypeOf<V>: Functor,
{
    type Apply = Call<<MetatypeOf<V> as Functor>::Fmap, (Norm<V>, F)>;
}
