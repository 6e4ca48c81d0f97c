//! Foldable type class - reducing boxed values to a summary value.
//!
//! All three operations take `(function, seed, value)`:
//!
//! - `Foldl` calls `function(accumulator, element)` from the left.
//! - `Foldr` calls `function(element, accumulator)` from the right.
//! - `Fold` is the type's preferred fold; for the bundled types it is `Foldl`.
//!
//! # Examples
//!
//! ```rust
//! use turbars::algebraic::list::Variadic;
//! use turbars::function::Eval;
//! use turbars::nat::{Add, Succ, Zero};
//! use turbars::typeclass::Foldl;
//! use static_assertions::assert_type_eq_all;
//!
//! type One = Succ<Zero>;
//! type Numbers = Eval<Variadic, (One, One, One)>;
//!
//! assert_type_eq_all!(Eval<Foldl, (Add, Zero, Numbers)>, Succ<Succ<Succ<Zero>>>);
//! ```

use crate::boxed::{BoxedValue, MetatypeOf};
use crate::function::{Call, MetafunctionClass, Norm, Normalize};

/// A type class for algebraic types that can be folded.
///
/// Implemented on the metatype tag. Each member is called with
/// `(function, seed, value)` where `value` is already normalized.
pub trait Foldable {
    /// The type's preferred fold.
    type Fold;
    /// Left-associative fold.
    type Foldl;
    /// Right-associative fold.
    type Foldr;
}

macro_rules! fold_operation {
    ($(#[$meta:meta])* $operation:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
        pub struct $operation;

        impl<F, Seed, T> MetafunctionClass<(F, Seed, T)> for $operation
        where
            T: Normalize,
            Norm<T>: BoxedValue,
            MetatypeOf<T>: Foldable,
        {
            type Apply = Call<<MetatypeOf<T> as Foldable>::$operation, (F, Seed, Norm<T>)>;
        }
    };
}

fold_operation! {
    /// `fold(function, seed, value)`: the type's preferred fold.
    Fold
}

fold_operation! {
    /// `foldl(function, seed, value)`: folds from the left.
    Foldl
}

fold_operation! {
    /// `foldr(function, seed, value)`: folds from the right.
    Foldr
}
