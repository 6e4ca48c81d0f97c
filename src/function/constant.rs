//! Integral-constant wrappers.
//!
//! A constant is a value that also answers to the `Type` slot with itself.
//! Shape classification must not treat that slot as a call, so both wrappers
//! are declared [`ValueShape`] by hand. This is the deny-list entry for
//! accidental STL-style shapes.

use super::{Entity, StlFunction, ValueShape};

/// A type-level `bool`.
///
/// ```rust
/// use turbars::function::{BoolConstant, is_function};
///
/// assert!(BoolConstant::<true>::VALUE);
/// assert!(!is_function::<BoolConstant<true>>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoolConstant<const B: bool>;

/// The native `true` constant.
pub type TrueType = BoolConstant<true>;

/// The native `false` constant.
pub type FalseType = BoolConstant<false>;

impl<const B: bool> BoolConstant<B> {
    /// The wrapped value.
    pub const VALUE: bool = B;
}

impl<const B: bool> StlFunction for BoolConstant<B> {
    type Type = Self;
}

impl<const B: bool> Entity for BoolConstant<B> {
    type Shape = ValueShape;
}

/// A type-level `i64`.
///
/// ```rust
/// use turbars::function::IntConstant;
///
/// assert_eq!(IntConstant::<-4>::VALUE, -4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntConstant<const N: i64>;

impl<const N: i64> IntConstant<N> {
    /// The wrapped value.
    pub const VALUE: i64 = N;
}

impl<const N: i64> StlFunction for IntConstant<N> {
    type Type = Self;
}

impl<const N: i64> Entity for IntConstant<N> {
    type Shape = ValueShape;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{is_function, is_stl_function};
    use static_assertions::{assert_impl_all, assert_type_eq_all, const_assert};

    // The slot exists...
    assert_impl_all!(IntConstant<1>: StlFunction);
    assert_impl_all!(TrueType: StlFunction);
    assert_type_eq_all!(<IntConstant<1> as StlFunction>::Type, IntConstant<1>);

    // ...but never makes the constant a function.
    const_assert!(!is_stl_function::<IntConstant<1>>());
    const_assert!(!is_function::<IntConstant<1>>());
    const_assert!(!is_function::<TrueType>());
    const_assert!(!is_function::<FalseType>());

    #[test]
    fn constants_expose_their_values() {
        assert!(TrueType::VALUE);
        assert!(!FalseType::VALUE);
        assert_eq!(IntConstant::<42>::VALUE, 42);
        assert_eq!(IntConstant::<{ i64::MIN }>::VALUE, i64::MIN);
    }
}
