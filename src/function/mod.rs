//! The function convention: what counts as a callable type-level entity.
//!
//! Every value in this crate is a type. A type takes part in evaluation by
//! implementing [`Entity`], which declares one of four shapes:
//!
//! - [`ValueShape`]: a plain value. It normalizes to itself and cannot be called.
//! - [`TurboShape`]: a *Turbo function*. The type carries its already computed
//!   value in the [`TurboFunction::Result`] slot.
//! - [`StlShape`]: an *STL-style function*. The value sits in the
//!   [`StlFunction::Type`] slot.
//! - [`ClassShape`]: a *metafunction class*. The type is invoked through
//!   [`MetafunctionClass::Apply`] with an argument tuple.
//!
//! Rust cannot ask "does this type have a member named `Result`" from generic
//! code, so the shape is declared rather than detected. The slot traits are
//! still what evaluation reads: a shape whose slot is missing fails to
//! evaluate just like a type without the slot would.
//!
//! # Accidental shapes
//!
//! Integral-constant wrappers such as [`IntConstant`] alias themselves through
//! a `Type` slot. They implement [`StlFunction`] but are declared
//! [`ValueShape`], so [`is_function`] is false for them and evaluation never
//! mistakes a constant for a call.
//!
//! # Examples
//!
//! ```rust
//! use turbars::function::{Eval, Function, is_function, IntConstant};
//! use static_assertions::{assert_type_eq_all, const_assert};
//!
//! assert_type_eq_all!(Eval<Function<u8>>, u8);
//! const_assert!(is_function::<Function<u8>>());
//! const_assert!(!is_function::<IntConstant<3>>());
//! ```

mod constant;
mod eval;
mod wrapper;

pub use constant::{BoolConstant, FalseType, IntConstant, TrueType};
pub use eval::{Eval, EvaluateAs, Evaluate, Norm, Normalize, NormalizeAs};
pub use turbars_derive::{MetafunctionClass, StlFunction, TurboFunction, Value};
pub use wrapper::{Call, Compose, Function, Identity, Partial};

/// A function that carries its already computed value.
pub trait TurboFunction {
    /// The value of the function.
    type Result;
}

/// A function that exposes its value through a `Type` slot.
pub trait StlFunction {
    /// The value of the function.
    type Type;
}

/// A function invoked through `apply` with the argument tuple `Args`.
///
/// `Args` is `()` for a nullary call, `(A,)` for one argument, and so on.
/// A class may accept several argument lists by implementing this trait
/// once per list; impls that bound their arguments act as guards.
pub trait MetafunctionClass<Args> {
    /// The entity produced by the call. Evaluation normalizes it once more.
    type Apply;
}

/// Declares the shape of a type-level entity.
pub trait Entity {
    /// One of [`ValueShape`], [`TurboShape`], [`StlShape`] or [`ClassShape`].
    type Shape: Shape;
}

/// Marker for plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueShape;

/// Marker for entities with a `Result` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurboShape;

/// Marker for entities with a `Type` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StlShape;

/// Marker for metafunction classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassShape;

/// The closed set of entity shapes.
///
/// At most one of the flags is true for any shape.
pub trait Shape: sealed::Sealed {
    /// The entity exposes a `Result` slot.
    const IS_TURBO_FUNCTION: bool;
    /// The entity exposes a `Type` slot and is not a denied constant.
    const IS_STL_FUNCTION: bool;
    /// The entity exposes `apply`.
    const IS_METAFUNCTION_CLASS: bool;
}

impl Shape for ValueShape {
    const IS_TURBO_FUNCTION: bool = false;
    const IS_STL_FUNCTION: bool = false;
    const IS_METAFUNCTION_CLASS: bool = false;
}

impl Shape for TurboShape {
    const IS_TURBO_FUNCTION: bool = true;
    const IS_STL_FUNCTION: bool = false;
    const IS_METAFUNCTION_CLASS: bool = false;
}

impl Shape for StlShape {
    const IS_TURBO_FUNCTION: bool = false;
    const IS_STL_FUNCTION: bool = true;
    const IS_METAFUNCTION_CLASS: bool = false;
}

impl Shape for ClassShape {
    const IS_TURBO_FUNCTION: bool = false;
    const IS_STL_FUNCTION: bool = false;
    const IS_METAFUNCTION_CLASS: bool = true;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ValueShape {}
    impl Sealed for super::TurboShape {}
    impl Sealed for super::StlShape {}
    impl Sealed for super::ClassShape {}
}

/// Returns `true` if `T` exposes a `Result` slot.
#[inline]
pub const fn is_turbo_function<T: Entity + ?Sized>() -> bool {
    <T::Shape as Shape>::IS_TURBO_FUNCTION
}

/// Returns `true` if `T` exposes a `Type` slot.
///
/// Integral-constant wrappers answer `false` even though they carry the slot.
#[inline]
pub const fn is_stl_function<T: Entity + ?Sized>() -> bool {
    <T::Shape as Shape>::IS_STL_FUNCTION
}

/// Returns `true` if `T` holds a precomputed value in either slot.
#[inline]
pub const fn is_function<T: Entity + ?Sized>() -> bool {
    is_turbo_function::<T>() || is_stl_function::<T>()
}

/// Returns `true` if `T` is invoked through `apply`.
///
/// Recognition depends only on `T` having `apply`; what `apply` returns is
/// not inspected. Whether a particular argument list is accepted is the bound
/// `T: MetafunctionClass<Args>`.
#[inline]
pub const fn is_metafunction_class<T: Entity + ?Sized>() -> bool {
    <T::Shape as Shape>::IS_METAFUNCTION_CLASS
}

macro_rules! value_entities {
    ($($value:ty),* $(,)?) => {
        $(
            impl Entity for $value {
                type Shape = ValueShape;
            }
        )*
    };
}

value_entities!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    &'static str,
    String,
);

macro_rules! tuple_entities {
    ($($parameter:ident),+) => {
        impl<$($parameter),+> Entity for ($($parameter,)+) {
            type Shape = ValueShape;
        }
    };
}

tuple_entities!(A);
tuple_entities!(A, B);
tuple_entities!(A, B, C);
tuple_entities!(A, B, C, D);
tuple_entities!(A, B, C, D, E);
tuple_entities!(A, B, C, D, E, F);
tuple_entities!(A, B, C, D, E, F, G);
tuple_entities!(A, B, C, D, E, F, G, H);
