//! The `eval` core.
//!
//! [`Evaluate`] is the single call surface of the crate: given a function
//! entity and an argument tuple it produces the resulting value. Dispatch goes
//! through the entity's declared [`Shape`](super::Shape):
//!
//! 1. Turbo and STL-style functions already hold their value. They are only
//!    evaluable with `()`; passing arguments to them does not compile.
//! 2. A metafunction class is applied to the arguments and the intermediate
//!    entity is normalized with [`Normalize`]. This is what lets a class
//!    return a [`Call`](super::Call) or a nullary constructor and still hand
//!    back a value.
//! 3. Anything else (a [`ValueShape`] entity, or a class that does not accept
//!    the arguments) has no impl: "not a function".

use super::{ClassShape, Entity, MetafunctionClass, StlFunction, StlShape, TurboFunction};
use super::{TurboShape, ValueShape};

/// Evaluates `Self` as a function applied to `Args`.
pub trait Evaluate<Args = ()> {
    /// The normalized result of the call.
    type Output;
}

/// The result of calling `F` with `Args`.
///
/// ```rust
/// use turbars::function::{Eval, Function};
///
/// static_assertions::assert_type_eq_all!(Eval<Function<i64>>, i64);
/// ```
pub type Eval<F, Args = ()> = <F as Evaluate<Args>>::Output;

/// Shape-indexed evaluation.
///
/// Implemented once per shape so that the blanket [`Evaluate`] impl never
/// overlaps. Not meant to be implemented outside this crate.
pub trait EvaluateAs<S, Args> {
    /// The normalized result of the call.
    type Output;
}

impl<F, Args> Evaluate<Args> for F
where
    F: Entity + EvaluateAs<<F as Entity>::Shape, Args>,
{
    type Output = <F as EvaluateAs<<F as Entity>::Shape, Args>>::Output;
}

impl<F: TurboFunction> EvaluateAs<TurboShape, ()> for F {
    type Output = F::Result;
}

impl<F: StlFunction> EvaluateAs<StlShape, ()> for F {
    type Output = F::Type;
}

impl<F, Args> EvaluateAs<ClassShape, Args> for F
where
    F: MetafunctionClass<Args>,
    F::Apply: Normalize,
{
    type Output = Norm<F::Apply>;
}

/// One normalization step.
///
/// Values stay as they are, and so do metafunction classes that have not been
/// given arguments (a partially applied class is a value). Turbo and
/// STL-style functions are replaced by their slot.
pub trait Normalize {
    /// The normalized entity.
    type Output;
}

/// The normal form of `T`.
pub type Norm<T> = <T as Normalize>::Output;

/// Shape-indexed normalization, the counterpart of [`EvaluateAs`].
pub trait NormalizeAs<S> {
    /// The normalized entity.
    type Output;
}

impl<T> Normalize for T
where
    T: Entity + NormalizeAs<<T as Entity>::Shape>,
{
    type Output = <T as NormalizeAs<<T as Entity>::Shape>>::Output;
}

impl<T> NormalizeAs<ValueShape> for T {
    type Output = T;
}

impl<T: TurboFunction> NormalizeAs<TurboShape> for T {
    type Output = T::Result;
}

impl<T: StlFunction> NormalizeAs<StlShape> for T {
    type Output = T::Type;
}

impl<T> NormalizeAs<ClassShape> for T {
    type Output = T;
}
