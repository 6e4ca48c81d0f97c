//! Monad type class - sequencing computations over boxed values.
//!
//! `Return` lifts a plain value into a monad, and `Bind` feeds the payload of
//! a monadic value to a continuation returning the next monadic value.
//! Instances decide how the "empty" constructor behaves; for `Maybe`,
//! `Nothing` binds to `Nothing` without calling the continuation.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Eval<Bind, (Eval<Return, (M, X)>, F)> == Eval<F, (X,)>
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! Eval<Bind, (V, Partial<Return, M>)> == V
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! Eval<Bind, (Eval<Bind, (V, F)>, G)> == Eval<Bind, (V, BindAfter<F, G>)>
//! ```
//!
//! # Examples
//!
//! ```rust
//! use turbars::algebraic::maybe::{Just, Maybe, Nothing};
//! use turbars::boxed::Boxed;
//! use turbars::function::Eval;
//! use turbars::nat::{Inc, Succ, Zero};
//! use turbars::typeclass::{Bind, Return};
//! use static_assertions::assert_type_eq_all;
//!
//! type Lifted = Eval<Return, (Maybe, Zero)>;
//! assert_type_eq_all!(Lifted, Boxed<Maybe, Just, Zero>);
//!
//! // Inc is not monadic, so the result is the bare successor.
//! assert_type_eq_all!(Eval<Bind, (Lifted, Inc)>, Succ<Zero>);
//! assert_type_eq_all!(Eval<Bind, (Nothing, Inc)>, Boxed<Maybe, Nothing>);
//! ```

use std::marker::PhantomData;

use crate::boxed::{BoxedValue, MetatypeOf};
use crate::function::{Call, ClassShape, Entity, MetafunctionClass, Norm, Normalize};

/// A type class for algebraic types that sequence computations.
///
/// Implemented on the metatype tag:
///
/// - `Return` is called with `(value,)` and builds a monadic value.
/// - `Bind` is called with `(monadic value, continuation)` where the monadic
///   value is already normalized.
pub trait Monad {
    /// Lifts a plain value.
    type Return;
    /// Feeds a monadic value to a continuation.
    type Bind;
}

/// `return(M, value)`: lifts `value` into the monad tagged `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Return;

impl<M, U> MetafunctionClass<(M, U)> for Return
where
    M: Monad,
{
    type Apply = Call<M::Return, (U,)>;
}

/// `bind(value, continuation)`: dispatches to the value's [`Monad`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Bind;

impl<A, G> MetafunctionClass<(A, G)> for Bind
where
    A: Normalize,
    Norm<A>: BoxedValue,
    MetatypeOf<A>: Monad,
{
    type Apply = Call<<MetatypeOf<A> as Monad>::Bind, (Norm<A>, G)>;
}

/// `then(value, next)`: binds `value` to a continuation that ignores its
/// argument and returns `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Then;

impl<A, N> MetafunctionClass<(A, N)> for Then {
    type Apply = Call<Bind, (A, Discard<N>)>;
}

/// Continuation returning `N` whatever it is given.
pub struct Discard<N>(PhantomData<fn() -> N>);

impl<N> Entity for Discard<N> {
    type Shape = ClassShape;
}

impl<N, X> MetafunctionClass<(X,)> for Discard<N> {
    type Apply = N;
}

/// Kleisli composition: `x -> bind(F(x), G)`.
pub struct BindAfter<F, G>(PhantomData<fn() -> (F, G)>);

impl<F, G> Entity for BindAfter<F, G> {
    type Shape = ClassShape;
}

impl<F, G, X> MetafunctionClass<(X,)> for BindAfter<F, G> {
    type Apply = Call<Bind, (Call<F, (X,)>, G)>;
}
