//! Unary natural numbers, represented by [`Zero`] and [`Succ`].
//!
//! They give folds and maps something to compute with.
//!
//! ```rust
//! use turbars::function::Eval;
//! use turbars::nat::{Add, Nat, Succ, Zero};
//!
//! type Two = Succ<Succ<Zero>>;
//! assert_eq!(<Eval<Add, (Two, Two)> as Nat>::VALUE, 4);
//! ```

use std::marker::PhantomData;

use crate::function::{Call, MetafunctionClass, Norm, Normalize, Value};

/// The number zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Value)]
pub struct Zero;

/// The successor of `N` (i.e. `N + 1`).
#[derive(Value)]
pub struct Succ<N>(PhantomData<fn() -> N>);

/// All unary numbers can be converted to their value-level `usize`.
pub trait Nat {
    /// The runtime value of this type-level number.
    const VALUE: usize;
}

impl Nat for Zero {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// `Inc(n) = n + 1`. The argument is normalized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Inc;

impl<N> MetafunctionClass<(N,)> for Inc
where
    N: Normalize,
{
    type Apply = Succ<Norm<N>>;
}

/// `Add(m, n) = m + n`, by moving successors from `m` onto `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Add;

impl<N> MetafunctionClass<(Zero, N)> for Add {
    type Apply = N;
}

impl<M, N> MetafunctionClass<(Succ<M>, N)> for Add {
    type Apply = Call<Add, (M, Succ<N>)>;
}
