//! The `Boolean` algebraic type.
//!
//! Two nullary constructors, [`True`] and [`False`], each boxing the native
//! [`BoolConstant`](crate::function::BoolConstant). The logical operations
//! normalize their arguments, so constructors and boxed values mix freely.
//!
//! ```rust
//! use turbars::algebraic::boolean::{And, Boolean, False, If, Not, True, Truth};
//! use turbars::boxed::is_a;
//! use turbars::function::{Eval, TrueType};
//! use static_assertions::assert_type_eq_all;
//!
//! assert!(is_a::<Boolean, True>());
//! assert_type_eq_all!(Eval<Not, (False,)>, Eval<True>);
//! assert!(!<Eval<And, (True, False)> as Truth>::VALUE);
//! assert_type_eq_all!(Eval<If, (True, u8, u16)>, u8);
//! ```

use crate::boxed::{Boxed, Tag};
use crate::function::{FalseType, MetafunctionClass, Norm, Normalize, StlFunction, TrueType};

/// The metatype tag of booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag)]
pub struct Boolean;

/// The `True` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, StlFunction)]
#[type_slot(Boxed<Boolean, True, TrueType>)]
pub struct True;

/// The `False` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, StlFunction)]
#[type_slot(Boxed<Boolean, False, FalseType>)]
pub struct False;

/// Truth table of a boxed boolean.
pub trait Truth {
    /// The value-level `bool`.
    const VALUE: bool;
    /// Negation.
    type Not;
    /// Conjunction with `Rhs`.
    type And<Rhs>;
    /// Disjunction with `Rhs`.
    type Or<Rhs>;
    /// `Then` if true, `Else` otherwise.
    type Select<Then, Else>;
}

impl<P> Truth for Boxed<Boolean, True, P> {
    const VALUE: bool = true;
    type Not = False;
    type And<Rhs> = Rhs;
    type Or<Rhs> = True;
    type Select<Then, Else> = Then;
}

impl<P> Truth for Boxed<Boolean, False, P> {
    const VALUE: bool = false;
    type Not = True;
    type And<Rhs> = False;
    type Or<Rhs> = Rhs;
    type Select<Then, Else> = Else;
}

/// `Not(b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Not;

impl<B> MetafunctionClass<(B,)> for Not
where
    B: Normalize,
    Norm<B>: Truth,
{
    type Apply = <Norm<B> as Truth>::Not;
}

/// `And(lhs, rhs)`. `rhs` is only normalized when `lhs` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct And;

impl<L, R> MetafunctionClass<(L, R)> for And
where
    L: Normalize,
    Norm<L>: Truth,
{
    type Apply = <Norm<L> as Truth>::And<R>;
}

/// `Or(lhs, rhs)`. `rhs` is only normalized when `lhs` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Or;

impl<L, R> MetafunctionClass<(L, R)> for Or
where
    L: Normalize,
    Norm<L>: Truth,
{
    type Apply = <Norm<L> as Truth>::Or<R>;
}

/// `If(condition, then, else)`. Only the selected branch is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct If;

impl<C, T, E> MetafunctionClass<(C, T, E)> for If
where
    C: Normalize,
    Norm<C>: Truth,
{
    type Apply = <Norm<C> as Truth>::Select<T, E>;
}
