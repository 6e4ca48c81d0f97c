//! The `Maybe` algebraic type and its type class instances.
//!
//! This is the single definition of `Maybe`: the constructors [`Just`] and
//! [`Nothing`] together with its `Functor`, `Monad` and `Foldable` instances.
//!
//! `Bind` short-circuits on `Nothing`: the continuation is never called, so
//! it does not even have to accept the payload type.
//!
//! ```rust
//! use turbars::algebraic::maybe::{Just, Maybe, Nothing};
//! use turbars::boxed::Boxed;
//! use turbars::function::Eval;
//! use turbars::typeclass::{Bind, Return};
//! use static_assertions::assert_type_eq_all;
//!
//! #[derive(turbars::function::MetafunctionClass)]
//! struct Wrap;
//!
//! impl<X> turbars::function::MetafunctionClass<(X,)> for Wrap {
//!     type Apply = Boxed<Maybe, Just, (X, X)>;
//! }
//!
//! type Lifted = Eval<Return, (Maybe, u8)>;
//! assert_type_eq_all!(Eval<Bind, (Lifted, Wrap)>, Eval<Wrap, (u8,)>);
//! assert_type_eq_all!(Eval<Bind, (Nothing, Wrap)>, Eval<Nothing>);
//! ```

use crate::boxed::{Boxed, Tag};
use crate::function::{Call, Eval, Evaluate, MetafunctionClass, StlFunction};
use crate::typeclass::{Foldable, Functor, Monad};

/// The metatype tag of optional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag)]
pub struct Maybe;

/// `Just(value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, MetafunctionClass)]
pub struct Just;

impl<U> MetafunctionClass<(U,)> for Just {
    type Apply = Boxed<Maybe, Just, U>;
}

/// The empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, StlFunction)]
#[type_slot(Boxed<Maybe, Nothing>)]
pub struct Nothing;

// =============================================================================
// Monad
// =============================================================================

/// `bind` for `Maybe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct MaybeBind;

impl<P, G> MetafunctionClass<(Boxed<Maybe, Nothing, P>, G)> for MaybeBind {
    type Apply = Boxed<Maybe, Nothing, P>;
}

impl<M, G> MetafunctionClass<(Boxed<Maybe, Just, M>, G)> for MaybeBind {
    type Apply = Call<G, (M,)>;
}

impl Monad for Maybe {
    type Return = Just;
    type Bind = MaybeBind;
}

// =============================================================================
// Functor
// =============================================================================

/// `fmap` for `Maybe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct MaybeFmap;

impl<P, F> MetafunctionClass<(Boxed<Maybe, Nothing, P>, F)> for MaybeFmap {
    type Apply = Boxed<Maybe, Nothing, P>;
}

impl<M, F> MetafunctionClass<(Boxed<Maybe, Just, M>, F)> for MaybeFmap
where
    F: Evaluate<(M,)>,
{
    type Apply = Boxed<Maybe, Just, Eval<F, (M,)>>;
}

impl Functor for Maybe {
    type Fmap = MaybeFmap;
}

// =============================================================================
// Foldable
// =============================================================================

/// `foldl` for `Maybe`: `function(seed, payload)`, or the seed for `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct MaybeFoldl;

impl<F, S, P> MetafunctionClass<(F, S, Boxed<Maybe, Nothing, P>)> for MaybeFoldl {
    type Apply = S;
}

impl<F, S, M> MetafunctionClass<(F, S, Boxed<Maybe, Just, M>)> for MaybeFoldl {
    type Apply = Call<F, (S, M)>;
}

/// `foldr` for `Maybe`: `function(payload, seed)`, or the seed for `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct MaybeFoldr;

impl<F, S, P> MetafunctionClass<(F, S, Boxed<Maybe, Nothing, P>)> for MaybeFoldr {
    type Apply = S;
}

impl<F, S, M> MetafunctionClass<(F, S, Boxed<Maybe, Just, M>)> for MaybeFoldr {
    type Apply = Call<F, (M, S)>;
}

impl Foldable for Maybe {
    type Fold = MaybeFoldl;
    type Foldl = MaybeFoldl;
    type Foldr = MaybeFoldr;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{constructed_by, is_a};
    use crate::function::Partial;
    use crate::nat::{Add, Inc, Succ, Zero};
    use crate::typeclass::{Bind, BindAfter, Fmap, Foldl, Foldr, Return, Then};
    use static_assertions::{assert_not_impl_any, assert_type_eq_all, const_assert};

    type One = Succ<Zero>;
    type Two = Succ<One>;

    type Empty = Eval<Nothing>;
    type JustOne = Eval<Just, (One,)>;

    /// `Pred(0) = Nothing`, `Pred(n + 1) = Just(n)`.
    #[derive(crate::function::MetafunctionClass)]
    struct Pred;

    impl MetafunctionClass<(Zero,)> for Pred {
        type Apply = Nothing;
    }

    impl<N> MetafunctionClass<(Succ<N>,)> for Pred {
        type Apply = Boxed<Maybe, Just, N>;
    }

    assert_type_eq_all!(Empty, Boxed<Maybe, Nothing, Nothing>);
    assert_type_eq_all!(JustOne, Boxed<Maybe, Just, One>);

    const_assert!(is_a::<Maybe, Nothing>());
    const_assert!(is_a::<Maybe, JustOne>());
    const_assert!(constructed_by::<Just, JustOne>());
    const_assert!(!constructed_by::<Nothing, JustOne>());

    // Left identity.
    assert_type_eq_all!(Eval<Bind, (Eval<Return, (Maybe, Two)>, Pred)>, Eval<Pred, (Two,)>);
    assert_type_eq_all!(Eval<Bind, (Eval<Return, (Maybe, Zero)>, Pred)>, Empty);

    // Right identity.
    assert_type_eq_all!(Eval<Bind, (JustOne, Partial<Return, Maybe>)>, JustOne);
    assert_type_eq_all!(Eval<Bind, (Nothing, Partial<Return, Maybe>)>, Empty);

    // Associativity.
    assert_type_eq_all!(
        Eval<Bind, (Eval<Bind, (Eval<Just, (Two,)>, Pred)>, Pred)>,
        Eval<Bind, (Eval<Just, (Two,)>, BindAfter<Pred, Pred>)>
    );

    // Short-circuit: Inc never sees the payload, and u8 is not a Pred argument.
    assert_type_eq_all!(Eval<Bind, (Nothing, Inc)>, Empty);
    assert_type_eq_all!(Eval<Bind, (Empty, Pred)>, Empty);
    assert_not_impl_any!(Bind: Evaluate<(Eval<Just, (u8,)>, Pred)>);

    assert_type_eq_all!(Eval<Then, (JustOne, Eval<Just, (u8,)>)>, Eval<Just, (u8,)>);
    assert_type_eq_all!(Eval<Then, (Nothing, Eval<Just, (u8,)>)>, Empty);

    assert_type_eq_all!(Eval<Fmap, (JustOne, Inc)>, Eval<Just, (Two,)>);
    assert_type_eq_all!(Eval<Fmap, (Nothing, Inc)>, Empty);

    assert_type_eq_all!(Eval<Foldl, (Add, One, JustOne)>, Two);
    assert_type_eq_all!(Eval<Foldr, (Add, One, Nothing)>, One);

    #[test]
    fn maybe_tags_are_distinct() {
        assert_ne!(Just::NAME, Nothing::NAME);
        assert!(Maybe::NAME.ends_with("maybe::Maybe"));
    }
}
