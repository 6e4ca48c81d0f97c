//! The `List` algebraic type.
//!
//! A list is either [`Nil`] or a cons cell built by [`Cat`], whose payload is
//! the pair `(head, tail)`. [`Variadic`] builds a whole list from an argument
//! list by right recursion, and [`list!`](crate::list) is the same thing as a
//! type macro.
//!
//! ```rust
//! use turbars::algebraic::list::{Cat, List, Nil, Variadic};
//! use turbars::boxed::Boxed;
//! use turbars::function::Eval;
//! use static_assertions::assert_type_eq_all;
//!
//! type Built = Eval<Variadic, (u8, u16)>;
//! type Spelled = Eval<Cat, (u8, Eval<Cat, (u16, Nil)>)>;
//!
//! assert_type_eq_all!(Built, Spelled);
//! assert_type_eq_all!(
//!     Built,
//!     Boxed<List, Cat, (u8, Boxed<List, Cat, (u16, Boxed<List, Nil>)>)>
//! );
//! ```

use crate::boxed::{Boxed, IsA, Tag};
use crate::function::{Call, Eval, Evaluate, MetafunctionClass, Norm, Normalize, StlFunction};
use crate::typeclass::{Foldable, Functor};

/// The metatype tag of lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag)]
pub struct List;

/// The empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, StlFunction)]
#[type_slot(Boxed<List, Nil>)]
pub struct Nil;

/// `Cat(head, tail)`: prepends `head` to `tail`.
///
/// `tail` is normalized and must be a list; anything else does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Tag, MetafunctionClass)]
pub struct Cat;

impl<H, T> MetafunctionClass<(H, T)> for Cat
where
    T: Normalize,
    Norm<T>: IsA<List>,
{
    type Apply = Boxed<List, Cat, (H, Norm<T>)>;
}

/// `Variadic(items...)`: the list of `items`, built right to left.
///
/// Each step is `Cat(first, Variadic(rest...))`, ending in `Cat(last, Nil)`.
/// Up to eight items are accepted; `Variadic()` is `Nil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Variadic;

impl MetafunctionClass<()> for Variadic {
    type Apply = Nil;
}

macro_rules! variadic_arities {
    ($last:ident) => {
        impl<$last> MetafunctionClass<($last,)> for Variadic {
            type Apply = Call<Cat, ($last, Nil)>;
        }
    };
    ($first:ident, $($rest:ident),+) => {
        impl<$first, $($rest),+> MetafunctionClass<($first, $($rest),+)> for Variadic {
            type Apply = Call<Cat, ($first, Call<Variadic, ($($rest,)+)>)>;
        }

        variadic_arities!($($rest),+);
    };
}

variadic_arities!(A, B, C, D, E, F, G, H);

/// Builds a list type from its items.
///
/// ```rust
/// use turbars::algebraic::list::{Cat, Nil};
/// use turbars::function::Eval;
///
/// static_assertions::assert_type_eq_all!(turbars::list![u8], Eval<Cat, (u8, Nil)>);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::function::Eval<$crate::algebraic::list::Variadic>
    };
    ($($item:ty),+ $(,)?) => {
        $crate::function::Eval<$crate::algebraic::list::Variadic, ($($item,)+)>
    };
}

// =============================================================================
// Functor
// =============================================================================

/// `fmap` for lists: applies the function to every element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct ListFmap;

impl<P, F> MetafunctionClass<(Boxed<List, Nil, P>, F)> for ListFmap {
    type Apply = Boxed<List, Nil, P>;
}

impl<H, T, F> MetafunctionClass<(Boxed<List, Cat, (H, T)>, F)> for ListFmap
where
    F: Evaluate<(H,)>,
    ListFmap: Evaluate<(T, F)>,
{
    type Apply = Boxed<List, Cat, (Eval<F, (H,)>, Eval<ListFmap, (T, F)>)>;
}

impl Functor for List {
    type Fmap = ListFmap;
}

// =============================================================================
// Foldable
// =============================================================================

/// `foldl` for lists: `function(accumulator, element)` from the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct ListFoldl;

impl<F, S, P> MetafunctionClass<(F, S, Boxed<List, Nil, P>)> for ListFoldl {
    type Apply = S;
}

impl<F, S, H, T> MetafunctionClass<(F, S, Boxed<List, Cat, (H, T)>)> for ListFoldl
where
    F: Evaluate<(S, H)>,
{
    type Apply = Call<ListFoldl, (F, Eval<F, (S, H)>, T)>;
}

/// `foldr` for lists: `function(element, accumulator)` from the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct ListFoldr;

impl<F, S, P> MetafunctionClass<(F, S, Boxed<List, Nil, P>)> for ListFoldr {
    type Apply = S;
}

impl<F, S, H, T> MetafunctionClass<(F, S, Boxed<List, Cat, (H, T)>)> for ListFoldr
where
    ListFoldr: Evaluate<(F, S, T)>,
{
    type Apply = Call<F, (H, Eval<ListFoldr, (F, S, T)>)>;
}

impl Foldable for List {
    type Fold = ListFoldl;
    type Foldl = ListFoldl;
    type Foldr = ListFoldr;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{constructed_by, is_a};
    use crate::function::Function;
    use crate::nat::{Add, Inc, Nat, Succ, Zero};
    use crate::typeclass::{Fmap, Fold, Foldl, Foldr};
    use static_assertions::{assert_not_impl_any, assert_type_eq_all, const_assert};

    type One = Succ<Zero>;
    type Two = Succ<One>;
    type Three = Succ<Two>;

    type Empty = Eval<Nil>;

    assert_type_eq_all!(Empty, Boxed<List, Nil, Nil>);
    assert_type_eq_all!(Eval<Variadic>, Empty);
    assert_type_eq_all!(crate::list![], Empty);

    assert_type_eq_all!(
        Eval<Variadic, (Zero, One, Two)>,
        Eval<Cat, (Zero, Eval<Cat, (One, Eval<Cat, (Two, Nil)>)>)>
    );
    assert_type_eq_all!(crate::list![Zero, One, Two], Eval<Variadic, (Zero, One, Two)>);

    // The tail may be any entity that normalizes to a list.
    assert_type_eq_all!(Eval<Cat, (u8, Function<Empty>)>, Eval<Cat, (u8, Nil)>);

    // A tail that is not a list does not match.
    assert_not_impl_any!(Cat: Evaluate<(u8, u16)>);
    assert_not_impl_any!(Cat: Evaluate<(u8, Zero)>);

    const_assert!(is_a::<List, Nil>());
    const_assert!(is_a::<List, crate::list![u8, u8]>());
    const_assert!(constructed_by::<Cat, crate::list![u8]>());
    const_assert!(constructed_by::<Nil, Nil>());

    assert_type_eq_all!(Eval<Fmap, (Nil, Inc)>, Empty);
    assert_type_eq_all!(Eval<Fmap, (crate::list![Zero, One], Inc)>, crate::list![One, Two]);

    assert_type_eq_all!(Eval<Foldl, (Add, Zero, Nil)>, Zero);
    assert_type_eq_all!(Eval<Foldl, (Add, Zero, crate::list![One, Two])>, Three);
    assert_type_eq_all!(Eval<Foldr, (Add, One, crate::list![One, One])>, Three);
    assert_type_eq_all!(Eval<Fold, (Add, Zero, crate::list![Three])>, Three);

    #[derive(crate::function::MetafunctionClass)]
    struct Snoc;

    impl<Acc, X> MetafunctionClass<(Acc, X)> for Snoc {
        type Apply = (Acc, X);
    }

    #[derive(crate::function::MetafunctionClass)]
    struct Cons;

    impl<X, Acc> MetafunctionClass<(X, Acc)> for Cons {
        type Apply = (X, Acc);
    }

    // Association order of the two folds.
    assert_type_eq_all!(Eval<Foldl, (Snoc, (), crate::list![u8, u16])>, (((), u8), u16));
    assert_type_eq_all!(Eval<Foldr, (Cons, (), crate::list![u8, u16])>, (u8, (u16, ())));

    #[test]
    fn variadic_accepts_eight_items() {
        type Eight = crate::list![One, One, One, One, One, One, One, One];
        assert_eq!(<Eval<Foldl, (Add, Zero, Eight)> as Nat>::VALUE, 8);
    }
}
