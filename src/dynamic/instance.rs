//! Type class operations as runtime keys.
//!
//! The type-level engine finds an instance through an associated type on the
//! metatype tag (`<Maybe as Monad>::Bind`). At runtime the same lookup goes
//! through a table keyed by `(metatype, Method)`, owned by the
//! [`Graph`](super::Graph).

use std::fmt::{self, Display, Formatter};

/// The type classes known to the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Typeclass {
    /// `fmap`.
    Functor,
    /// `Return` and `Bind`.
    Monad,
    /// `fold`, `foldl` and `foldr`.
    Foldable,
}

impl Typeclass {
    /// The operations an instance of this class must define.
    #[must_use]
    pub const fn methods(self) -> &'static [Method] {
        match self {
            Self::Functor => &[Method::Fmap],
            Self::Monad => &[Method::Return, Method::Bind],
            Self::Foldable => &[Method::Fold, Method::Foldl, Method::Foldr],
        }
    }
}

/// A single type class operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// `Functor::fmap(value, function)`.
    Fmap,
    /// `Monad::Return(value)`.
    Return,
    /// `Monad::Bind(value, continuation)`.
    Bind,
    /// `Foldable::fold(function, seed, value)`.
    Fold,
    /// `Foldable::foldl(function, seed, value)`.
    Foldl,
    /// `Foldable::foldr(function, seed, value)`.
    Foldr,
}

impl Method {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Fmap,
        Self::Return,
        Self::Bind,
        Self::Fold,
        Self::Foldl,
        Self::Foldr,
    ];

    /// The class this operation belongs to.
    #[must_use]
    pub const fn typeclass(self) -> Typeclass {
        match self {
            Self::Fmap => Typeclass::Functor,
            Self::Return | Self::Bind => Typeclass::Monad,
            Self::Fold | Self::Foldl | Self::Foldr => Typeclass::Foldable,
        }
    }

    /// The member name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fmap => "fmap",
            Self::Return => "Return",
            Self::Bind => "Bind",
            Self::Fold => "fold",
            Self::Foldl => "foldl",
            Self::Foldr => "foldr",
        }
    }
}

impl Display for Method {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Typeclass::Functor)]
    #[case(Typeclass::Monad)]
    #[case(Typeclass::Foldable)]
    fn methods_belong_to_their_class(#[case] typeclass: Typeclass) {
        for method in typeclass.methods() {
            assert_eq!(method.typeclass(), typeclass);
        }
    }

    #[test]
    fn every_method_is_listed_by_exactly_one_class() {
        let listed: usize = [Typeclass::Functor, Typeclass::Monad, Typeclass::Foldable]
            .iter()
            .map(|typeclass| typeclass.methods().len())
            .sum();
        assert_eq!(listed, Method::ALL.len());
    }
}
