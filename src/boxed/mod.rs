//! Boxed algebraic values.
//!
//! An instance of an algebraic data type is the triple
//! `(metatype tag, constructor tag, payload)`, encoded as the type
//! [`Boxed<Type, Ctor, Payload>`](Boxed). Nullary constructors carry no data
//! of their own, so the payload defaults to the constructor tag.
//!
//! Two families of predicates answer "which type / which constructor":
//!
//! - [`IsA`] and [`ConstructedBy`] are traits. They are implemented exactly
//!   when the tag matches, which makes them usable as guards in impl headers.
//! - [`is_a`] and [`constructed_by`] are total `const fn`s comparing tag names.
//!   They answer `false` rather than failing to compile.
//!
//! # Examples
//!
//! ```rust
//! use turbars::boxed::{Boxed, Tag, constructed_by, is_a};
//!
//! #[derive(Tag)]
//! struct Shape;
//! #[derive(Tag)]
//! struct Circle;
//! #[derive(Tag)]
//! struct Colour;
//!
//! type Unit = Boxed<Shape, Circle>;
//!
//! assert!(is_a::<Shape, Unit>());
//! assert!(!is_a::<Colour, Unit>());
//! assert!(constructed_by::<Circle, Unit>());
//! ```

use std::marker::PhantomData;

use crate::function::{Entity, Norm, Normalize, ValueShape};

pub use turbars_derive::Tag;

/// A metatype or constructor tag.
pub trait Tag {
    /// A name identifying the tag. Derived tags use their module path.
    const NAME: &'static str;
}

/// An algebraic value: `Type` built by `Ctor` around `Payload`.
pub struct Boxed<Type, Ctor, Payload = Ctor>(PhantomData<fn() -> (Type, Ctor, Payload)>);

impl<Type, Ctor, Payload> Entity for Boxed<Type, Ctor, Payload> {
    type Shape = ValueShape;
}

/// Read access to the three components of a boxed value.
pub trait BoxedValue {
    /// The algebraic type the value belongs to.
    type Metatype: Tag;
    /// The constructor that built the value.
    type Constructor: Tag;
    /// The data carried by the value.
    type Payload;
}

impl<Type: Tag, Ctor: Tag, Payload> BoxedValue for Boxed<Type, Ctor, Payload> {
    type Metatype = Type;
    type Constructor = Ctor;
    type Payload = Payload;
}

/// The metatype of `V` after normalization.
pub type MetatypeOf<V> = <Norm<V> as BoxedValue>::Metatype;

/// The constructor of `V` after normalization.
pub type ConstructorOf<V> = <Norm<V> as BoxedValue>::Constructor;

/// The payload of `V` after normalization.
pub type PayloadOf<V> = <Norm<V> as BoxedValue>::Payload;

/// Guard: implemented when the value's metatype is `Type`.
pub trait IsA<Type> {}

impl<Type, Ctor, Payload> IsA<Type> for Boxed<Type, Ctor, Payload> {}

/// Guard: implemented when the value was built by `Ctor`.
pub trait ConstructedBy<Ctor> {}

impl<Type, Ctor, Payload> ConstructedBy<Ctor> for Boxed<Type, Ctor, Payload> {}

/// Returns `true` if the value `V` belongs to the algebraic type `T`.
///
/// `V` is normalized first, so nullary constructors may be passed directly.
#[inline]
pub const fn is_a<T: Tag, V>() -> bool
where
    V: Normalize,
    Norm<V>: BoxedValue,
{
    names_match(T::NAME, <MetatypeOf<V> as Tag>::NAME)
}

/// Returns `true` if the value `V` was built by the constructor `C`.
#[inline]
pub const fn constructed_by<C: Tag, V>() -> bool
where
    V: Normalize,
    Norm<V>: BoxedValue,
{
    names_match(C::NAME, <ConstructorOf<V> as Tag>::NAME)
}

const fn names_match(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::StlFunction;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert};

    #[derive(Tag)]
    struct Pet;

    #[derive(Tag)]
    struct Plant;

    #[derive(Tag, StlFunction)]
    #[type_slot(Boxed<Pet, Goldfish>)]
    struct Goldfish;

    #[derive(Tag)]
    struct Dog;

    type Fido = Boxed<Pet, Dog, &'static str>;

    assert_type_eq_all!(<Boxed<Pet, Goldfish> as BoxedValue>::Payload, Goldfish);
    assert_type_eq_all!(PayloadOf<Fido>, &'static str);
    assert_type_eq_all!(MetatypeOf<Goldfish>, Pet);
    assert_type_eq_all!(ConstructorOf<Goldfish>, Goldfish);

    assert_impl_all!(Fido: IsA<Pet>, ConstructedBy<Dog>);
    assert_not_impl_any!(Fido: IsA<Plant>, ConstructedBy<Goldfish>);

    const_assert!(is_a::<Pet, Fido>());
    const_assert!(is_a::<Pet, Goldfish>());
    const_assert!(!is_a::<Plant, Fido>());
    const_assert!(constructed_by::<Dog, Fido>());
    const_assert!(!constructed_by::<Goldfish, Fido>());

    #[rstest]
    #[case("", "", true)]
    #[case("a::Pet", "a::Pet", true)]
    #[case("a::Pet", "a::Pat", false)]
    #[case("a::Pet", "a::Pets", false)]
    fn names_match_compares_bytes(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(names_match(left, right), expected);
    }

    #[test]
    fn derived_tag_names_are_module_qualified() {
        assert!(Pet::NAME.ends_with("boxed::tests::Pet"));
        assert_ne!(Pet::NAME, Plant::NAME);
    }
}
