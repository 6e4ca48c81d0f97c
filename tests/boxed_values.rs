#![cfg(feature = "typeclass")]
//! Boxed values and the bundled algebraic types.
//!
//! - every boxed value `is_a` its type and is `constructed_by` its constructor,
//!   and no other type
//! - `True` and `False` box the native `true` / `false` constants

use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert};
use turbars::algebraic::boolean::{Boolean, False, True, Truth};
use turbars::algebraic::list::{Cat, List, Nil, Variadic};
use turbars::algebraic::maybe::{Just, Maybe, Nothing};
use turbars::boxed::{
    Boxed, BoxedValue, ConstructedBy, IsA, PayloadOf, Tag, constructed_by, is_a,
};
use turbars::function::{BoolConstant, Eval, FalseType, TrueType, is_function};

#[derive(Tag)]
struct Shape;

#[derive(Tag)]
struct Circle;

#[derive(Tag)]
struct Square;

type Unit = Boxed<Shape, Circle, u32>;

const_assert!(is_a::<Shape, Unit>());
const_assert!(constructed_by::<Circle, Unit>());
const_assert!(!constructed_by::<Square, Unit>());
const_assert!(!is_a::<Maybe, Unit>());
assert_impl_all!(Unit: IsA<Shape>, ConstructedBy<Circle>);
assert_not_impl_any!(Unit: IsA<List>, ConstructedBy<Square>);

// Nullary constructors carry themselves.
assert_type_eq_all!(<Boxed<Shape, Square> as BoxedValue>::Payload, Square);
assert_type_eq_all!(PayloadOf<Nothing>, Nothing);
assert_type_eq_all!(PayloadOf<Nil>, Nil);

// Every constructor of every bundled type.
const_assert!(is_a::<Boolean, True>() && constructed_by::<True, True>());
const_assert!(is_a::<Boolean, False>() && constructed_by::<False, False>());
const_assert!(is_a::<List, Nil>() && constructed_by::<Nil, Nil>());
const_assert!(is_a::<List, Eval<Cat, (u8, Nil)>>());
const_assert!(constructed_by::<Cat, Eval<Variadic, (u8,)>>());
const_assert!(is_a::<Maybe, Nothing>() && constructed_by::<Nothing, Nothing>());
const_assert!(is_a::<Maybe, Eval<Just, (u8,)>>() && constructed_by::<Just, Eval<Just, (u8,)>>());

// ... and no other type.
const_assert!(!is_a::<Maybe, True>());
const_assert!(!is_a::<List, Nothing>());
const_assert!(!is_a::<Boolean, Nil>());
const_assert!(!constructed_by::<Nothing, Eval<Just, (u8,)>>());

// True and False box the native constants.
const_assert!(is_function::<True>());
assert_type_eq_all!(Eval<True>, Boxed<Boolean, True, TrueType>);
assert_type_eq_all!(Eval<False>, Boxed<Boolean, False, FalseType>);
assert_type_eq_all!(PayloadOf<True>, BoolConstant<true>);
assert_type_eq_all!(PayloadOf<False>, BoolConstant<false>);

// The Cat guard: the tail must already be a list.
assert_not_impl_any!(Cat: turbars::function::Evaluate<(u8, u8)>);
assert_not_impl_any!(Cat: turbars::function::Evaluate<(u8, Nothing)>);

#[test]
fn boolean_values_reflect_to_bool() {
    assert!(<Eval<True> as Truth>::VALUE);
    assert!(!<Eval<False> as Truth>::VALUE);
    assert!(<PayloadOf<True>>::VALUE);
}

#[test]
fn tag_names_are_distinct_across_types() {
    let names = [
        Boolean::NAME,
        True::NAME,
        False::NAME,
        List::NAME,
        Nil::NAME,
        Cat::NAME,
        Maybe::NAME,
        Just::NAME,
        Nothing::NAME,
        Shape::NAME,
    ];
    for (index, name) in names.iter().enumerate() {
        assert!(names[index + 1..].iter().all(|other| other != name), "{name}");
    }
}
