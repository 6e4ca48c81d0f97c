//! Function-shaped wrappers: identity, deferred call, partial application
//! and composition.

use std::marker::PhantomData;

use super::{ClassShape, Entity, Eval, Evaluate, MetafunctionClass, TurboFunction, TurboShape};

/// The canonical way to turn a plain value into a function.
///
/// `Eval<Function<X>>` is `X` for every `X`.
///
/// ```rust
/// use turbars::function::{Eval, Function};
///
/// static_assertions::assert_type_eq_all!(Eval<Function<Vec<u8>>>, Vec<u8>);
/// ```
#[derive(TurboFunction)]
#[result(T)]
pub struct Function<T>(PhantomData<fn() -> T>);

/// `F` applied to `Args`, evaluated when normalized.
///
/// Returning a `Call` from `apply` is how a class delegates to another
/// function without forcing the evaluation inside its own impl header. The
/// `Result` slot only exists when the call is valid.
pub struct Call<F, Args>(PhantomData<fn() -> (F, Args)>);

impl<F, Args> Entity for Call<F, Args> {
    type Shape = TurboShape;
}

impl<F, Args> TurboFunction for Call<F, Args>
where
    F: Evaluate<Args>,
{
    type Result = Eval<F, Args>;
}

/// `F` with its first argument bound to `A`.
///
/// Calling the partial application with `(B, C, ...)` calls `F` with
/// `(A, B, C, ...)`. Nest `Partial` to bind more than one argument.
///
/// ```rust
/// use turbars::function::{Eval, MetafunctionClass, Partial};
///
/// #[derive(MetafunctionClass)]
/// struct Pair;
///
/// impl<A, B> MetafunctionClass<(A, B)> for Pair {
///     type Apply = (A, B);
/// }
///
/// static_assertions::assert_type_eq_all!(Eval<Partial<Pair, u8>, (u16,)>, (u8, u16));
/// ```
pub struct Partial<F, A>(PhantomData<fn() -> (F, A)>);

impl<F, A> Entity for Partial<F, A> {
    type Shape = ClassShape;
}

macro_rules! partial_arities {
    ($($rest:ident),*) => {
        impl<F, A, $($rest),*> MetafunctionClass<($($rest,)*)> for Partial<F, A> {
            type Apply = Call<F, (A, $($rest,)*)>;
        }
    };
}

partial_arities!();
partial_arities!(B);
partial_arities!(B, C);
partial_arities!(B, C, D);
partial_arities!(B, C, D, E);
partial_arities!(B, C, D, E, G);
partial_arities!(B, C, D, E, G, H);

/// The identity metafunction class: `Identity(x) = x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, MetafunctionClass)]
pub struct Identity;

impl<X> MetafunctionClass<(X,)> for Identity {
    type Apply = X;
}

/// `Compose<G, F>(x) = G(F(x))`.
pub struct Compose<G, F>(PhantomData<fn() -> (G, F)>);

impl<G, F> Entity for Compose<G, F> {
    type Shape = ClassShape;
}

impl<G, F, X> MetafunctionClass<(X,)> for Compose<G, F>
where
    F: Evaluate<(X,)>,
{
    type Apply = Call<G, (Eval<F, (X,)>,)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{MetafunctionClass, Norm, Value, is_metafunction_class};
    use static_assertions::{assert_not_impl_any, assert_type_eq_all, const_assert};

    #[derive(Value)]
    struct Marker;

    #[derive(MetafunctionClass)]
    struct Triple;

    impl<A, B, C> MetafunctionClass<(A, B, C)> for Triple {
        type Apply = (A, B, C);
    }

    assert_type_eq_all!(Eval<Function<Marker>>, Marker);
    assert_type_eq_all!(Eval<Function<Triple>>, Triple);
    assert_type_eq_all!(Norm<Call<Triple, (u8, u16, u32)>>, (u8, u16, u32));

    assert_type_eq_all!(Eval<Partial<Triple, u8>, (u16, u32)>, (u8, u16, u32));
    assert_type_eq_all!(Eval<Partial<Partial<Triple, u8>, u16>, (u32,)>, (u8, u16, u32));
    assert_type_eq_all!(
        Eval<Partial<Partial<Partial<Triple, u8>, u16>, u32>>,
        (u8, u16, u32)
    );

    const_assert!(is_metafunction_class::<Partial<Triple, u8>>());

    assert_type_eq_all!(Eval<Identity, (Marker,)>, Marker);
    type Outer = Partial<Partial<Triple, u8>, u8>;
    type Inner = Partial<Partial<Triple, u16>, u16>;
    assert_type_eq_all!(Eval<Compose<Outer, Inner>, (u32,)>, (u8, u8, (u16, u16, u32)));

    // Binding too many arguments leaves the call unresolvable.
    assert_not_impl_any!(Call<Triple, (u8,)>: TurboFunction);
    assert_not_impl_any!(Partial<Triple, u8>: Evaluate<(u16,)>);

    #[test]
    fn function_wrapper_is_a_turbo_function() {
        assert!(crate::function::is_turbo_function::<Function<Marker>>());
        assert!(crate::function::is_turbo_function::<Call<Triple, ()>>());
    }
}
