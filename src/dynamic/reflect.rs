//! Bridge from type-level values to graph nodes.
//!
//! [`Reflect`] builds the node a type-level value corresponds to, so that a
//! result computed by the trait solver can be compared with the same
//! computation run by the [`Evaluator`](super::Evaluator). Both sides intern
//! tags under [`Tag::NAME`], and the graph is hash-consed, so equal values
//! get equal ids.
//!
//! | Type | Node |
//! |------|------|
//! | `()` | `Value(Unit)` |
//! | `Zero`, `Succ<N>` | `Value(Int(n))` |
//! | `BoolConstant<B>`, `IntConstant<N>` | `Constant(..)` |
//! | `Boxed<T, C, P>` | `Boxed { .. }` |
//! | `(A, B)` | `Pair` |
//! | `Function<T>` | `Result` |
//! | bundled tags | `Tag` |
//! | primitives | `Value(Str(type name))` |
//!
//! ```rust
//! use turbars::algebraic::list::Variadic;
//! use turbars::dynamic::{Evaluator, Graph, Prelude};
//! use turbars::function::Eval;
//! use turbars::nat::{Succ, Zero};
//!
//! type One = Succ<Zero>;
//!
//! let mut graph = Graph::new();
//! let prelude = Prelude::install(&mut graph)?;
//! let expected = graph.reflect::<Eval<Variadic, (Zero, One)>>();
//! let items = [graph.reflect::<Zero>(), graph.reflect::<One>()];
//!
//! let mut evaluator = Evaluator::new(&mut graph);
//! assert_eq!(evaluator.eval(prelude.list.variadic, &items)?, expected);
//! # Ok::<(), turbars::dynamic::EvalError>(())
//! ```

use crate::algebraic::{boolean, list, maybe};
use crate::boxed::{Boxed, Tag};
use crate::function::{BoolConstant, Function, IntConstant};
use crate::nat::{Nat, Succ, Zero};

use super::graph::{Graph, Literal, NodeId};

/// A type-level value with a graph representation.
pub trait Reflect {
    /// Adds the value to `graph` and returns its node.
    fn reflect(graph: &mut Graph) -> NodeId;
}

impl Graph {
    /// The node of the type-level value `T`.
    pub fn reflect<T: Reflect + ?Sized>(&mut self) -> NodeId {
        T::reflect(self)
    }
}

impl Reflect for () {
    fn reflect(graph: &mut Graph) -> NodeId {
        graph.value(Literal::Unit)
    }
}

impl Reflect for Zero {
    fn reflect(graph: &mut Graph) -> NodeId {
        graph.value(Literal::Int(0))
    }
}

/// Naturals beyond `i64::MAX` saturate.
impl<N> Reflect for Succ<N>
where
    Self: Nat,
{
    fn reflect(graph: &mut Graph) -> NodeId {
        let value = i64::try_from(<Self as Nat>::VALUE).unwrap_or(i64::MAX);
        graph.value(Literal::Int(value))
    }
}

impl<const B: bool> Reflect for BoolConstant<B> {
    fn reflect(graph: &mut Graph) -> NodeId {
        graph.constant(Literal::Bool(B))
    }
}

impl<const N: i64> Reflect for IntConstant<N> {
    fn reflect(graph: &mut Graph) -> NodeId {
        graph.constant(Literal::Int(N))
    }
}

impl<T: Tag, C: Tag, P: Reflect> Reflect for Boxed<T, C, P> {
    fn reflect(graph: &mut Graph) -> NodeId {
        let metatype = graph.tag(T::NAME);
        let constructor = graph.tag(C::NAME);
        let payload = P::reflect(graph);
        graph.boxed(metatype, constructor, payload)
    }
}

impl<A: Reflect, B: Reflect> Reflect for (A, B) {
    fn reflect(graph: &mut Graph) -> NodeId {
        let first = A::reflect(graph);
        let second = B::reflect(graph);
        graph.pair(first, second)
    }
}

impl<T: Reflect> Reflect for Function<T> {
    fn reflect(graph: &mut Graph) -> NodeId {
        let value = T::reflect(graph);
        graph.result(value)
    }
}

macro_rules! reflect_tags {
    ($($tag:ty),* $(,)?) => {
        $(
            impl Reflect for $tag {
                fn reflect(graph: &mut Graph) -> NodeId {
                    let tag = graph.tag(<$tag as Tag>::NAME);
                    graph.tag_node(tag)
                }
            }
        )*
    };
}

reflect_tags!(
    boolean::Boolean,
    boolean::True,
    boolean::False,
    list::List,
    list::Nil,
    list::Cat,
    maybe::Maybe,
    maybe::Just,
    maybe::Nothing,
);

macro_rules! reflect_opaque {
    ($($value:ty),* $(,)?) => {
        $(
            impl Reflect for $value {
                fn reflect(graph: &mut Graph) -> NodeId {
                    graph.value(Literal::Str(std::any::type_name::<$value>().into()))
                }
            }
        )*
    };
}

reflect_opaque!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, &'static str, String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::graph::Node;
    use crate::function::{Eval, TrueType};
    use crate::nat::Add;

    type Two = Succ<Succ<Zero>>;

    #[test]
    fn naturals_reflect_to_integers() {
        let mut graph = Graph::new();
        let four = graph.reflect::<Eval<Add, (Two, Two)>>();
        assert_eq!(graph.node(four), Ok(&Node::Value(Literal::Int(4))));
    }

    #[test]
    fn constructors_share_tags_with_their_values() {
        let mut graph = Graph::new();
        let yes = graph.reflect::<Eval<boolean::True>>();
        let tag = graph.find_tag(<boolean::Boolean as Tag>::NAME).expect("interned");
        let constant = graph.reflect::<TrueType>();

        let (metatype, _, payload) = graph.boxed_parts(yes).expect("boxed");
        assert_eq!(metatype, tag);
        assert_eq!(payload, constant);
        assert!(graph.is_integral_constant(payload));
    }

    #[test]
    fn nullary_payloads_are_tag_nodes() {
        let mut graph = Graph::new();
        let nil = graph.reflect::<Eval<list::Nil>>();
        let (_, constructor, payload) = graph.boxed_parts(nil).expect("boxed");
        assert_eq!(graph.node(payload), Ok(&Node::Tag(constructor)));
        assert_eq!(graph.reflect::<list::Nil>(), payload);
    }

    #[test]
    fn opaque_values_are_named_by_type() {
        let mut graph = Graph::new();
        let first = graph.reflect::<u8>();
        assert_eq!(graph.reflect::<u8>(), first);
        assert_ne!(graph.reflect::<u16>(), first);
        assert_eq!(graph.node(first), Ok(&Node::Value(Literal::Str("u8".into()))));
    }

    #[test]
    fn functions_reflect_with_their_slot() {
        let mut graph = Graph::new();
        let function = graph.reflect::<Function<()>>();
        assert!(graph.is_turbo_function(function));
    }
}
