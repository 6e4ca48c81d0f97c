//! The bundled algebraic types and type class operations, installed into a
//! [`Graph`].
//!
//! Tags are interned under the names of the type-level tags, so a value
//! reflected from a type and the same value built here are the same node.

use crate::algebraic::{boolean, list, maybe};
use crate::boxed::Tag;

use super::error::EvalError;
use super::evaluator::Evaluator;
use super::graph::{Graph, Literal, Node, NodeId, TagId};
use super::instance::Method;

/// Node ids of everything [`Prelude::install`] adds to a graph.
///
/// # Examples
///
/// ```rust
/// use turbars::dynamic::{Evaluator, Graph, Literal, Prelude};
///
/// let mut graph = Graph::new();
/// let prelude = Prelude::install(&mut graph)?;
/// let one = graph.value(Literal::Int(1));
///
/// let mut evaluator = Evaluator::new(&mut graph);
/// let lifted = evaluator.eval(prelude.maybe.just, &[one])?;
/// let nothing = evaluator.normalize(prelude.maybe.nothing)?;
///
/// assert_eq!(evaluator.eval(prelude.operations.bind, &[nothing, prelude.operations.inc])?, nothing);
/// assert!(evaluator.is_a(prelude.maybe.tag, lifted)?);
/// # Ok::<(), turbars::dynamic::EvalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prelude {
    /// Type class operations and combinators.
    pub operations: Operations,
    /// The `Boolean` type.
    pub boolean: BooleanType,
    /// The `List` type.
    pub list: ListType,
    /// The `Maybe` type.
    pub maybe: MaybeType,
}

/// Generic operations, each a class node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operations {
    /// `Identity(x) = x`.
    pub identity: NodeId,
    /// `Constant(n, x) = n`; `Partial(Constant, n)` ignores its argument.
    pub constant: NodeId,
    /// `Compose(g, f, x) = g(f(x))`.
    pub compose: NodeId,
    /// `Fmap(value, function)`.
    pub fmap: NodeId,
    /// `Return(metatype, value)`.
    pub return_: NodeId,
    /// `Bind(value, continuation)`.
    pub bind: NodeId,
    /// `Then(value, next) = Bind(value, Partial(Constant, next))`.
    pub then: NodeId,
    /// `BindAfter(f, g, x) = Bind(f(x), g)`.
    pub bind_after: NodeId,
    /// `Fold(function, seed, value)`.
    pub fold: NodeId,
    /// `Foldl(function, seed, value)`.
    pub foldl: NodeId,
    /// `Foldr(function, seed, value)`.
    pub foldr: NodeId,
    /// `Inc(n) = n + 1` on integer values.
    pub inc: NodeId,
    /// `Add(m, n) = m + n` on integer values.
    pub add: NodeId,
}

/// The `Boolean` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanType {
    /// The metatype tag.
    pub tag: TagId,
    /// The `True` constructor tag.
    pub true_tag: TagId,
    /// The `False` constructor tag.
    pub false_tag: TagId,
    /// `True`, an STL-style function boxing the `true` constant.
    pub true_ctor: NodeId,
    /// `False`, an STL-style function boxing the `false` constant.
    pub false_ctor: NodeId,
    /// `Not(b)`.
    pub not: NodeId,
    /// `And(lhs, rhs)`.
    pub and: NodeId,
    /// `Or(lhs, rhs)`.
    pub or: NodeId,
    /// `If(condition, then, else)`.
    pub if_then_else: NodeId,
}

/// The `List` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListType {
    /// The metatype tag.
    pub tag: TagId,
    /// The `Nil` constructor tag.
    pub nil_tag: TagId,
    /// The `Cat` constructor tag.
    pub cat_tag: TagId,
    /// `Nil`, an STL-style function.
    pub nil: NodeId,
    /// `Cat(head, tail)`, guarded on `tail` being a list.
    pub cat: NodeId,
    /// `Variadic(items...)`.
    pub variadic: NodeId,
    /// The `fmap` instance.
    pub fmap: NodeId,
    /// The `foldl` instance, also used for `fold`.
    pub foldl: NodeId,
    /// The `foldr` instance.
    pub foldr: NodeId,
}

/// The `Maybe` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeType {
    /// The metatype tag.
    pub tag: TagId,
    /// The `Just` constructor tag.
    pub just_tag: TagId,
    /// The `Nothing` constructor tag.
    pub nothing_tag: TagId,
    /// `Just(value)`, also the `Return` instance.
    pub just: NodeId,
    /// `Nothing`, an STL-style function.
    pub nothing: NodeId,
    /// The short-circuiting `Bind` instance.
    pub bind: NodeId,
    /// The `fmap` instance.
    pub fmap: NodeId,
    /// The `foldl` instance, also used for `fold`.
    pub foldl: NodeId,
    /// The `foldr` instance.
    pub foldr: NodeId,
}

impl Prelude {
    /// Adds the bundled types, their instances and the generic operations to
    /// `graph`.
    ///
    /// # Errors
    ///
    /// [`EvalError::DuplicateInstance`] if the prelude is already installed.
    pub fn install(graph: &mut Graph) -> Result<Self, EvalError> {
        let operations = Operations::install(graph);
        let boolean = BooleanType::install(graph);
        let list = ListType::install(graph)?;
        let maybe = MaybeType::install(graph)?;
        Ok(Self {
            operations,
            boolean,
            list,
            maybe,
        })
    }
}

// =============================================================================
// Generic operations
// =============================================================================

impl Operations {
    fn install(graph: &mut Graph) -> Self {
        let identity = graph.class("Identity", 1..=1, |_, _, arguments| Ok(arguments[0]));
        let constant = graph.class("Constant", 2..=2, |_, _, arguments| Ok(arguments[0]));
        let compose = graph.class("Compose", 3..=3, |evaluator, _, arguments| {
            let inner = evaluator.eval(arguments[1], &arguments[2..])?;
            Ok(evaluator.graph_mut().call(arguments[0], &[inner]))
        });

        let fmap = graph.class("Fmap", 2..=2, |evaluator, _, arguments| {
            let (value, function) = evaluator.dispatch(Method::Fmap, arguments[0])?;
            Ok(evaluator.graph_mut().call(function, &[value, arguments[1]]))
        });

        let return_ = graph.class("Return", 2..=2, |evaluator, this, arguments| {
            let Node::Tag(metatype) = *evaluator.graph().node(arguments[0])? else {
                return Err(evaluator.no_matching_overload(this, arguments));
            };
            let function = evaluator.method_of(metatype, Method::Return)?;
            Ok(evaluator.graph_mut().call(function, &[arguments[1]]))
        });

        let bind = graph.class("Bind", 2..=2, |evaluator, _, arguments| {
            let (value, function) = evaluator.dispatch(Method::Bind, arguments[0])?;
            Ok(evaluator.graph_mut().call(function, &[value, arguments[1]]))
        });

        let then = graph.class("Then", 2..=2, move |evaluator, _, arguments| {
            let graph = evaluator.graph_mut();
            let discard = graph.partial(constant, arguments[1]);
            Ok(graph.call(bind, &[arguments[0], discard]))
        });

        let bind_after = graph.class("BindAfter", 3..=3, move |evaluator, _, arguments| {
            let graph = evaluator.graph_mut();
            let first = graph.call(arguments[0], &arguments[2..]);
            Ok(graph.call(bind, &[first, arguments[1]]))
        });

        let [fold, foldl, foldr] = [Method::Fold, Method::Foldl, Method::Foldr].map(|method| {
            graph.class(method.name(), 3..=3, move |evaluator, _, arguments| {
                let (value, function) = evaluator.dispatch(method, arguments[2])?;
                Ok(evaluator
                    .graph_mut()
                    .call(function, &[arguments[0], arguments[1], value]))
            })
        });

        let inc = graph.class("Inc", 1..=1, |evaluator, this, arguments| {
            let value = integer(evaluator, arguments[0])?
                .and_then(|value| value.checked_add(1))
                .ok_or_else(|| evaluator.no_matching_overload(this, arguments))?;
            Ok(evaluator.graph_mut().value(Literal::Int(value)))
        });

        let add = graph.class("Add", 2..=2, |evaluator, this, arguments| {
            let left = integer(evaluator, arguments[0])?;
            let right = integer(evaluator, arguments[1])?;
            let sum = left
                .zip(right)
                .and_then(|(left, right)| left.checked_add(right))
                .ok_or_else(|| evaluator.no_matching_overload(this, arguments))?;
            Ok(evaluator.graph_mut().value(Literal::Int(sum)))
        });

        Self {
            identity,
            constant,
            compose,
            fmap,
            return_,
            bind,
            then,
            bind_after,
            fold,
            foldl,
            foldr,
            inc,
            add,
        }
    }
}

fn integer(evaluator: &mut Evaluator<'_>, node: NodeId) -> Result<Option<i64>, EvalError> {
    let normal = evaluator.normalize(node)?;
    Ok(match evaluator.graph().node(normal)? {
        Node::Value(Literal::Int(value)) => Some(*value),
        _ => None,
    })
}

fn pair(evaluator: &Evaluator<'_>, node: NodeId) -> Option<(NodeId, NodeId)> {
    match evaluator.graph().node(node).ok()? {
        Node::Pair(first, second) => Some((*first, *second)),
        _ => None,
    }
}

// =============================================================================
// Boolean
// =============================================================================

#[derive(Clone, Copy)]
struct Truth {
    tag: TagId,
    true_tag: TagId,
    true_ctor: NodeId,
    false_ctor: NodeId,
}

impl Truth {
    fn of(
        self,
        evaluator: &mut Evaluator<'_>,
        this: NodeId,
        arguments: &[NodeId],
    ) -> Result<bool, EvalError> {
        let condition = evaluator.normalize(arguments[0])?;
        match *evaluator.graph().node(condition)? {
            Node::Boxed {
                metatype,
                constructor,
                ..
            } if metatype == self.tag => Ok(constructor == self.true_tag),
            _ => Err(evaluator.no_matching_overload(this, arguments)),
        }
    }
}

impl BooleanType {
    fn install(graph: &mut Graph) -> Self {
        let tag = graph.tag(boolean::Boolean::NAME);
        let true_tag = graph.tag(boolean::True::NAME);
        let false_tag = graph.tag(boolean::False::NAME);

        let true_constant = graph.constant(Literal::Bool(true));
        let true_value = graph.boxed(tag, true_tag, true_constant);
        let true_ctor = graph.type_slot(true_value);
        let false_constant = graph.constant(Literal::Bool(false));
        let false_value = graph.boxed(tag, false_tag, false_constant);
        let false_ctor = graph.type_slot(false_value);

        let truth = Truth {
            tag,
            true_tag,
            true_ctor,
            false_ctor,
        };

        let not = graph.class("Not", 1..=1, move |evaluator, this, arguments| {
            Ok(if truth.of(evaluator, this, arguments)? {
                truth.false_ctor
            } else {
                truth.true_ctor
            })
        });
        let and = graph.class("And", 2..=2, move |evaluator, this, arguments| {
            Ok(if truth.of(evaluator, this, arguments)? {
                arguments[1]
            } else {
                truth.false_ctor
            })
        });
        let or = graph.class("Or", 2..=2, move |evaluator, this, arguments| {
            Ok(if truth.of(evaluator, this, arguments)? {
                truth.true_ctor
            } else {
                arguments[1]
            })
        });
        let if_then_else = graph.class("If", 3..=3, move |evaluator, this, arguments| {
            Ok(if truth.of(evaluator, this, arguments)? {
                arguments[1]
            } else {
                arguments[2]
            })
        });

        Self {
            tag,
            true_tag,
            false_tag,
            true_ctor,
            false_ctor,
            not,
            and,
            or,
            if_then_else,
        }
    }
}

// =============================================================================
// List
// =============================================================================

#[derive(Clone, Copy)]
struct Cells {
    nil_tag: TagId,
    cat_tag: TagId,
}

impl Cells {
    /// `Some((head, tail))` for a cons cell, `None` for the empty list.
    fn split(
        self,
        evaluator: &Evaluator<'_>,
        this: NodeId,
        arguments: &[NodeId],
        list: NodeId,
    ) -> Result<Option<(NodeId, NodeId)>, EvalError> {
        match *evaluator.graph().node(list)? {
            Node::Boxed {
                constructor,
                payload,
                ..
            } if constructor == self.cat_tag => pair(evaluator, payload)
                .map(Some)
                .ok_or_else(|| evaluator.no_matching_overload(this, arguments)),
            Node::Boxed { constructor, .. } if constructor == self.nil_tag => Ok(None),
            _ => Err(evaluator.no_matching_overload(this, arguments)),
        }
    }
}

impl ListType {
    fn install(graph: &mut Graph) -> Result<Self, EvalError> {
        let tag = graph.tag(list::List::NAME);
        let nil_tag = graph.tag(list::Nil::NAME);
        let cat_tag = graph.tag(list::Cat::NAME);

        let empty = graph.nullary(tag, nil_tag);
        let nil = graph.type_slot(empty);

        let cat = graph.class("Cat", 2..=2, move |evaluator, this, arguments| {
            let tail = evaluator.normalize(arguments[1])?;
            if !matches!(
                evaluator.graph().node(tail)?,
                Node::Boxed { metatype, .. } if *metatype == tag
            ) {
                return Err(evaluator.no_matching_overload(this, arguments));
            }
            let graph = evaluator.graph_mut();
            let payload = graph.pair(arguments[0], tail);
            Ok(graph.boxed(tag, cat_tag, payload))
        });

        let variadic = graph.class("Variadic", 0..=usize::MAX, move |evaluator, this, arguments| {
            let graph = evaluator.graph_mut();
            Ok(match arguments {
                [] => nil,
                [last] => graph.call(cat, &[*last, nil]),
                [first, rest @ ..] => {
                    let rest = graph.call(this, rest);
                    graph.call(cat, &[*first, rest])
                }
            })
        });

        let cells = Cells { nil_tag, cat_tag };

        let fmap = graph.class("List::fmap", 2..=2, move |evaluator, this, arguments| {
            let Some((head, tail)) = cells.split(evaluator, this, arguments, arguments[0])? else {
                return Ok(arguments[0]);
            };
            let head = evaluator.eval(arguments[1], &[head])?;
            let tail = evaluator.eval(this, &[tail, arguments[1]])?;
            let graph = evaluator.graph_mut();
            let payload = graph.pair(head, tail);
            Ok(graph.boxed(tag, cat_tag, payload))
        });

        let foldl = graph.class("List::foldl", 3..=3, move |evaluator, this, arguments| {
            let Some((head, tail)) = cells.split(evaluator, this, arguments, arguments[2])? else {
                return Ok(arguments[1]);
            };
            let accumulator = evaluator.eval(arguments[0], &[arguments[1], head])?;
            Ok(evaluator
                .graph_mut()
                .call(this, &[arguments[0], accumulator, tail]))
        });

        let foldr = graph.class("List::foldr", 3..=3, move |evaluator, this, arguments| {
            let Some((head, tail)) = cells.split(evaluator, this, arguments, arguments[2])? else {
                return Ok(arguments[1]);
            };
            let rest = evaluator.eval(this, &[arguments[0], arguments[1], tail])?;
            Ok(evaluator.graph_mut().call(arguments[0], &[head, rest]))
        });

        graph.define_instance(tag, Method::Fmap, fmap)?;
        graph.define_instance(tag, Method::Fold, foldl)?;
        graph.define_instance(tag, Method::Foldl, foldl)?;
        graph.define_instance(tag, Method::Foldr, foldr)?;

        Ok(Self {
            tag,
            nil_tag,
            cat_tag,
            nil,
            cat,
            variadic,
            fmap,
            foldl,
            foldr,
        })
    }
}

// =============================================================================
// Maybe
// =============================================================================

#[derive(Clone, Copy)]
struct Contents {
    just_tag: TagId,
    nothing_tag: TagId,
}

impl Contents {
    /// `Some(payload)` for `Just`, `None` for `Nothing`.
    fn split(
        self,
        evaluator: &Evaluator<'_>,
        this: NodeId,
        arguments: &[NodeId],
        value: NodeId,
    ) -> Result<Option<NodeId>, EvalError> {
        match *evaluator.graph().node(value)? {
            Node::Boxed {
                constructor,
                payload,
                ..
            } if constructor == self.just_tag => Ok(Some(payload)),
            Node::Boxed { constructor, .. } if constructor == self.nothing_tag => Ok(None),
            _ => Err(evaluator.no_matching_overload(this, arguments)),
        }
    }
}

impl MaybeType {
    fn install(graph: &mut Graph) -> Result<Self, EvalError> {
        let tag = graph.tag(maybe::Maybe::NAME);
        let just_tag = graph.tag(maybe::Just::NAME);
        let nothing_tag = graph.tag(maybe::Nothing::NAME);

        let empty = graph.nullary(tag, nothing_tag);
        let nothing = graph.type_slot(empty);

        let just = graph.class("Just", 1..=1, move |evaluator, _, arguments| {
            Ok(evaluator.graph_mut().boxed(tag, just_tag, arguments[0]))
        });

        let contents = Contents {
            just_tag,
            nothing_tag,
        };

        let bind = graph.class("Maybe::Bind", 2..=2, move |evaluator, this, arguments| {
            Ok(match contents.split(evaluator, this, arguments, arguments[0])? {
                Some(payload) => evaluator.graph_mut().call(arguments[1], &[payload]),
                None => arguments[0],
            })
        });

        let fmap = graph.class("Maybe::fmap", 2..=2, move |evaluator, this, arguments| {
            let Some(payload) = contents.split(evaluator, this, arguments, arguments[0])? else {
                return Ok(arguments[0]);
            };
            let mapped = evaluator.eval(arguments[1], &[payload])?;
            Ok(evaluator.graph_mut().boxed(tag, just_tag, mapped))
        });

        let foldl = graph.class("Maybe::foldl", 3..=3, move |evaluator, this, arguments| {
            Ok(match contents.split(evaluator, this, arguments, arguments[2])? {
                Some(payload) => evaluator
                    .graph_mut()
                    .call(arguments[0], &[arguments[1], payload]),
                None => arguments[1],
            })
        });

        let foldr = graph.class("Maybe::foldr", 3..=3, move |evaluator, this, arguments| {
            Ok(match contents.split(evaluator, this, arguments, arguments[2])? {
                Some(payload) => evaluator
                    .graph_mut()
                    .call(arguments[0], &[payload, arguments[1]]),
                None => arguments[1],
            })
        });

        graph.define_instance(tag, Method::Return, just)?;
        graph.define_instance(tag, Method::Bind, bind)?;
        graph.define_instance(tag, Method::Fmap, fmap)?;
        graph.define_instance(tag, Method::Fold, foldl)?;
        graph.define_instance(tag, Method::Foldl, foldl)?;
        graph.define_instance(tag, Method::Foldr, foldr)?;

        Ok(Self {
            tag,
            just_tag,
            nothing_tag,
            just,
            nothing,
            bind,
            fmap,
            foldl,
            foldr,
        })
    }
}
