//! The runtime `eval` core.
//!
//! [`Evaluator::eval`] follows the same rules as the type-level `Eval`:
//!
//! 1. `Result` and `Type` nodes return their slot and take no arguments. A
//!    `Call` node is a Turbo function whose slot is the value of the call.
//! 2. A class checks the arity, runs `apply` and normalizes what it returns.
//!    A `Partial` calls its function with the bound argument prepended.
//! 3. Anything else is [`EvalError::NotAFunction`].
//!
//! Each nested `eval` or `normalize` is one frame; more than
//! [`EvalConfig::max_depth`] frames fail with
//! [`EvalError::DepthLimitExceeded`]. Class applications are memoized by
//! `(class, arguments)`, which is sound because nodes never change.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::config::EvalConfig;
use super::error::EvalError;
use super::graph::{Arguments, ClassId, Graph, Node, NodeId, TagId};
use super::instance::Method;

/// Evaluates nodes of one graph.
///
/// # Examples
///
/// ```rust
/// use turbars::dynamic::{Evaluator, Graph, Literal};
///
/// let mut graph = Graph::new();
/// let answer = graph.value(Literal::Int(42));
/// let function = graph.result(answer);
///
/// let mut evaluator = Evaluator::new(&mut graph);
/// assert_eq!(evaluator.eval(function, &[]), Ok(answer));
/// ```
#[derive(Debug)]
pub struct Evaluator<'g> {
    graph: &'g mut Graph,
    config: EvalConfig,
    memo: FxHashMap<(NodeId, Arguments), NodeId>,
    depth: usize,
}

impl<'g> Evaluator<'g> {
    /// Creates an evaluator with the default configuration.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self::with_config(graph, EvalConfig::default())
    }

    /// Creates an evaluator with `config`.
    pub fn with_config(graph: &'g mut Graph, config: EvalConfig) -> Self {
        Self {
            graph,
            config,
            memo: FxHashMap::default(),
            depth: 0,
        }
    }

    /// The graph being evaluated.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Mutable access to the graph, for classes that build new nodes.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut *self.graph
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> EvalConfig {
        self.config
    }

    /// The number of cached class applications.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.memo.len()
    }

    /// Calls `function` with `arguments` and returns the normalized result.
    ///
    /// # Errors
    ///
    /// Fails when `function` is not a function for these arguments, when a
    /// class has no matching overload, or when the depth limit is exceeded.
    pub fn eval(&mut self, function: NodeId, arguments: &[NodeId]) -> Result<NodeId, EvalError> {
        self.nested(|this| this.eval_frame(function, arguments))
    }

    /// One normalization step: a `Result` or `Type` node yields its slot, a
    /// `Call` node is evaluated, anything else is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the deferred call.
    pub fn normalize(&mut self, node: NodeId) -> Result<NodeId, EvalError> {
        self.nested(|this| match this.graph.node(node)?.clone() {
            Node::Result(value) | Node::Type(value) => Ok(value),
            Node::Call {
                function,
                arguments,
            } => this.eval(function, &arguments),
            _ => Ok(node),
        })
    }

    /// Normalizes `node` and splits the boxed value it must be.
    ///
    /// # Errors
    ///
    /// [`EvalError::NotABoxedValue`] if the normal form is not boxed.
    pub fn unbox(&mut self, node: NodeId) -> Result<(TagId, TagId, NodeId), EvalError> {
        let normal = self.normalize(node)?;
        match self.graph.node(normal)? {
            Node::Boxed {
                metatype,
                constructor,
                payload,
            } => Ok((*metatype, *constructor, *payload)),
            _ => Err(EvalError::NotABoxedValue { node: normal }),
        }
    }

    /// Returns `true` if `node` normalizes to a boxed value of `metatype`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of normalizing `node`.
    pub fn is_a(&mut self, metatype: TagId, node: NodeId) -> Result<bool, EvalError> {
        let normal = self.normalize(node)?;
        Ok(self.graph.is_a(metatype, normal))
    }

    /// Returns `true` if `node` normalizes to a boxed value built by
    /// `constructor`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of normalizing `node`.
    pub fn constructed_by(&mut self, constructor: TagId, node: NodeId) -> Result<bool, EvalError> {
        let normal = self.normalize(node)?;
        Ok(self.graph.constructed_by(constructor, normal))
    }

    /// Finds the implementation of `method` for the type of `value`.
    ///
    /// Returns the normalized value together with the implementation.
    ///
    /// # Errors
    ///
    /// [`EvalError::NotABoxedValue`] for a value that is not boxed and
    /// [`EvalError::MissingMethod`] when its type has no such operation.
    pub fn dispatch(&mut self, method: Method, value: NodeId) -> Result<(NodeId, NodeId), EvalError> {
        let normal = self.normalize(value)?;
        let (metatype, _, _) = self
            .graph
            .boxed_parts(normal)
            .ok_or(EvalError::NotABoxedValue { node: normal })?;
        let function = self.method_of(metatype, method)?;
        Ok((normal, function))
    }

    /// The implementation of `method` for `metatype`.
    ///
    /// # Errors
    ///
    /// [`EvalError::MissingMethod`] when there is none.
    pub fn method_of(&self, metatype: TagId, method: Method) -> Result<NodeId, EvalError> {
        self.graph
            .instance(metatype, method)
            .ok_or_else(|| EvalError::MissingMethod {
                metatype: self.graph.tag_name(metatype).to_owned(),
                method,
            })
    }

    /// The error a class reports when none of its overloads match.
    #[must_use]
    pub fn no_matching_overload(&self, class: NodeId, arguments: &[NodeId]) -> EvalError {
        EvalError::NoMatchingOverload {
            class: self
                .graph
                .class_name(class)
                .map_or_else(|| class.to_string(), str::to_owned),
            arguments: arguments.to_vec(),
        }
    }

    fn eval_frame(&mut self, function: NodeId, arguments: &[NodeId]) -> Result<NodeId, EvalError> {
        trace!(%function, arity = arguments.len(), depth = self.depth, "eval");
        let arity = arguments.len();
        match self.graph.node(function)?.clone() {
            Node::Result(value) | Node::Type(value) if arity == 0 => Ok(value),
            Node::Call {
                function: callee,
                arguments: inner,
            } if arity == 0 => self.eval(callee, &inner),
            Node::Result(_) | Node::Type(_) | Node::Call { .. } => {
                Err(EvalError::UnexpectedArguments {
                    node: function,
                    arity,
                })
            }
            Node::Class(class) => self.apply_class(function, class, arguments),
            Node::Partial {
                function: callee,
                bound,
            } => {
                let mut full = Arguments::with_capacity(arity + 1);
                full.push(bound);
                full.extend_from_slice(arguments);
                self.eval(callee, &full)
            }
            Node::Value(_)
            | Node::Constant(_)
            | Node::Tag(_)
            | Node::Pair(..)
            | Node::Boxed { .. } => Err(EvalError::NotAFunction {
                node: function,
                arity,
            }),
        }
    }

    fn apply_class(
        &mut self,
        function: NodeId,
        class: ClassId,
        arguments: &[NodeId],
    ) -> Result<NodeId, EvalError> {
        let (accepted, apply) = self
            .graph
            .class_definition(class)
            .ok_or(EvalError::UnknownNode { node: function })?;
        if !accepted.contains(&arguments.len()) {
            return Err(self.no_matching_overload(function, arguments));
        }

        let key = (function, Arguments::from_slice(arguments));
        if self.config.memoization()
            && let Some(&cached) = self.memo.get(&key)
        {
            debug!(%function, result = %cached, "memoized application");
            return Ok(cached);
        }

        let intermediate = (*apply)(self, function, arguments)?;
        let result = self.normalize(intermediate)?;
        if self.config.memoization() {
            self.memo.insert(key, result);
        }
        Ok(result)
    }

    fn nested<T>(
        &mut self,
        frame: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        let limit = self.config.max_depth();
        if self.depth >= limit {
            debug!(limit, "evaluation depth limit exceeded");
            return Err(EvalError::DepthLimitExceeded { limit });
        }
        self.depth += 1;
        let result = frame(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::graph::Literal;
    use rstest::rstest;

    struct Fixture {
        graph: Graph,
        answer: NodeId,
        duplicate: NodeId,
    }

    fn fixture() -> Fixture {
        let mut graph = Graph::new();
        let answer = graph.value(Literal::Int(42));
        let duplicate = graph.class("Duplicate", 1..=1, |evaluator, _, arguments| {
            Ok(evaluator.graph_mut().pair(arguments[0], arguments[0]))
        });
        Fixture {
            graph,
            answer,
            duplicate,
        }
    }

    #[test]
    fn slots_are_returned_directly() {
        let Fixture {
            mut graph, answer, ..
        } = fixture();
        let turbo = graph.result(answer);
        let stl = graph.type_slot(turbo);

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(evaluator.eval(turbo, &[]), Ok(answer));
        // One step: the STL slot holds an unevaluated Turbo function.
        assert_eq!(evaluator.eval(stl, &[]), Ok(turbo));
    }

    #[test]
    fn class_results_are_normalized() {
        let Fixture {
            mut graph, answer, ..
        } = fixture();
        let deferred_value = graph.result(answer);
        let deferred = graph.class("Deferred", 0..=0, move |_, _, _| Ok(deferred_value));

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(evaluator.eval(deferred, &[]), Ok(answer));
    }

    #[test]
    fn deferred_calls_evaluate_on_normalization() {
        let Fixture {
            mut graph,
            answer,
            duplicate,
        } = fixture();
        let call = graph.call(duplicate, &[answer]);
        let expected = graph.pair(answer, answer);

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(evaluator.normalize(call), Ok(expected));
        assert_eq!(evaluator.eval(call, &[]), Ok(expected));
    }

    #[test]
    fn partial_application_prepends_the_bound_argument() {
        let mut graph = Graph::new();
        let pairing = graph.class("Pairing", 2..=2, |evaluator, _, arguments| {
            Ok(evaluator.graph_mut().pair(arguments[0], arguments[1]))
        });
        let first = graph.value(Literal::Int(1));
        let second = graph.value(Literal::Int(2));
        let bound = graph.partial(pairing, first);
        let expected = graph.pair(first, second);

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(evaluator.eval(bound, &[second]), Ok(expected));
        assert!(matches!(
            evaluator.eval(bound, &[]),
            Err(EvalError::NoMatchingOverload { .. })
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn classes_reject_other_arities(#[case] arity: usize) {
        let Fixture {
            mut graph,
            answer,
            duplicate,
        } = fixture();
        let arguments = vec![answer; arity];

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(
            evaluator.eval(duplicate, &arguments),
            Err(EvalError::NoMatchingOverload {
                class: "Duplicate".to_owned(),
                arguments,
            })
        );
    }

    #[test]
    fn values_are_not_functions() {
        let Fixture {
            mut graph, answer, ..
        } = fixture();
        let constant = graph.constant(Literal::Int(7));

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(
            evaluator.eval(answer, &[]),
            Err(EvalError::NotAFunction {
                node: answer,
                arity: 0
            })
        );
        assert!(matches!(
            evaluator.eval(constant, &[]),
            Err(EvalError::NotAFunction { .. })
        ));
        assert_eq!(evaluator.normalize(constant), Ok(constant));
    }

    #[test]
    fn resolved_functions_take_no_arguments() {
        let Fixture {
            mut graph, answer, ..
        } = fixture();
        let turbo = graph.result(answer);

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(
            evaluator.eval(turbo, &[answer]),
            Err(EvalError::UnexpectedArguments {
                node: turbo,
                arity: 1
            })
        );
    }

    #[test]
    fn applications_are_memoized() {
        let Fixture {
            mut graph,
            answer,
            duplicate,
        } = fixture();

        let mut evaluator = Evaluator::new(&mut graph);
        let first = evaluator.eval(duplicate, &[answer]);
        let second = evaluator.eval(duplicate, &[answer]);
        assert_eq!(first, second);
        assert_eq!(evaluator.cached(), 1);

        let mut uncached =
            Evaluator::with_config(&mut graph, EvalConfig::new().with_memoization(false));
        assert_eq!(uncached.eval(duplicate, &[answer]), first);
        assert_eq!(uncached.cached(), 0);
    }

    #[test]
    fn unbounded_recursion_hits_the_depth_limit() {
        let mut graph = Graph::new();
        let forever = graph.class("Forever", 0..=0, |evaluator, this, _| {
            Ok(evaluator.graph_mut().call(this, &[]))
        });

        let mut evaluator =
            Evaluator::with_config(&mut graph, EvalConfig::new().with_max_depth(32));
        assert_eq!(
            evaluator.eval(forever, &[]),
            Err(EvalError::DepthLimitExceeded { limit: 32 })
        );
    }

    #[test]
    fn unbox_rejects_plain_values() {
        let Fixture {
            mut graph, answer, ..
        } = fixture();

        let mut evaluator = Evaluator::new(&mut graph);
        assert_eq!(
            evaluator.unbox(answer),
            Err(EvalError::NotABoxedValue { node: answer })
        );
    }
}
