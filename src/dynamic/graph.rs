//! The node arena.
//!
//! A [`Graph`] owns every node of a runtime computation. Nodes are immutable
//! and hash-consed: inserting a node structurally equal to an existing one
//! returns the existing [`NodeId`], so comparing ids compares values.
//!
//! The node kinds mirror the type-level entities:
//!
//! | Node | Shape | Type-level counterpart |
//! |------|-------|------------------------|
//! | `Value` | value | any plain type |
//! | `Constant` | value (denied `Type` slot) | `BoolConstant`, `IntConstant` |
//! | `Tag` | value | a `#[derive(Tag)]` type |
//! | `Pair` | value | a 2-tuple |
//! | `Boxed` | value | `Boxed<Type, Ctor, Payload>` |
//! | `Result` | Turbo | a `TurboFunction` |
//! | `Type` | STL | an `StlFunction` |
//! | `Call` | Turbo | `Call<F, Args>` |
//! | `Partial` | class | `Partial<F, A>` |
//! | `Class` | class | a `MetafunctionClass` |

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::RangeInclusive;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::error::EvalError;
use super::evaluator::Evaluator;
use super::instance::{Method, Typeclass};

/// Index of a node in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in its graph.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl Display for NodeId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// An interned metatype or constructor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(usize);

/// Index of a native metafunction class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

/// Plain data carried by `Value` and `Constant` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A string, also used for opaque values known only by name.
    Str(Box<str>),
}

impl Display for Literal {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => formatter.write_str("()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
        }
    }
}

/// Argument lists. Most calls take at most three arguments.
pub type Arguments = SmallVec<[NodeId; 4]>;

/// A node of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A plain value.
    Value(Literal),
    /// An integral-constant wrapper. Its `Type` slot aliases the node itself,
    /// which is why it is excluded from the STL shape.
    Constant(Literal),
    /// A tag used as a value, e.g. the payload of a nullary constructor.
    Tag(TagId),
    /// An ordered pair.
    Pair(NodeId, NodeId),
    /// An algebraic value.
    Boxed {
        /// The algebraic type.
        metatype: TagId,
        /// The constructor that built the value.
        constructor: TagId,
        /// The carried data.
        payload: NodeId,
    },
    /// A Turbo function holding its value.
    Result(NodeId),
    /// An STL-style function holding its value.
    Type(NodeId),
    /// A deferred call; a Turbo function whose value is computed on demand.
    Call {
        /// The callee.
        function: NodeId,
        /// The arguments.
        arguments: Arguments,
    },
    /// `function` with its first argument bound.
    Partial {
        /// The callee.
        function: NodeId,
        /// The bound first argument.
        bound: NodeId,
    },
    /// A native metafunction class.
    Class(ClassId),
}

/// The shape of a node, as seen by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    /// Not callable.
    Value,
    /// Holds or computes its value in a `Result` slot.
    Turbo,
    /// Holds its value in a `Type` slot.
    Stl,
    /// Invoked through `apply`.
    Class,
}

impl Node {
    /// The shape of this node.
    #[must_use]
    pub const fn shape(&self) -> NodeShape {
        match self {
            Self::Value(_)
            | Self::Constant(_)
            | Self::Tag(_)
            | Self::Pair(..)
            | Self::Boxed { .. } => NodeShape::Value,
            Self::Result(_) | Self::Call { .. } => NodeShape::Turbo,
            Self::Type(_) => NodeShape::Stl,
            Self::Partial { .. } | Self::Class(_) => NodeShape::Class,
        }
    }
}

/// The body of a native class: `apply(evaluator, this, arguments)`.
///
/// `this` is the class node itself, for recursion and diagnostics. The
/// returned node is normalized by the evaluator.
pub type ApplyFn = dyn Fn(&mut Evaluator<'_>, NodeId, &[NodeId]) -> Result<NodeId, EvalError>;

struct ClassDef {
    name: Box<str>,
    arity: RangeInclusive<usize>,
    apply: Rc<ApplyFn>,
}

impl Debug for ClassDef {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClassDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// An append-only, hash-consed arena of nodes plus the type class instance
/// table.
///
/// Builder methods do not validate the ids they are given; a foreign id is
/// reported as [`EvalError::UnknownNode`] when it is evaluated.
///
/// # Examples
///
/// ```rust
/// use turbars::dynamic::{Graph, Literal};
///
/// let mut graph = Graph::new();
/// let one = graph.value(Literal::Int(1));
/// let first = graph.pair(one, one);
/// let second = graph.pair(one, one);
///
/// assert_eq!(first, second);
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    interned: FxHashMap<Node, NodeId>,
    tags: Vec<Box<str>>,
    tag_ids: FxHashMap<Box<str>, TagId>,
    classes: Vec<ClassDef>,
    instances: FxHashMap<(TagId, Method), NodeId>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks a node up.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownNode`] for an id from another graph.
    pub fn node(&self, id: NodeId) -> Result<&Node, EvalError> {
        self.nodes
            .get(id.0)
            .ok_or(EvalError::UnknownNode { node: id })
    }

    /// Inserts a node, returning the id of the structurally equal node if
    /// one exists.
    pub fn insert(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.interned.get(&node) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node.clone());
        self.interned.insert(node, id);
        id
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// A plain value.
    pub fn value(&mut self, literal: Literal) -> NodeId {
        self.insert(Node::Value(literal))
    }

    /// An integral-constant wrapper.
    pub fn constant(&mut self, literal: Literal) -> NodeId {
        self.insert(Node::Constant(literal))
    }

    /// Interns a tag name.
    pub fn tag(&mut self, name: &str) -> TagId {
        if let Some(&id) = self.tag_ids.get(name) {
            return id;
        }
        let id = TagId(self.tags.len());
        self.tags.push(name.into());
        self.tag_ids.insert(name.into(), id);
        id
    }

    /// A tag used as a value.
    pub fn tag_node(&mut self, tag: TagId) -> NodeId {
        self.insert(Node::Tag(tag))
    }

    /// An ordered pair.
    pub fn pair(&mut self, first: NodeId, second: NodeId) -> NodeId {
        self.insert(Node::Pair(first, second))
    }

    /// An algebraic value.
    pub fn boxed(&mut self, metatype: TagId, constructor: TagId, payload: NodeId) -> NodeId {
        self.insert(Node::Boxed {
            metatype,
            constructor,
            payload,
        })
    }

    /// An algebraic value built by a nullary constructor: the payload is the
    /// constructor tag.
    pub fn nullary(&mut self, metatype: TagId, constructor: TagId) -> NodeId {
        let payload = self.tag_node(constructor);
        self.boxed(metatype, constructor, payload)
    }

    /// A Turbo function holding `value`.
    pub fn result(&mut self, value: NodeId) -> NodeId {
        self.insert(Node::Result(value))
    }

    /// An STL-style function holding `value`.
    pub fn type_slot(&mut self, value: NodeId) -> NodeId {
        self.insert(Node::Type(value))
    }

    /// A deferred call.
    pub fn call(&mut self, function: NodeId, arguments: &[NodeId]) -> NodeId {
        self.insert(Node::Call {
            function,
            arguments: Arguments::from_slice(arguments),
        })
    }

    /// `function` with its first argument bound to `bound`.
    pub fn partial(&mut self, function: NodeId, bound: NodeId) -> NodeId {
        self.insert(Node::Partial { function, bound })
    }

    /// Registers a native class accepting `arity` arguments.
    ///
    /// Every registration is a distinct node, even for identical names.
    pub fn class<F>(&mut self, name: &str, arity: RangeInclusive<usize>, apply: F) -> NodeId
    where
        F: Fn(&mut Evaluator<'_>, NodeId, &[NodeId]) -> Result<NodeId, EvalError> + 'static,
    {
        let id = ClassId(self.classes.len());
        self.classes.push(ClassDef {
            name: name.into(),
            arity,
            apply: Rc::new(apply),
        });
        self.insert(Node::Class(id))
    }

    // =========================================================================
    // Names and classes
    // =========================================================================

    /// Finds an already interned tag.
    #[must_use]
    pub fn find_tag(&self, name: &str) -> Option<TagId> {
        self.tag_ids.get(name).copied()
    }

    /// The name of a tag.
    #[must_use]
    pub fn tag_name(&self, tag: TagId) -> &str {
        self.tags.get(tag.0).map_or("<unknown tag>", |name| &**name)
    }

    /// The name of a class node, if `node` is one.
    #[must_use]
    pub fn class_name(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0)? {
            Node::Class(class) => self.classes.get(class.0).map(|definition| &*definition.name),
            _ => None,
        }
    }

    pub(crate) fn class_definition(&self, class: ClassId) -> Option<(RangeInclusive<usize>, Rc<ApplyFn>)> {
        self.classes
            .get(class.0)
            .map(|definition| (definition.arity.clone(), Rc::clone(&definition.apply)))
    }

    // =========================================================================
    // Instances
    // =========================================================================

    /// Declares `function` as the implementation of `method` for `metatype`.
    ///
    /// # Errors
    ///
    /// Instances are defined once: a second definition for the same pair is
    /// [`EvalError::DuplicateInstance`].
    pub fn define_instance(
        &mut self,
        metatype: TagId,
        method: Method,
        function: NodeId,
    ) -> Result<(), EvalError> {
        if self.instances.contains_key(&(metatype, method)) {
            return Err(EvalError::DuplicateInstance {
                metatype: self.tag_name(metatype).to_owned(),
                method,
            });
        }
        self.instances.insert((metatype, method), function);
        Ok(())
    }

    /// The implementation of `method` for `metatype`.
    #[must_use]
    pub fn instance(&self, metatype: TagId, method: Method) -> Option<NodeId> {
        self.instances.get(&(metatype, method)).copied()
    }

    /// Returns `true` if `metatype` defines every operation of `typeclass`.
    #[must_use]
    pub fn implements(&self, metatype: TagId, typeclass: Typeclass) -> bool {
        typeclass
            .methods()
            .iter()
            .all(|&method| self.instances.contains_key(&(metatype, method)))
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// The shape of `node`, or `None` for a foreign id.
    #[must_use]
    pub fn shape(&self, node: NodeId) -> Option<NodeShape> {
        self.nodes.get(node.0).map(Node::shape)
    }

    /// Returns `true` if `node` has a `Result` slot.
    #[must_use]
    pub fn is_turbo_function(&self, node: NodeId) -> bool {
        self.shape(node) == Some(NodeShape::Turbo)
    }

    /// Returns `true` if `node` has a `Type` slot and is not an integral
    /// constant.
    #[must_use]
    pub fn is_stl_function(&self, node: NodeId) -> bool {
        self.type_slot_of(node).is_some() && !self.is_integral_constant(node)
    }

    /// Returns `true` if `node` holds its value in either slot.
    #[must_use]
    pub fn is_function(&self, node: NodeId) -> bool {
        self.is_turbo_function(node) || self.is_stl_function(node)
    }

    /// Returns `true` if `node` has an `apply` accepting `arity` arguments.
    ///
    /// A partial application accepts any number of further arguments; whether
    /// the underlying call succeeds is decided when it is evaluated.
    #[must_use]
    pub fn is_metafunction_class(&self, node: NodeId, arity: usize) -> bool {
        match self.nodes.get(node.0) {
            Some(Node::Class(class)) => self
                .classes
                .get(class.0)
                .is_some_and(|definition| definition.arity.contains(&arity)),
            Some(Node::Partial { .. }) => true,
            _ => false,
        }
    }

    /// Returns `true` if `node` wraps its value like an integral constant.
    #[must_use]
    pub fn is_integral_constant(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.0), Some(Node::Constant(_)))
    }

    /// The `Type` slot of `node`. An integral constant aliases itself.
    #[must_use]
    pub fn type_slot_of(&self, node: NodeId) -> Option<NodeId> {
        match self.nodes.get(node.0)? {
            Node::Type(value) => Some(*value),
            Node::Constant(_) => Some(node),
            _ => None,
        }
    }

    /// The `(metatype, constructor, payload)` of a boxed value, reading
    /// through one stored slot.
    ///
    /// Deferred calls are not evaluated here; use
    /// [`Evaluator::unbox`] for those.
    #[must_use]
    pub fn boxed_parts(&self, node: NodeId) -> Option<(TagId, TagId, NodeId)> {
        let target = match self.nodes.get(node.0)? {
            Node::Result(value) | Node::Type(value) => *value,
            _ => node,
        };
        match self.nodes.get(target.0)? {
            Node::Boxed {
                metatype,
                constructor,
                payload,
            } => Some((*metatype, *constructor, *payload)),
            _ => None,
        }
    }

    /// Returns `true` if `node` is a boxed value of type `metatype`.
    #[must_use]
    pub fn is_a(&self, metatype: TagId, node: NodeId) -> bool {
        self.boxed_parts(node)
            .is_some_and(|(actual, _, _)| actual == metatype)
    }

    /// Returns `true` if `node` is a boxed value built by `constructor`.
    #[must_use]
    pub fn constructed_by(&self, constructor: TagId, node: NodeId) -> bool {
        self.boxed_parts(node)
            .is_some_and(|(_, actual, _)| actual == constructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> (Graph, TagId, TagId, NodeId) {
        let mut graph = Graph::new();
        let maybe = graph.tag("Maybe");
        let nothing = graph.tag("Nothing");
        let value = graph.nullary(maybe, nothing);
        (graph, maybe, nothing, value)
    }

    #[test]
    fn structurally_equal_nodes_share_an_id() {
        let mut graph = Graph::new();
        let one = graph.value(Literal::Int(1));
        let two = graph.value(Literal::Int(2));
        let first = graph.call(one, &[two, two]);
        let second = graph.call(one, &[two, two]);
        assert_eq!(first, second);
        assert_ne!(graph.call(one, &[two]), first);
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn tags_are_interned_by_name() {
        let mut graph = Graph::new();
        let first = graph.tag("List");
        assert_eq!(graph.tag("List"), first);
        assert_eq!(graph.find_tag("List"), Some(first));
        assert_eq!(graph.find_tag("Maybe"), None);
        assert_eq!(graph.tag_name(first), "List");
    }

    #[test]
    fn nullary_constructors_carry_their_tag() {
        let (graph, maybe, nothing, value) = sample();
        let (metatype, constructor, payload) = graph.boxed_parts(value).expect("boxed");
        assert_eq!((metatype, constructor), (maybe, nothing));
        assert_eq!(graph.node(payload), Ok(&Node::Tag(nothing)));
    }

    #[test]
    fn classes_are_never_merged() {
        let mut graph = Graph::new();
        let first = graph.class("Same", 1..=1, |_, _, arguments| Ok(arguments[0]));
        let second = graph.class("Same", 1..=1, |_, _, arguments| Ok(arguments[0]));
        assert_ne!(first, second);
        assert_eq!(graph.class_name(first), Some("Same"));
    }

    #[rstest]
    #[case(Node::Value(Literal::Unit), NodeShape::Value)]
    #[case(Node::Constant(Literal::Int(3)), NodeShape::Value)]
    #[case(Node::Result(NodeId(0)), NodeShape::Turbo)]
    #[case(Node::Call { function: NodeId(0), arguments: Arguments::new() }, NodeShape::Turbo)]
    #[case(Node::Type(NodeId(0)), NodeShape::Stl)]
    #[case(Node::Partial { function: NodeId(0), bound: NodeId(0) }, NodeShape::Class)]
    fn node_shapes(#[case] node: Node, #[case] expected: NodeShape) {
        assert_eq!(node.shape(), expected);
    }

    #[test]
    fn integral_constants_are_not_functions() {
        let mut graph = Graph::new();
        let constant = graph.constant(Literal::Int(3));
        let wrapped = graph.type_slot(constant);

        assert_eq!(graph.type_slot_of(constant), Some(constant));
        assert!(!graph.is_stl_function(constant));
        assert!(!graph.is_function(constant));
        assert!(graph.is_stl_function(wrapped));
        assert!(!graph.is_turbo_function(wrapped));
    }

    #[test]
    fn class_recognition_checks_arity() {
        let mut graph = Graph::new();
        let unary = graph.class("Unary", 1..=1, |_, _, arguments| Ok(arguments[0]));
        let bound = graph.partial(unary, unary);

        assert!(graph.is_metafunction_class(unary, 1));
        assert!(!graph.is_metafunction_class(unary, 2));
        assert!(graph.is_metafunction_class(bound, 0));
        assert!(!graph.is_function(unary));
    }

    #[test]
    fn predicates_are_total() {
        let (graph, maybe, nothing, value) = sample();
        let foreign = NodeId(usize::MAX);

        assert!(graph.is_a(maybe, value));
        assert!(graph.constructed_by(nothing, value));
        assert!(!graph.is_a(nothing, value));
        assert!(!graph.is_a(maybe, foreign));
        assert!(!graph.is_function(foreign));
        assert_eq!(graph.shape(foreign), None);
        assert_eq!(graph.node(foreign), Err(EvalError::UnknownNode { node: foreign }));
    }

    #[test]
    fn instances_are_defined_once() {
        let (mut graph, maybe, _, value) = sample();

        assert!(graph.define_instance(maybe, Method::Fmap, value).is_ok());
        assert_eq!(graph.instance(maybe, Method::Fmap), Some(value));
        assert!(graph.implements(maybe, Typeclass::Functor));
        assert!(!graph.implements(maybe, Typeclass::Monad));
        assert_eq!(
            graph.define_instance(maybe, Method::Fmap, value),
            Err(EvalError::DuplicateInstance {
                metatype: "Maybe".to_owned(),
                method: Method::Fmap,
            })
        );
    }
}
