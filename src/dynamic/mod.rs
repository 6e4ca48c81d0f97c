//! Runtime evaluation over an explicit graph.
//!
//! The type-level engine needs every computation to be known when the crate
//! is compiled. This module runs the same model on values built at runtime:
//! entities are nodes of a hash-consed [`Graph`], metafunction classes are
//! native closures, type class instances live in a table keyed by metatype,
//! and [`Evaluator`] walks the graph with an explicit depth limit in place of
//! the compiler's recursion limit.
//!
//! # Examples
//!
//! ```rust
//! use turbars::dynamic::{Evaluator, Graph, Literal, Prelude};
//!
//! let mut graph = Graph::new();
//! let prelude = Prelude::install(&mut graph)?;
//! let numbers = [1, 2, 3].map(|value| graph.value(Literal::Int(value)));
//! let zero = graph.value(Literal::Int(0));
//! let six = graph.value(Literal::Int(6));
//!
//! let mut evaluator = Evaluator::new(&mut graph);
//! let list = evaluator.eval(prelude.list.variadic, &numbers)?;
//! let sum = evaluator.eval(prelude.operations.foldl, &[prelude.operations.add, zero, list])?;
//! assert_eq!(sum, six);
//! # Ok::<(), turbars::dynamic::EvalError>(())
//! ```

mod config;
mod error;
mod evaluator;
mod graph;
mod instance;
mod prelude;
mod reflect;

pub use config::EvalConfig;
pub use error::EvalError;
pub use evaluator::Evaluator;
pub use graph::{ApplyFn, Arguments, ClassId, Graph, Literal, Node, NodeId, NodeShape, TagId};
pub use instance::{Method, Typeclass};
pub use prelude::{BooleanType, ListType, MaybeType, Operations, Prelude};
pub use reflect::Reflect;
