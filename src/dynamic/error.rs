//! Errors reported by the runtime evaluator.
//!
//! These are the runtime counterparts of the compile errors the type-level
//! engine produces: calling something that is not a function, a failed
//! guard, a missing type class instance, or running past the depth limit.

use std::fmt::{self, Display, Formatter};

use super::graph::NodeId;
use super::instance::Method;

/// Represents errors that can occur while building or evaluating a graph.
///
/// # Examples
///
/// ```rust
/// use turbars::dynamic::EvalError;
///
/// let error = EvalError::DepthLimitExceeded { limit: 16 };
/// assert_eq!(format!("{error}"), "evaluation exceeded the maximum depth of 16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The node has none of the function shapes.
    NotAFunction {
        /// The node passed as the function.
        node: NodeId,
        /// The number of arguments it was called with.
        arity: usize,
    },
    /// Arguments were passed to a function that already holds its value.
    UnexpectedArguments {
        /// The Turbo or STL-style function.
        node: NodeId,
        /// The number of arguments it was called with.
        arity: usize,
    },
    /// A metafunction class has no overload for the arguments.
    NoMatchingOverload {
        /// The name of the class.
        class: String,
        /// The arguments it was called with.
        arguments: Vec<NodeId>,
    },
    /// A boxed value was required.
    NotABoxedValue {
        /// The normalized node that is not boxed.
        node: NodeId,
    },
    /// The value's type has no instance for the requested operation.
    MissingMethod {
        /// The name of the metatype tag.
        metatype: String,
        /// The requested operation.
        method: Method,
    },
    /// An instance was registered twice for the same type and operation.
    DuplicateInstance {
        /// The name of the metatype tag.
        metatype: String,
        /// The operation registered twice.
        method: Method,
    },
    /// Evaluation nested deeper than the configured limit.
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// The id does not belong to the graph.
    UnknownNode {
        /// The foreign id.
        node: NodeId,
    },
}

impl Display for EvalError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFunction { node, arity } => {
                write!(formatter, "{node} is not a function of {arity} argument(s)")
            }
            Self::UnexpectedArguments { node, arity } => {
                write!(
                    formatter,
                    "{node} already holds its value and cannot take {arity} argument(s)"
                )
            }
            Self::NoMatchingOverload { class, arguments } => {
                write!(formatter, "no overload of {class} matches (")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{argument}")?;
                }
                formatter.write_str(")")
            }
            Self::NotABoxedValue { node } => write!(formatter, "{node} is not a boxed value"),
            Self::MissingMethod { metatype, method } => {
                write!(formatter, "{metatype} has no member {method}")
            }
            Self::DuplicateInstance { metatype, method } => {
                write!(formatter, "{metatype} already defines {method}")
            }
            Self::DepthLimitExceeded { limit } => {
                write!(formatter, "evaluation exceeded the maximum depth of {limit}")
            }
            Self::UnknownNode { node } => write!(formatter, "{node} does not belong to this graph"),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        EvalError::NotAFunction { node: NodeId::from_index(3), arity: 0 },
        "#3 is not a function of 0 argument(s)"
    )]
    #[case(
        EvalError::UnexpectedArguments { node: NodeId::from_index(1), arity: 2 },
        "#1 already holds its value and cannot take 2 argument(s)"
    )]
    #[case(
        EvalError::NoMatchingOverload {
            class: "Cat".to_owned(),
            arguments: vec![NodeId::from_index(4), NodeId::from_index(5)],
        },
        "no overload of Cat matches (#4, #5)"
    )]
    #[case(
        EvalError::MissingMethod { metatype: "Boolean".to_owned(), method: Method::Fmap },
        "Boolean has no member fmap"
    )]
    #[case(
        EvalError::DuplicateInstance { metatype: "Maybe".to_owned(), method: Method::Bind },
        "Maybe already defines Bind"
    )]
    #[case(EvalError::UnknownNode { node: NodeId::from_index(9) }, "#9 does not belong to this graph")]
    fn errors_display_their_context(#[case] error: EvalError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn eval_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EvalError::NotABoxedValue { node: NodeId::from_index(0) });
    }
}
