//! Sample algebraic data types built on boxed values.
//!
//! Each type is declared once, in its own module, with its constructors and
//! every type class instance it has:
//!
//! | Type | Constructors | Instances |
//! |------|--------------|-----------|
//! | [`boolean::Boolean`] | `True`, `False` | none |
//! | [`list::List`] | `Nil`, `Cat`, `Variadic` | `Functor`, `Foldable` |
//! | [`maybe::Maybe`] | `Nothing`, `Just` | `Functor`, `Monad`, `Foldable` |

pub mod boolean;
pub mod list;
pub mod maybe;
