//! # Quickbeam
//!
//! A tree-walking interpreter for small integer expression trees.
//!
//! Quickbeam is a compact demonstration of the Interpreter pattern: every
//! node of an expression tree knows how to evaluate itself against a shared
//! [`Context`], and evaluating the root recursively evaluates the whole tree.
//!
//! ## Architecture
//!
//! - **Expression tree**: a closed set of node kinds ([`Expr`])
//! - **Evaluation**: the [`Evaluate`] trait, implemented by every node
//! - **Context**: shared, read-only state threaded through evaluation
//! - **Interpreter**: the driver that builds a tree and evaluates it
//!
//! ## Status
//!
//! The driver does not parse its input. It always builds the tree for
//! `2 + 3 * 4` and evaluates it.
//!
//! ```
//! use quickbeam::interpret;
//!
//! assert_eq!(interpret("2 + 3 * 4"), 14);
//! assert_eq!(interpret(""), 14);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod expr;
pub mod interpreter;
pub mod logging;

// Re-export main types
pub use context::Context;
pub use error::{EvalError, Result};
pub use eval::binary::BinaryOp;
pub use eval::{eval_expr, try_eval_expr, Evaluate};
pub use expr::{Addition, Constant, Expr, Multiplication, Subtraction};
pub use interpreter::{format_result, interpret, Interpreter};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
