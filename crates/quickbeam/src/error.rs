//! Error types for Quickbeam evaluation
//!
//! Plain evaluation is total and never fails. Errors only arise from
//! checked evaluation, which reports arithmetic overflow instead of
//! wrapping.

use thiserror::Error;

use crate::eval::binary::BinaryOp;

/// Errors raised during checked evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An arithmetic operation did not fit in an `i64`.
    #[error("Integer overflow: {left} {op} {right}")]
    IntegerOverflow {
        /// The operator that overflowed
        op: BinaryOp,
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },
}

/// Result type alias for Quickbeam operations
pub type Result<T> = std::result::Result<T, EvalError>;
