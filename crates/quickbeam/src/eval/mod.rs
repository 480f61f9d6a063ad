//! Expression evaluation

pub mod binary;
pub mod literal;

use tracing::trace;

use crate::{Context, EvalError, Expr};

/// Trait for evaluating expression nodes to integers.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Each node type implements this trait, and [`Expr`] dispatches to them.
/// Composite nodes always evaluate their left operand before their right.
///
/// # Recursion depth
///
/// Evaluation recurses once per tree level on the native stack, with no
/// depth limit of its own. Trees a few thousand levels deep are fine on a
/// default thread stack; a degenerate spine of hundreds of thousands of
/// nodes overflows the stack and aborts the process. The same bound holds
/// for [`Expr::node_count`], [`Expr::depth`], `Display`, and dropping the
/// tree. Callers building very deep trees should run them on a thread with
/// a larger stack.
pub trait Evaluate {
    /// Evaluate this node in the given context.
    ///
    /// Arithmetic wraps on overflow, so this never fails.
    fn evaluate(&self, ctx: &Context) -> i64;

    /// Evaluate this node, reporting arithmetic overflow as an error.
    fn try_evaluate(&self, ctx: &Context) -> Result<i64, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn evaluate(&self, ctx: &Context) -> i64 {
        let value = match self {
            Expr::Constant(node) => node.evaluate(ctx),
            Expr::Addition(node) => node.evaluate(ctx),
            Expr::Multiplication(node) => node.evaluate(ctx),
            Expr::Subtraction(node) => node.evaluate(ctx),
        };
        trace!(kind = self.kind_name(), value, "evaluated node");
        value
    }

    fn try_evaluate(&self, ctx: &Context) -> Result<i64, EvalError> {
        let value = match self {
            Expr::Constant(node) => node.try_evaluate(ctx),
            Expr::Addition(node) => node.try_evaluate(ctx),
            Expr::Multiplication(node) => node.try_evaluate(ctx),
            Expr::Subtraction(node) => node.try_evaluate(ctx),
        }?;
        trace!(kind = self.kind_name(), value, "evaluated node (checked)");
        Ok(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, ctx: &Context) -> i64 {
    expr.evaluate(ctx)
}

/// Evaluate an expression with overflow checking (convenience wrapper).
pub fn try_eval_expr(expr: &Expr, ctx: &Context) -> Result<i64, EvalError> {
    expr.try_evaluate(ctx)
}
