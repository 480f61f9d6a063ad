//! Binary operation evaluation

use std::fmt;

use crate::{Addition, Context, EvalError, Expr, Multiplication, Subtraction};

use super::Evaluate;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
}

impl BinaryOp {
    /// The operator's source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
        }
    }

    /// Apply the operator with two's-complement wraparound.
    pub fn apply_wrapping(self, left: i64, right: i64) -> i64 {
        match self {
            BinaryOp::Add => left.wrapping_add(right),
            BinaryOp::Subtract => left.wrapping_sub(right),
            BinaryOp::Multiply => left.wrapping_mul(right),
        }
    }

    /// Apply the operator, reporting overflow as an error.
    pub fn apply_checked(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let value = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
        };
        value.ok_or(EvalError::IntegerOverflow {
            op: self,
            left,
            right,
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Evaluate for Addition {
    fn evaluate(&self, ctx: &Context) -> i64 {
        eval_binary(BinaryOp::Add, &self.left, &self.right, ctx)
    }

    fn try_evaluate(&self, ctx: &Context) -> Result<i64, EvalError> {
        try_eval_binary(BinaryOp::Add, &self.left, &self.right, ctx)
    }
}

impl Evaluate for Multiplication {
    fn evaluate(&self, ctx: &Context) -> i64 {
        eval_binary(BinaryOp::Multiply, &self.left, &self.right, ctx)
    }

    fn try_evaluate(&self, ctx: &Context) -> Result<i64, EvalError> {
        try_eval_binary(BinaryOp::Multiply, &self.left, &self.right, ctx)
    }
}

impl Evaluate for Subtraction {
    fn evaluate(&self, ctx: &Context) -> i64 {
        eval_binary(BinaryOp::Subtract, &self.left, &self.right, ctx)
    }

    fn try_evaluate(&self, ctx: &Context) -> Result<i64, EvalError> {
        try_eval_binary(BinaryOp::Subtract, &self.left, &self.right, ctx)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_binary(op: BinaryOp, left: &Expr, right: &Expr, ctx: &Context) -> i64 {
    // Left before right
    let left = left.evaluate(ctx);
    let right = right.evaluate(ctx);
    op.apply_wrapping(left, right)
}

fn try_eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    ctx: &Context,
) -> Result<i64, EvalError> {
    let left = left.try_evaluate(ctx)?;
    let right = right.try_evaluate(ctx)?;
    op.apply_checked(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addition(a: i64, b: i64) -> Addition {
        Addition {
            left: Box::new(Expr::constant(a)),
            right: Box::new(Expr::constant(b)),
        }
    }

    #[test]
    fn test_addition_wraps() {
        let ctx = Context::new();
        assert_eq!(addition(i64::MAX, 1).evaluate(&ctx), i64::MIN);
    }

    #[test]
    fn test_addition_checked_overflow() {
        let ctx = Context::new();
        assert_eq!(
            addition(i64::MAX, 1).try_evaluate(&ctx),
            Err(EvalError::IntegerOverflow {
                op: BinaryOp::Add,
                left: i64::MAX,
                right: 1,
            })
        );
    }

    #[test]
    fn test_subtraction_is_left_minus_right() {
        let ctx = Context::new();
        let node = Subtraction {
            left: Box::new(Expr::constant(10)),
            right: Box::new(Expr::constant(3)),
        };
        assert_eq!(node.evaluate(&ctx), 7);
        assert_eq!(node.try_evaluate(&ctx), Ok(7));
    }

    #[test]
    fn test_multiplication_checked_overflow_propagates_from_child() {
        let ctx = Context::new();
        let node = Multiplication {
            left: Box::new(Expr::multiply(Expr::constant(i64::MAX), Expr::constant(2))),
            right: Box::new(Expr::constant(0)),
        };
        // Wrapping evaluation still multiplies by zero
        assert_eq!(node.evaluate(&ctx), 0);
        assert!(matches!(
            node.try_evaluate(&ctx),
            Err(EvalError::IntegerOverflow {
                op: BinaryOp::Multiply,
                ..
            })
        ));
    }
}
