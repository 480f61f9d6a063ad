//! Display implementation for Expr

use std::fmt;

use super::*;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(c) => write!(f, "{}", c.value),
            Expr::Addition(n) => write_binary(f, BinaryOp::Add, &n.left, &n.right),
            Expr::Multiplication(n) => write_binary(f, BinaryOp::Multiply, &n.left, &n.right),
            Expr::Subtraction(n) => write_binary(f, BinaryOp::Subtract, &n.left, &n.right),
        }
    }
}

/// Composite nodes are always parenthesized so the tree shape is unambiguous.
fn write_binary(
    f: &mut fmt::Formatter<'_>,
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
) -> fmt::Result {
    write!(f, "({} {} {})", left, op, right)
}
