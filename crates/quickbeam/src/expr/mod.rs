//! Expression tree node types
//!
//! Trees are built bottom-up and never change afterwards. Every composite
//! node owns its two children outright, so a tree has no shared subtrees
//! and no cycles.

mod display;

use crate::eval::binary::BinaryOp;

/// A leaf holding an integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    /// The stored value
    pub value: i64,
}

/// `left + right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    /// Left operand, evaluated first
    pub left: Box<Expr>,
    /// Right operand
    pub right: Box<Expr>,
}

/// `left * right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplication {
    /// Left operand, evaluated first
    pub left: Box<Expr>,
    /// Right operand
    pub right: Box<Expr>,
}

/// `left - right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtraction {
    /// Left operand, evaluated first
    pub left: Box<Expr>,
    /// Right operand
    pub right: Box<Expr>,
}

/// An expression tree node.
///
/// # Example
///
/// ```
/// use quickbeam::{Context, Evaluate, Expr};
///
/// // 2 + 3 * 4
/// let tree = Expr::add(
///     Expr::constant(2),
///     Expr::multiply(Expr::constant(3), Expr::constant(4)),
/// );
///
/// assert_eq!(tree.evaluate(&Context::new()), 14);
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal
    Constant(Constant),
    /// Sum of two subexpressions
    Addition(Addition),
    /// Product of two subexpressions
    Multiplication(Multiplication),
    /// Difference of two subexpressions
    Subtraction(Subtraction),
}

impl Expr {
    /// Create a constant leaf.
    pub fn constant(value: i64) -> Self {
        Expr::Constant(Constant { value })
    }

    /// Create an addition node owning both operands.
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Addition(Addition {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a multiplication node owning both operands.
    pub fn multiply(left: Expr, right: Expr) -> Self {
        Expr::Multiplication(Multiplication {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a subtraction node owning both operands.
    pub fn subtract(left: Expr, right: Expr) -> Self {
        Expr::Subtraction(Subtraction {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Human-readable name of this node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "constant",
            Expr::Addition(_) => "addition",
            Expr::Multiplication(_) => "multiplication",
            Expr::Subtraction(_) => "subtraction",
        }
    }

    /// The operator and operands of a composite node, or `None` for a leaf.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self {
            Expr::Constant(_) => None,
            Expr::Addition(n) => Some((BinaryOp::Add, &*n.left, &*n.right)),
            Expr::Multiplication(n) => Some((BinaryOp::Multiply, &*n.left, &*n.right)),
            Expr::Subtraction(n) => Some((BinaryOp::Subtract, &*n.left, &*n.right)),
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self.as_binary() {
            None => 1,
            Some((_, left, right)) => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Height of the tree; a lone constant has depth 1.
    pub fn depth(&self) -> usize {
        match self.as_binary() {
            None => 1,
            Some((_, left, right)) => 1 + left.depth().max(right.depth()),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::constant(value)
    }
}

impl From<Constant> for Expr {
    fn from(node: Constant) -> Self {
        Expr::Constant(node)
    }
}

impl From<Addition> for Expr {
    fn from(node: Addition) -> Self {
        Expr::Addition(node)
    }
}

impl From<Multiplication> for Expr {
    fn from(node: Multiplication) -> Self {
        Expr::Multiplication(node)
    }
}

impl From<Subtraction> for Expr {
    fn from(node: Subtraction) -> Self {
        Expr::Subtraction(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Expr {
        Expr::add(
            Expr::constant(2),
            Expr::multiply(Expr::constant(3), Expr::constant(4)),
        )
    }

    #[test]
    fn test_constructors_box_children() {
        let expected = Expr::Addition(Addition {
            left: Box::new(Expr::Constant(Constant { value: 2 })),
            right: Box::new(Expr::Multiplication(Multiplication {
                left: Box::new(Expr::Constant(Constant { value: 3 })),
                right: Box::new(Expr::Constant(Constant { value: 4 })),
            })),
        });
        assert_eq!(sample(), expected);
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(Expr::from(7i64), Expr::constant(7));
    }

    #[test]
    fn test_node_count_and_depth() {
        assert_eq!(Expr::constant(1).node_count(), 1);
        assert_eq!(Expr::constant(1).depth(), 1);
        assert_eq!(sample().node_count(), 5);
        assert_eq!(sample().depth(), 3);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(sample().kind_name(), "addition");
        assert_eq!(Expr::constant(0).kind_name(), "constant");
        assert_eq!(
            Expr::subtract(Expr::from(1i64), Expr::from(2i64)).kind_name(),
            "subtraction"
        );
    }

    #[test]
    fn test_as_binary() {
        assert!(Expr::constant(3).as_binary().is_none());
        let tree = sample();
        let (op, left, right) = tree.as_binary().unwrap();
        assert_eq!(op, BinaryOp::Add);
        assert_eq!(left, &Expr::constant(2));
        assert_eq!(right.kind_name(), "multiplication");
    }
}
