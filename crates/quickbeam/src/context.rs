//! Evaluation context

/// Shared state for one evaluation pass.
///
/// A single context is created per top-level interpretation and passed by
/// shared reference to every node. It currently carries no data; it is the
/// place where variable bindings would live if a variable node were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {}

impl Context {
    /// Create a new, empty context.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_default() {
        assert_eq!(Context::new(), Context::default());
    }
}
