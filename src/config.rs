/// How [`crate::binary_tree::BinaryTree`] walks its nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Language-level recursion with the depth passed down as a parameter.
    /// Stack usage grows with tree depth.
    Recursive,
    /// Explicit heap-allocated stack. Safe for degenerate, very deep trees.
    #[default]
    Iterative,
}

/// Tuning knobs for tree traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub traversal: Traversal,
    /// Initial capacity of the explicit stack used by [`Traversal::Iterative`].
    pub stack_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            traversal: Traversal::Iterative,
            stack_capacity: 16,
        }
    }
}
