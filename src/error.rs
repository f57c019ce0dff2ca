//! Error type shared by the vector and tree modules.

/// Everything that can go wrong in this crate.
///
/// All checks happen before any mutation, so a returned error always leaves
/// the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node was asked to allocate a non-positive number of children.
    #[error("invalid argument: child count must be positive, got {count}")]
    InvalidArgument { count: usize },
    /// A zero-length (or non-finite) vector cannot be normalized.
    #[error("degenerate operation: cannot normalize a vector of length zero or non-finite length")]
    DegenerateOperation,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
