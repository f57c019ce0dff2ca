//! Small geometry and tree utility library.
//!
//! Main components:
//! - [`vector`]: `f64` 2D and 3D vectors with dot, cross, and scaling.
//! - [`tree`]: tree whose nodes own a bulk-allocated block of children.
//! - [`binary_tree`]: binary tree with write-once left/right slots and
//!   depth-tracking preorder traversal.
//! - [`config`]: traversal configuration.
//! - [`error`]: crate error type.
//! - [`types`]: node ids, sides, and the parent back-reference seam.
//!
//! Trees own every node in an arena; children refer to their parent by
//! [`types::NodeId`] only, so dropping a tree releases the whole structure
//! without recursion.

pub mod binary_tree;
pub mod config;
pub mod error;
pub mod tree;
pub mod types;
pub mod vector;

pub use error::{Error, Result};
