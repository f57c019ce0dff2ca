use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::types::{Ancestors, Node, NodeId};

/// A node of a [`Tree`] with any number of children.
///
/// Children are allocated together by [`Tree::create_children`], so they sit
/// next to each other in the arena and are addressed by one id range. The
/// range is fixed once allocated.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub data: T,
    parent: Option<NodeId>,
    first_child: NodeId,
    child_count: usize,
}

/// A tree whose nodes own a bulk-allocated block of children.
///
/// All nodes live in one arena owned by the tree; dropping the tree drops
/// every payload without recursing.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    fn new_root(data: T) -> Self {
        Self {
            data,
            parent: None,
            first_child: 0,
            child_count: 0,
        }
    }

    fn new_child(data: T, parent: NodeId) -> Self {
        Self {
            data,
            parent: Some(parent),
            first_child: 0,
            child_count: 0,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ids of this node's children. Empty until children are allocated.
    pub fn children(&self) -> Range<NodeId> {
        self.first_child..self.first_child + self.child_count
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

impl<T> Node for TreeNode<T> {
    fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

impl<T: Default> Default for Tree<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.nodes.iter().filter(|n| !n.has_children()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

impl<T> Tree<T> {
    /// Id of the root node.
    pub const ROOT: NodeId = 0;

    /// Creates a tree holding a single root node with `data`.
    pub fn new(data: T) -> Self {
        Self {
            nodes: vec![TreeNode::new_root(data)],
        }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.nodes[Self::ROOT]
    }

    /// Returns the node with the given id.
    ///
    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode<T> {
        &self.nodes[id]
    }

    /// Mutable access to a node. Only the payload is writable; the links
    /// are not.
    ///
    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode<T> {
        &mut self.nodes[id]
    }

    /// Returns the node with the given id, or `None` if it does not exist.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<T>)> + '_ {
        self.nodes.iter().enumerate()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> Range<NodeId> {
        self.nodes[id].children()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id].child_count
    }

    /// Walks the parent back-references from `id` up to the root.
    ///
    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, TreeNode<T>> {
        Ancestors::new(&self.nodes, id)
    }

    /// Depth of `id`, counting the root as depth 1.
    pub fn depth_of(&self, id: NodeId) -> usize {
        self.ancestors(id).count() + 1
    }

    /// Allocates `count` children of `id` in one block, payloads produced by
    /// `make(i)` for the `i`-th child.
    ///
    /// If `id` already has children nothing is allocated and the existing
    /// range is returned, so children are never replaced or grown.
    ///
    /// ### Parameters
    /// - `id` - The owning node.
    /// - `count` - Number of children to allocate; must be positive.
    /// - `make` - Payload factory, called once per new child in order.
    ///
    /// ### Returns
    /// The id range of the children of `id`.
    ///
    /// ### Errors
    /// [`Error::InvalidArgument`] if `count` is zero. The check runs before
    /// anything else, so it fires even when children already exist.
    ///
    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn create_children_with(
        &mut self,
        id: NodeId,
        count: usize,
        mut make: impl FnMut(usize) -> T,
    ) -> Result<Range<NodeId>> {
        if count == 0 {
            return Err(Error::InvalidArgument { count });
        }
        if self.nodes[id].has_children() {
            return Ok(self.nodes[id].children());
        }

        let first = self.nodes.len();
        self.nodes.reserve(count);
        self.nodes
            .extend((0..count).map(|i| TreeNode::new_child(make(i), id)));

        let owner = &mut self.nodes[id];
        owner.first_child = first;
        owner.child_count = count;
        Ok(owner.children())
    }
}

impl<T: Default> Tree<T> {
    /// Allocates `count` default-valued children of `id` in one block.
    ///
    /// Same contract as [`Tree::create_children_with`].
    pub fn create_children(&mut self, id: NodeId, count: usize) -> Result<Range<NodeId>> {
        self.create_children_with(id, count, |_| T::default())
    }
}
