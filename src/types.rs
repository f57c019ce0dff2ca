/// Identifier for a node in a [`crate::tree::Tree`] or a
/// [`crate::binary_tree::BinaryTree`].
///
/// This is an index into the owning tree's node arena, and is only meaningful
/// within the lifetime of that tree instance.
pub type NodeId = usize;

/// Named child slot of a [`crate::binary_tree::BinaryNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other slot.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A node stored in a tree arena that knows who its parent is.
///
/// The parent link is a lookup-only back-reference: it never owns the parent
/// and is never followed when a tree is dropped.
pub trait Node {
    /// Returns the parent id, or `None` for the root.
    fn parent(&self) -> Option<NodeId>;

    /// Returns `true` if this node has no parent.
    fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Iterator over the ancestors of a node, nearest parent first and the root
/// last.
///
/// Created by [`crate::tree::Tree::ancestors`] and
/// [`crate::binary_tree::BinaryTree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, N> {
    nodes: &'a [N],
    next: Option<NodeId>,
}

impl<'a, N: Node> Ancestors<'a, N> {
    pub(crate) fn new(nodes: &'a [N], id: NodeId) -> Self {
        Self {
            nodes,
            next: nodes[id].parent(),
        }
    }
}

impl<N: Node> Iterator for Ancestors<'_, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.nodes[id].parent();
        Some(id)
    }
}
