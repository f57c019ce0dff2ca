//! Binary tree with two write-once child slots per node.
//!
//! Nodes are created through [`BinaryTree::create_node`], which fills an empty
//! [`Side`] of an existing node and never overwrites an occupied one. Each
//! child remembers its parent as a [`NodeId`] back-reference.
//!
//! Depth is measured with the start node at depth 1. Traversal carries the
//! depth along with each visited node instead of keeping a running counter
//! on the tree, so repeated traversals always report the same result.

use std::fmt;

use crate::config::{Config, Traversal};
use crate::types::{Ancestors, Node, NodeId, Side};

#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    pub data: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> BinaryNode<T> {
    fn new_root(data: T) -> Self {
        Self {
            data,
            parent: None,
            left: None,
            right: None,
        }
    }

    fn new_child(data: T, parent: NodeId) -> Self {
        Self {
            data,
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Node for BinaryNode<T> {
    fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Result of [`BinaryTree::traverse_depth_preorder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preorder {
    /// Visited nodes: start, then its left subtree, then its right subtree.
    pub order: Vec<NodeId>,
    /// Deepest level reached, with the start node at depth 1. Zero when
    /// nothing was visited.
    pub max_depth: usize,
}

/// A binary tree that owns all its nodes.
///
/// ### Fields
/// - `nodes` - Node arena; index 0 is the root.
/// - `size` - Largest depth recorded by
///   [`BinaryTree::traverse_depth_preorder`]; never decreases.
/// - `config` - Traversal strategy.
#[derive(Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<BinaryNode<T>>,
    size: usize,
    config: Config,
}

impl<T: Default> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        f.debug_struct("BinaryTree")
            .field("nodes_total", &self.nodes.len())
            .field("leaves", &leaves)
            .field("size", &self.size)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T> BinaryTree<T> {
    /// Id of the root node.
    pub const ROOT: NodeId = 0;

    /// Creates a tree whose root holds `data`, with the default [`Config`].
    pub fn new(data: T) -> Self {
        Self::with_config(data, Config::default())
    }

    pub fn with_config(data: T, config: Config) -> Self {
        Self {
            nodes: vec![BinaryNode::new_root(data)],
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &BinaryNode<T> {
        &self.nodes[Self::ROOT]
    }

    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &BinaryNode<T> {
        &self.nodes[id]
    }

    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut BinaryNode<T> {
        &mut self.nodes[id]
    }

    pub fn get(&self, id: NodeId) -> Option<&BinaryNode<T>> {
        self.nodes.get(id)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Walks the parent back-references from `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, BinaryNode<T>> {
        Ancestors::new(&self.nodes, id)
    }

    /// Returns the child of `id` at `side`, if any. Never allocates.
    pub fn get_node(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.nodes[id].child(side)
    }

    /// Creates a child of `id` at `side` holding `data`.
    ///
    /// An occupied slot is left alone: the first child created at a side
    /// stays there.
    ///
    /// ### Returns
    /// The new child's id, or `None` if the slot was already taken.
    ///
    /// ### Panics
    /// Panics if `id` was not produced by this tree.
    pub fn create_node(&mut self, id: NodeId, side: Side, data: T) -> Option<NodeId> {
        if self.nodes[id].child(side).is_some() {
            return None;
        }
        let child = self.nodes.len();
        self.nodes.push(BinaryNode::new_child(data, id));
        *self.nodes[id].slot_mut(side) = Some(child);
        Some(child)
    }

    /// Preorder walk from `start` that records the maximum depth reached.
    ///
    /// Visits `start`, then its left subtree, then its right subtree. Absent
    /// children are skipped and not counted. The tree's [`size`] is raised to
    /// the walk's `max_depth` if that is larger. Passing `None` visits
    /// nothing and leaves `size` as it was.
    ///
    /// The walk uses the strategy from [`Config::traversal`]; both strategies
    /// give identical results.
    ///
    /// [`size`]: BinaryTree::size
    pub fn traverse_depth_preorder(&mut self, start: Option<NodeId>) -> Preorder {
        let walk = match self.config.traversal {
            Traversal::Recursive => self.preorder_recursive(start),
            Traversal::Iterative => self.preorder_iterative(start),
        };
        self.size = self.size.max(walk.max_depth);
        walk
    }

    /// Largest depth recorded by traversal so far, or 0 if none ran.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Maximum depth below `start` (inclusive). Does not touch [`size`].
    ///
    /// [`size`]: BinaryTree::size
    pub fn depth(&self, start: Option<NodeId>) -> usize {
        self.iter_preorder(start)
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Borrowing preorder iterator yielding `(id, depth)` pairs.
    pub fn iter_preorder(&self, start: Option<NodeId>) -> PreorderIter<'_, T> {
        let mut stack = Vec::with_capacity(self.config.stack_capacity);
        if let Some(id) = start {
            stack.push((id, 1));
        }
        PreorderIter {
            nodes: &self.nodes,
            stack,
        }
    }

    fn preorder_recursive(&self, start: Option<NodeId>) -> Preorder {
        let mut out = Preorder::default();
        self.visit(start, 1, &mut out);
        out
    }

    fn visit(&self, node: Option<NodeId>, depth: usize, out: &mut Preorder) {
        let Some(id) = node else {
            return;
        };
        out.order.push(id);
        out.max_depth = out.max_depth.max(depth);

        let n = &self.nodes[id];
        self.visit(n.left, depth + 1, out);
        self.visit(n.right, depth + 1, out);
    }

    fn preorder_iterative(&self, start: Option<NodeId>) -> Preorder {
        let mut out = Preorder::default();
        for (id, depth) in self.iter_preorder(start) {
            out.order.push(id);
            out.max_depth = out.max_depth.max(depth);
        }
        out
    }
}

impl<T: Default> BinaryTree<T> {
    /// [`BinaryTree::create_node`] with a default-valued payload.
    pub fn create_default_node(&mut self, id: NodeId, side: Side) -> Option<NodeId> {
        self.create_node(id, side, T::default())
    }
}

/// Preorder iterator over a [`BinaryTree`], see [`BinaryTree::iter_preorder`].
#[derive(Debug)]
pub struct PreorderIter<'a, T> {
    nodes: &'a [BinaryNode<T>],
    stack: Vec<(NodeId, usize)>,
}

impl<T> Iterator for PreorderIter<'_, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let n = &self.nodes[id];
        // Right first so the left subtree is popped next.
        if let Some(r) = n.right {
            self.stack.push((r, depth + 1));
        }
        if let Some(l) = n.left {
            self.stack.push((l, depth + 1));
        }
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::rc::Rc;

    const ROOT: NodeId = 0;

    fn recursive() -> Config {
        Config {
            traversal: Traversal::Recursive,
            ..Config::default()
        }
    }

    /// 1 -> (2 -> (4, _), 3)
    fn sample(config: Config) -> BinaryTree<i32> {
        let mut tree = BinaryTree::with_config(1, config);
        let two = tree.create_node(ROOT, Side::Left, 2).unwrap();
        tree.create_node(ROOT, Side::Right, 3).unwrap();
        tree.create_node(two, Side::Left, 4).unwrap();
        tree
    }

    #[test]
    fn preorder_reports_visit_order_and_depth() {
        for config in [Config::default(), recursive()] {
            let mut tree = sample(config);
            assert_eq!(tree.size(), 0);

            let walk = tree.traverse_depth_preorder(Some(ROOT));
            let data: Vec<i32> = walk.order.iter().map(|&id| tree.node(id).data).collect();

            assert_eq!(data, vec![1, 2, 4, 3]);
            assert_eq!(walk.max_depth, 3);
            assert_eq!(tree.size(), 3);
        }
    }

    #[test]
    fn repeated_traversal_is_stable() {
        for config in [Config::default(), recursive()] {
            let mut tree = sample(config);
            let first = tree.traverse_depth_preorder(Some(ROOT));
            for _ in 0..5 {
                assert_eq!(tree.traverse_depth_preorder(Some(ROOT)), first);
            }
            assert_eq!(tree.size(), 3);
        }
    }

    #[test]
    fn size_never_decreases() {
        let mut tree = sample(Config::default());
        tree.traverse_depth_preorder(Some(ROOT));

        // The right child alone has depth 1.
        let right = tree.get_node(ROOT, Side::Right);
        let walk = tree.traverse_depth_preorder(right);
        assert_eq!(walk.max_depth, 1);
        assert_eq!(tree.size(), 3);

        // Growing the tree raises it on the next full pass.
        let four = tree.node(tree.get_node(ROOT, Side::Left).unwrap()).left().unwrap();
        tree.create_node(four, Side::Right, 5).unwrap();
        tree.traverse_depth_preorder(Some(ROOT));
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn traversing_nothing_visits_nothing() {
        let mut tree = sample(recursive());
        let walk = tree.traverse_depth_preorder(None);
        assert_eq!(walk, Preorder::default());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.depth(None), 0);
    }

    #[test]
    fn depth_query_does_not_record_size() {
        let tree = sample(Config::default());
        assert_eq!(tree.depth(Some(ROOT)), 3);
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn first_write_wins() {
        let mut tree = BinaryTree::new("root");
        let x = tree.create_node(ROOT, Side::Left, "x");
        assert!(x.is_some());

        assert_eq!(tree.create_node(ROOT, Side::Left, "y"), None);
        assert_eq!(tree.node(tree.get_node(ROOT, Side::Left).unwrap()).data, "x");
        assert_eq!(tree.get_node(ROOT, Side::Left), x);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn get_node_never_allocates() {
        let tree: BinaryTree<u8> = BinaryTree::default();
        assert_eq!(tree.get_node(ROOT, Side::Left), None);
        assert_eq!(tree.get_node(ROOT, Side::Right), None);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn children_point_back_to_their_creator() {
        let mut tree: BinaryTree<u8> = BinaryTree::default();
        let l = tree.create_default_node(ROOT, Side::Left).unwrap();
        let r = tree.create_default_node(ROOT, Side::Right).unwrap();
        let rl = tree.create_default_node(r, Side::Left).unwrap();

        assert_eq!(tree.parent(l), Some(ROOT));
        assert_eq!(tree.parent(r), Some(ROOT));
        assert_eq!(tree.node(rl).parent(), Some(r));
        assert_eq!(tree.root().parent(), None);
        assert_eq!(tree.node(r).child(Side::Left.opposite()), None);
        assert_eq!(tree.ancestors(rl).collect::<Vec<_>>(), vec![r, ROOT]);
        assert_eq!(tree.node(l).data, 0);
    }

    #[test]
    fn strategies_agree_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..8 {
            let mut tree = BinaryTree::new(0_u32);
            for i in 1..200 {
                let parent = rng.random_range(0..tree.node_count());
                let side = if rng.random_bool(0.5) {
                    Side::Left
                } else {
                    Side::Right
                };
                tree.create_node(parent, side, i);
            }

            let iterative = tree.clone().traverse_depth_preorder(Some(ROOT));
            let mut as_recursive = tree.clone();
            as_recursive.config = recursive();
            let rec_walk = as_recursive.traverse_depth_preorder(Some(ROOT));

            assert_eq!(iterative, rec_walk);
            assert_eq!(iterative.order.len(), tree.node_count());
            assert_eq!(iterative.order[0], ROOT);
        }
    }

    #[test]
    fn deep_chains_traverse_and_drop_without_recursion() {
        const DEPTH: usize = 100_000;
        let mut tree = BinaryTree::new(0_usize);
        let mut tip = ROOT;
        for i in 1..DEPTH {
            tip = tree.create_node(tip, Side::Left, i).unwrap();
        }

        let walk = tree.traverse_depth_preorder(Some(ROOT));
        assert_eq!(walk.max_depth, DEPTH);
        assert_eq!(tree.size(), DEPTH);
        assert_eq!(tree.ancestors(tip).count(), DEPTH - 1);
        drop(tree);
    }

    #[test]
    fn dropping_the_tree_releases_every_payload() {
        let token = Rc::new(());
        {
            let mut tree = BinaryTree::new(Rc::clone(&token));
            for side in [Side::Left, Side::Right] {
                let child = tree.create_node(ROOT, side, Rc::clone(&token)).unwrap();
                tree.create_node(child, Side::Left, Rc::clone(&token));
                tree.create_node(child, Side::Right, Rc::clone(&token));
            }
            assert_eq!(Rc::strong_count(&token), 1 + 7);
            tree.traverse_depth_preorder(Some(ROOT));
        }
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn debug_summarizes_without_payload_bound() {
        struct Opaque;
        let mut tree = BinaryTree::new(Opaque);
        tree.create_node(ROOT, Side::Right, Opaque);
        tree.traverse_depth_preorder(Some(ROOT));

        let s = format!("{tree:?}");
        assert!(s.contains("nodes_total: 2"));
        assert!(s.contains("size: 2"));
    }

    #[test]
    #[should_panic]
    fn unknown_ids_panic() {
        let mut tree = BinaryTree::new(1);
        tree.create_node(5, Side::Left, 2);
    }
}
