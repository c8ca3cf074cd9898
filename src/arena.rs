//! Arena storage for tree nodes.
//!
//! Nodes live in a flat `Vec` and are addressed by [`NodeId`] indices. This
//! keeps the tree a clean forward-owned structure: the arena (via the tree
//! controller) owns every node, children reference parents by index only,
//! and no reference cycles exist for the host memory model to untangle.
//!
//! The arena only grows. Splits allocate a sibling (and at most one new
//! root); nothing is ever freed, since deletion is out of scope.

use crate::node::{Node, NodeId};

/// Indexed storage owning every node of one tree.
#[derive(Debug, Clone)]
pub struct NodeArena<K, V> {
    nodes: Vec<Node<K, V>>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its handle.
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);

        id
    }

    /// Read-only access to a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    #[must_use]
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes ever created for this tree.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes. Only true before the empty root
    /// leaf is allocated.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ============================================================================
//  Tests
// ============================================================================
