//! Split: divide an overflowing node and propagate a separator upward.
//!
//! This is the invariant-preserving heart of the tree. A node that exceeds
//! capacity (by exactly one entry, since overflow is checked after every
//! single insertion) is partitioned into two at-capacity halves; the parent
//! gains one routing entry; and if that pushes the parent over capacity the
//! procedure repeats one level up. Only the root-split step creates a new
//! root, so tree height grows by at most one per insert and every leaf
//! stays at the same depth.
//!
//! # Key Invariant
//!
//! No entry is lost or duplicated by a split. Every key/value or
//! key/child pair present before is present afterwards in exactly one of
//! the left half, the right half, or (for a promoted internode separator)
//! the parent's routing slots.
//!
//! # Propagation shape
//!
//! The loop ascends parent back-references and terminates at the root:
//!
//! ```text
//!   split(leaf)                 leaf    -> [left | sep | right]
//!   parent gains (sep, right)   parent  -> overflow? split(parent)
//!   ...                         ...        (strictly ascending)
//!   no parent                   allocate new root [left | sep | right]
//! ```
//!
//! Parent back-references of every node created or relocated here are
//! retargeted before the procedure returns; a stale back-reference would
//! corrupt a later split even though lookups never consult it.

use crate::internode::Internode;
use crate::ksearch;
use crate::leaf::LeafNode;
use crate::node::{Node, NodeId};
use crate::ordering::Comparator;
use crate::tracing_helpers::debug_log;

use super::BPlusTree;

impl<K: Clone, V, C: Comparator<K>> BPlusTree<K, V, C> {
    /// Split an overflowing node and restore all fanout bounds.
    ///
    /// Precondition: `node` holds exactly one entry more than its capacity
    /// allows (`branching - 1` entries for a leaf, `branching` children for
    /// an internode).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub(crate) fn split(&mut self, node: NodeId) {
        let (separator, right) = if self.node(node).is_leaf() {
            self.split_leaf(node)
        } else {
            self.split_internode(node)
        };

        self.check_split_halves(node, right);
        self.propagate(node, separator, right);
    }

    /// Partition a leaf's entries at the midpoint.
    ///
    /// The leaf retains the lower half; the upper half moves to a fresh
    /// sibling. The promoted separator is a copy of the sibling's smallest
    /// key, so "keys >= separator" correctly routes right.
    fn split_leaf(&mut self, id: NodeId) -> (K, NodeId) {
        let (parent, right_keys, right_values) = {
            let leaf = self.arena.node_mut(id).leaf_mut();
            let mid = leaf.len() / 2;
            let (keys, values) = leaf.split_entries(mid);

            (leaf.parent(), keys, values)
        };

        let separator = right_keys[0].clone();
        let right = self
            .arena
            .alloc(Node::Leaf(LeafNode::from_parts(parent, right_keys, right_values)));

        debug_log!(left = ?id, right = ?right, "split: divided leaf");

        (separator, right)
    }

    /// Partition an internode's routing entries, promoting the midpoint
    /// separator out of both halves.
    ///
    /// The child that sat to the right of the promoted separator becomes
    /// the sibling's first (unbounded-below) child. Every child moved to
    /// the sibling has its parent back-reference retargeted here, before
    /// the split returns.
    fn split_internode(&mut self, id: NodeId) -> (K, NodeId) {
        let (parent, promoted, right_keys, right_children) = {
            let inode = self.arena.node_mut(id).internode_mut();
            let mid = inode.nkeys() / 2;
            let (promoted, keys, children) = inode.split_routes(mid);

            (inode.parent(), promoted, keys, children)
        };

        let moved = right_children.clone();
        let right = self
            .arena
            .alloc(Node::Internode(Internode::from_parts(parent, right_keys, right_children)));

        // Moved children now answer to the sibling.
        for child in moved {
            self.arena.node_mut(child).set_parent(Some(right));
        }

        debug_log!(left = ?id, right = ?right, "split: divided internode");

        (promoted, right)
    }

    /// Install `(separator, right)` into ancestors, splitting further as
    /// needed.
    ///
    /// Terminates because each iteration strictly ascends the parent chain
    /// and the root has no parent.
    fn propagate(&mut self, mut left: NodeId, mut separator: K, mut right: NodeId) {
        loop {
            let Some(parent) = self.node(left).parent() else {
                self.grow_root(left, separator, right);
                return;
            };

            let index = {
                let inode = self.node(parent).internode();
                ksearch::upper_bound_by(inode.nkeys(), |i| {
                    self.comparator.compare(&separator, inode.key(i))
                })
            };

            {
                let inode = self.arena.node_mut(parent).internode_mut();
                debug_assert_eq!(
                    inode.child(index),
                    left,
                    "routing slot for the separator must hold the split node"
                );
                inode.insert_route(index, separator, right);
            }
            self.arena.node_mut(right).set_parent(Some(parent));

            if self.node(parent).internode().nchildren() <= self.branching {
                return;
            }

            let (promoted, new_right) = self.split_internode(parent);
            self.check_split_halves(parent, new_right);

            left = parent;
            separator = promoted;
            right = new_right;
        }
    }

    /// Grow the tree by one level: a fresh root internode with the two
    /// halves as its only children. The single way height increases.
    fn grow_root(&mut self, left: NodeId, separator: K, right: NodeId) {
        let new_root = self.arena.alloc(Node::Internode(Internode::from_parts(
            None,
            vec![separator],
            vec![left, right],
        )));

        self.arena.node_mut(left).set_parent(Some(new_root));
        self.arena.node_mut(right).set_parent(Some(new_root));
        self.root = new_root;
        self.height += 1;

        debug_log!(root = ?new_root, height = self.height, "split: grew new root");
    }

    /// Debug-build bounds check on both halves of a completed split.
    ///
    /// The >= 2 children floor cannot hold for branching = 2 (splitting a
    /// 3-child internode leaves one side with a single child), so it is
    /// asserted only from branching 3 up. Routing stays correct either way.
    fn check_split_halves(&self, left: NodeId, right: NodeId) {
        if cfg!(debug_assertions) {
            for id in [left, right] {
                match self.node(id) {
                    Node::Leaf(leaf) => {
                        assert!(
                            (1..self.branching).contains(&leaf.len()),
                            "leaf fanout out of bounds after split: {} entries",
                            leaf.len()
                        );
                    }

                    Node::Internode(inode) => {
                        assert_eq!(
                            inode.nchildren(),
                            inode.nkeys() + 1,
                            "internode child/key arity broken after split"
                        );
                        assert!(
                            inode.nchildren() <= self.branching,
                            "internode fanout above branching after split: {} children",
                            inode.nchildren()
                        );
                        assert!(
                            self.branching < 3 || inode.nchildren() >= 2,
                            "internode below minimum fanout after split"
                        );
                    }
                }
            }
        }
    }
}

// ============================================================================
//  Tests
// ============================================================================
