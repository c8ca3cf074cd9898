//! Internode (internal node): separator keys and child routing.
//!
//! Internodes route traversals through the tree. They contain only keys and
//! child handles, no values.
//!
//! # Routing model
//!
//! ```text
//!         [K0 | K1 | K2]           <- Internode (3 keys, 4 children)
//!        /    |    |    \
//!    C0     C1    C2     C3        <- Children
//!
//!    C0: keys < K0
//!    C1: keys >= K0 and < K1
//!    C2: keys >= K1 and < K2
//!    C3: keys >= K2
//! ```
//!
//! The final child slot is the unbounded tail: it covers every key at or
//! above the last separator.
//!
//! # Invariants
//!
//! - `children.len() == keys.len() + 1`
//! - Keys are strictly ascending under the tree's comparator.
//! - `child(i)` owns exactly the keys in `[key(i-1), key(i))`, with the
//!   first range open below and the last open above.
//! - An internode holds at least 2 children (guaranteed for branching >= 3;
//!   the degenerate branching = 2 tree can split down to a single child).

use crate::node::NodeId;

/// An internal routing node.
#[derive(Debug, Clone)]
pub struct Internode<K> {
    /// Non-owning back-reference, used only to climb during split
    /// propagation. `None` for the root.
    parent: Option<NodeId>,

    /// Separator keys, strictly ascending. One fewer than children.
    keys: Vec<K>,

    /// Child handles. `children[i]` covers `[keys[i-1], keys[i])`.
    children: Vec<NodeId>,
}

impl<K> Internode<K> {
    /// Assemble an internode from already-ordered parts.
    pub(crate) const fn from_parts(
        parent: Option<NodeId>,
        keys: Vec<K>,
        children: Vec<NodeId>,
    ) -> Self {
        Self {
            parent,
            keys,
            children,
        }
    }

    /// Number of separator keys.
    #[must_use]
    #[inline]
    pub fn nkeys(&self) -> usize {
        self.keys.len()
    }

    /// Number of children (always `nkeys() + 1`).
    #[must_use]
    #[inline]
    pub fn nchildren(&self) -> usize {
        self.children.len()
    }

    /// The separator key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= nkeys()`.
    #[must_use]
    #[inline]
    pub fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    /// The child handle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= nchildren()`.
    #[must_use]
    #[inline]
    pub fn child(&self, index: usize) -> NodeId {
        self.children[index]
    }

    /// All separator keys, in ascending order.
    #[must_use]
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// All child handles, in routing order.
    #[must_use]
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The parent back-reference, if any.
    #[must_use]
    #[inline]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Install a new routing entry after a child split.
    ///
    /// `index` is the routing slot of the child that split (the left half
    /// stays at `children[index]`). The separator is inserted at
    /// `keys[index]` and the right half becomes `children[index + 1]`.
    pub(crate) fn insert_route(&mut self, index: usize, separator: K, right: NodeId) {
        self.keys.insert(index, separator);
        self.children.insert(index + 1, right);
    }

    /// Split this internode for an overflow, promoting the separator at
    /// `mid` out of both halves.
    ///
    /// This node retains `keys[..mid]` / `children[..=mid]`. Returns the
    /// promoted separator together with the sibling's keys and children
    /// (`keys[mid+1..]` / `children[mid+1..]`). No key is duplicated: the
    /// promoted separator moves to the parent as a routing key only.
    pub(crate) fn split_routes(&mut self, mid: usize) -> (K, Vec<K>, Vec<NodeId>) {
        let mut right_keys = self.keys.split_off(mid);
        let promoted = right_keys.remove(0);
        let right_children = self.children.split_off(mid + 1);

        (promoted, right_keys, right_children)
    }
}

// ============================================================================
//  Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: usize) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn insert_route_places_right_sibling_after_left() {
        let mut inode: Internode<u64> =
            Internode::from_parts(None, vec![20, 40], vec![id(0), id(1), id(2)]);

        // Child at slot 1 (covering [20, 40)) split at separator 30.
        inode.insert_route(1, 30, id(9));

        assert_eq!(inode.keys(), &[20, 30, 40]);
        assert_eq!(inode.children(), &[id(0), id(1), id(9), id(2)]);
    }

    #[test]
    fn split_routes_promotes_without_duplication() {
        let mut inode: Internode<u64> = Internode::from_parts(
            None,
            vec![10, 20, 30, 40],
            vec![id(0), id(1), id(2), id(3), id(4)],
        );

        let (promoted, right_keys, right_children) = inode.split_routes(2);

        assert_eq!(promoted, 30);
        assert_eq!(inode.keys(), &[10, 20]);
        assert_eq!(inode.children(), &[id(0), id(1), id(2)]);
        assert_eq!(right_keys, vec![40]);
        assert_eq!(right_children, vec![id(3), id(4)]);
    }
}
