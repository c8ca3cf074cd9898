//! Filepath: src/tree.rs
//!
//! The B+ tree controller: construction, point lookup, and upsert-insert.
//!
//! [`BPlusTree`] owns the node arena and the root handle. All public
//! operations restore every structural invariant before returning: uniform
//! leaf depth, bounded fanout, strictly ascending unique keys, and correct
//! separator ranges.
//!
//! Writes take `&mut self` and reads take `&self`; the borrow checker is the
//! concurrency story. Callers that share a tree across threads wrap it in
//! their own lock.

use crate::arena::NodeArena;
use crate::ksearch::{self, KeyPosition};
use crate::leaf::LeafNode;
use crate::node::{Node, NodeId};
use crate::ordering::{Comparator, NaturalOrder};
use crate::tracing_helpers::trace_log;
use std::fmt as StdFmt;

mod split;

/// Smallest accepted branching factor. A tree with branching factor 1 could
/// not hold a single key.
pub const MIN_BRANCHING: usize = 2;

// ============================================================================
//  TreeError
// ============================================================================

/// Errors that can occur when constructing a tree.
///
/// Lookup and insert have no failure modes: a missing key on
/// [`BPlusTree::find`] is `None`, and [`BPlusTree::insert`] never fails for
/// a well-typed key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested branching factor is below [`MIN_BRANCHING`].
    InvalidBranching {
        /// The rejected branching factor.
        got: usize,
    },
}

impl StdFmt::Display for TreeError {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::InvalidBranching { got } => {
                write!(f, "branching factor {got} is below the minimum of {MIN_BRANCHING}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

// ============================================================================
//  BPlusTree
// ============================================================================

/// An in-memory B+ tree mapping unique keys to values.
///
/// All values reside in leaves at uniform depth; internal nodes hold routing
/// separators only. Growth is split-only: an overflowing node divides in two
/// and propagates a separator upward, so height increases by at most one per
/// insert and every leaf stays at the same depth.
///
/// # Type Parameters
/// * `K` - Key type. Needs [`Clone`] for writes (leaf separators are copied
///   into parents) and a total order via the comparator.
/// * `V` - Value type, unconstrained.
/// * `C` - The [`Comparator`] capability. Defaults to [`NaturalOrder`].
///
/// # Example
///
/// ```rust
/// use bptree::BPlusTree;
///
/// let mut tree: BPlusTree<u64, &str> = BPlusTree::new(3);
/// tree.insert(1, "one");
/// tree.insert(2, "two");
///
/// assert_eq!(tree.find(&1), Some(&"one"));
/// assert_eq!(tree.find(&9), None);
/// ```
#[derive(Debug, Clone)]
pub struct BPlusTree<K, V, C = NaturalOrder> {
    /// Node storage. The arena plus `root` own the whole structure.
    arena: NodeArena<K, V>,

    /// Handle of the root node. A leaf until the first root split.
    root: NodeId,

    /// Maximum number of children an internode may hold; leaves hold at
    /// most `branching - 1` entries.
    branching: usize,

    /// Injected key ordering.
    comparator: C,

    /// Number of keys currently stored.
    len: usize,

    /// Distance from root to leaves, counting both ends (1 = root is a
    /// leaf). Grows only when a split reaches the root and creates a new
    /// one.
    height: usize,
}

impl<K, V> BPlusTree<K, V, NaturalOrder> {
    /// Create a tree ordered by the keys' natural [`Ord`].
    ///
    /// # Panics
    ///
    /// Panics if `branching < 2`. Use [`try_new`](Self::try_new) for a
    /// non-panicking variant.
    #[must_use]
    pub fn new(branching: usize) -> Self {
        assert!(
            branching >= MIN_BRANCHING,
            "branching factor {branching} is below the minimum of {MIN_BRANCHING}"
        );

        Self::build(branching, NaturalOrder)
    }

    /// Create a tree ordered by the keys' natural [`Ord`], rejecting an
    /// invalid branching factor.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidBranching`] if `branching < 2`; no
    /// partially-constructed tree exists in that case.
    pub fn try_new(branching: usize) -> Result<Self, TreeError> {
        if branching < MIN_BRANCHING {
            return Err(TreeError::InvalidBranching { got: branching });
        }

        Ok(Self::build(branching, NaturalOrder))
    }
}

impl<K, V, C: Comparator<K>> BPlusTree<K, V, C> {
    /// Create a tree with an injected key ordering.
    ///
    /// The comparator must be a valid total order; see
    /// [`Comparator`](crate::ordering::Comparator) for the contract.
    ///
    /// # Panics
    ///
    /// Panics if `branching < 2`.
    #[must_use]
    pub fn with_comparator(branching: usize, comparator: C) -> Self {
        assert!(
            branching >= MIN_BRANCHING,
            "branching factor {branching} is below the minimum of {MIN_BRANCHING}"
        );

        Self::build(branching, comparator)
    }

    /// Create a tree with an injected key ordering, rejecting an invalid
    /// branching factor.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidBranching`] if `branching < 2`.
    pub fn try_with_comparator(branching: usize, comparator: C) -> Result<Self, TreeError> {
        if branching < MIN_BRANCHING {
            return Err(TreeError::InvalidBranching { got: branching });
        }

        Ok(Self::build(branching, comparator))
    }

    // ========================================================================
    //  Lookup
    // ========================================================================

    /// Look up the value stored for `key`.
    ///
    /// Absence is a normal outcome, not an error: a key that was never
    /// inserted yields `None`.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&V> {
        let leaf_id = self.find_leaf(key);
        let leaf = self.arena.node(leaf_id).leaf();

        let pos = self.locate_in_leaf(leaf, key);
        if pos.found {
            Some(leaf.value(pos.index))
        } else {
            None
        }
    }

    /// Descend from the root to the leaf owning `key`.
    ///
    /// Each internode hop resolves the routing index with an upper-bound
    /// search over the separators; termination is structural (ownership is
    /// strictly tree-shaped, so no cycles exist).
    fn find_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;

        loop {
            match self.arena.node(current) {
                Node::Leaf(_) => return current,

                Node::Internode(inode) => {
                    let index = ksearch::upper_bound_by(inode.nkeys(), |i| {
                        self.comparator.compare(key, inode.key(i))
                    });

                    current = inode.child(index);
                }
            }
        }
    }

    /// Locate `key`'s slot (or insertion point) within one leaf.
    fn locate_in_leaf(&self, leaf: &LeafNode<K, V>, key: &K) -> KeyPosition {
        ksearch::lower_bound_by(leaf.len(), |i| self.comparator.compare(key, leaf.key(i)))
    }
}

impl<K, V, C> BPlusTree<K, V, C> {
    /// Allocate the empty root leaf. The only node-creation site outside
    /// the split procedure.
    fn build(branching: usize, comparator: C) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::Leaf(LeafNode::new()));

        Self {
            arena,
            root,
            branching,
            comparator,
            len: 0,
            height: 1,
        }
    }

    // ========================================================================
    //  Accessors
    // ========================================================================

    /// The configured branching factor.
    #[must_use]
    #[inline]
    pub const fn branching(&self) -> usize {
        self.branching
    }

    /// Number of keys stored.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tree height: 1 while the root is a leaf, growing by one per root
    /// split.
    #[must_use]
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    // ========================================================================
    //  Read-only traversal interface
    // ========================================================================

    /// Handle of the root node.
    ///
    /// Together with [`node`](Self::node) this forms the read-only
    /// enumeration interface consumed by external renderers: node kind,
    /// ordered entries, and child handles.
    #[must_use]
    #[inline]
    pub const fn root_id(&self) -> NodeId {
        self.root
    }

    /// Read-only view of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not obtained from this tree.
    #[must_use]
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        self.arena.node(id)
    }
}

impl<K: Clone, V, C: Comparator<K>> BPlusTree<K, V, C> {
    // ========================================================================
    //  Upsert
    // ========================================================================

    /// Insert `key` with `value`, or overwrite the value in place if the
    /// key already exists.
    ///
    /// Upsert is the only write primitive; it never fails. A fresh insert
    /// that overfills the target leaf triggers a split, which may cascade
    /// up to the root and grow the tree by one level.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn insert(&mut self, key: K, value: V) {
        let leaf_id = self.find_leaf(&key);

        let pos = {
            let leaf = self.arena.node(leaf_id).leaf();
            self.locate_in_leaf(leaf, &key)
        };

        let leaf = self.arena.node_mut(leaf_id).leaf_mut();
        if pos.found {
            *leaf.value_mut(pos.index) = value;
            trace_log!(index = pos.index, "insert: overwrote existing key in place");
            return;
        }

        leaf.insert_entry(pos.index, key, value);
        self.len += 1;

        // Overflow by exactly one entry; split restores the bound.
        let overflow = leaf.len() > self.branching - 1;
        if overflow {
            self.split(leaf_id);
        }
    }
}

// ============================================================================
//  Tests
// ============================================================================
