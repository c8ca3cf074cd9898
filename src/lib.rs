//! # `bptree`
//!
//! An in-memory B+ tree index with pluggable key ordering.
//!
//! All values live in leaves at uniform depth; internal nodes hold routing
//! separators only. Growth is split-only: an overflowing node divides in
//! two and promotes a separator upward, cascading to the root at most once
//! per insert. Lookup and insert are `O(log n)` with binary search inside
//! each node.
//!
//! | Feature | Status |
//! |---------|--------|
//! | Point lookup (`find`) | Works |
//! | Upsert insert | Works (overwrites in place on existing key) |
//! | Split propagation | Works (leaf and internode, promotion without duplication) |
//! | Custom key ordering | Works (injected [`Comparator`]) |
//! | Diagnostic rendering | Works ([`render::write_tree`]) |
//! | Deletion / merge on underflow | Not implemented |
//! | Range scans | Not implemented |
//!
//! ## Thread Safety
//!
//! The tree is fully synchronous and single-threaded: [`BPlusTree::insert`]
//! takes `&mut self` and [`BPlusTree::find`] takes `&self`, so the borrow
//! checker enforces exclusive mutation. Callers sharing a tree across
//! threads must serialize externally (one lock around each public call);
//! the tree provides no internal synchronization.
//!
//! ## Design
//!
//! Nodes live in an arena ([`arena::NodeArena`]) and reference each other
//! by index, keeping ownership strictly tree-shaped: the root owns its
//! children transitively, and parent back-references are non-owning handles
//! consulted only while climbing during split propagation.
//!
//! ## Example
//!
//! ```rust
//! use bptree::BPlusTree;
//!
//! let mut tree: BPlusTree<u64, String> = BPlusTree::new(3);
//!
//! tree.insert(2, "two".to_string());
//! tree.insert(1, "one".to_string());
//! tree.insert(1, "uno".to_string()); // upsert overwrites in place
//!
//! assert_eq!(tree.find(&1), Some(&"uno".to_string()));
//! assert_eq!(tree.find(&7), None);
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod arena;
pub mod internode;
pub mod ksearch;
pub mod leaf;
pub mod node;
pub mod ordering;
pub mod render;
pub mod tree;

mod tracing_helpers;

// Re-export main types for convenience
pub use node::{Node, NodeId};
pub use ordering::{Comparator, NaturalOrder};
pub use tree::{BPlusTree, TreeError, MIN_BRANCHING};
