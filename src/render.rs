//! Diagnostic tree rendering.
//!
//! Walks a tree through its read-only node view and writes a nested textual
//! listing to any [`io::Write`] sink. Debug-only: the output carries no
//! contract beyond readability and may change shape between versions.
//!
//! Each internode child is labeled with its upper separator (`*` for the
//! unbounded last slot); leaf entries print as `key [value]`:
//!
//! ```text
//! ├── 3
//! │   ├── 1 [one]
//! │   └── 2 [two]
//! └── *
//!     ├── 3 [three]
//!     └── 4 [four]
//! ```

use crate::node::{Node, NodeId};
use crate::tree::BPlusTree;
use std::fmt::Display;
use std::io::{self, Write};

/// Write a nested rendering of the whole tree to `out`.
///
/// # Errors
///
/// Propagates any I/O error from the sink.
pub fn write_tree<K, V, C, W>(tree: &BPlusTree<K, V, C>, out: &mut W) -> io::Result<()>
where
    K: Display,
    V: Display,
    W: Write,
{
    write_node(tree, tree.root_id(), "", out)
}

/// Render one node's children (or entries) under the accumulated `prefix`.
fn write_node<K, V, C, W>(
    tree: &BPlusTree<K, V, C>,
    id: NodeId,
    prefix: &str,
    out: &mut W,
) -> io::Result<()>
where
    K: Display,
    V: Display,
    W: Write,
{
    match tree.node(id) {
        Node::Leaf(leaf) => {
            let last = leaf.len().saturating_sub(1);
            for (i, (key, value)) in leaf.entries().enumerate() {
                let glyph = if i == last { "└── " } else { "├── " };
                writeln!(out, "{prefix}{glyph}{key} [{value}]")?;
            }
        }

        Node::Internode(inode) => {
            let last = inode.nchildren() - 1;
            for i in 0..inode.nchildren() {
                let is_last = i == last;
                let glyph = if is_last { "└── " } else { "├── " };

                // Children are labeled with their upper separator; the
                // final slot is unbounded.
                if is_last {
                    writeln!(out, "{prefix}{glyph}*")?;
                } else {
                    writeln!(out, "{prefix}{glyph}{}", inode.key(i))?;
                }

                let extension = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{prefix}{extension}");
                write_node(tree, inode.child(i), &child_prefix, out)?;
            }
        }
    }

    Ok(())
}

// ============================================================================
//  Tests
// ============================================================================
