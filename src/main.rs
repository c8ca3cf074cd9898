//! Demo driver: build a small tree and print it.
//!
//! Inserts nine keys into a branching-3 tree in a deliberately shuffled
//! order, looks every key up (plus one miss), and renders the resulting
//! shape.
//!
//! Run with:
//! ```bash
//! cargo run
//!
//! # With instrumentation
//! RUST_LOG=bptree=trace cargo run --features tracing
//! ```

use bptree::{render, BPlusTree};
use std::io;

fn main() -> io::Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let mut tree: BPlusTree<u64, String> = BPlusTree::new(3);

    let entries = [
        (9u64, "nine"),
        (8, "eight"),
        (3, "three"),
        (2, "two"),
        (1, "one"),
        (7, "seven"),
        (6, "six"),
        (5, "five"),
        (4, "four"),
    ];

    for (key, name) in entries {
        tree.insert(key, name.to_string());
    }

    for key in 1..=9u64 {
        match tree.find(&key) {
            Some(value) => println!("{key} -> {value}"),
            None => println!("{key} -> (not found)"),
        }
    }

    match tree.find(&100) {
        Some(value) => println!("100 -> {value}"),
        None => println!("100 -> (not found)"),
    }

    println!();
    println!(
        "tree: {} keys, height {}, branching {}",
        tree.len(),
        tree.height(),
        tree.branching()
    );
    render::write_tree(&tree, &mut io::stdout().lock())?;

    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .init();
}
