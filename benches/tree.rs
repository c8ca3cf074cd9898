//! Benchmarks for `BPlusTree` using Divan.
//!
//! Run with: `cargo bench --bench tree`

use bptree::BPlusTree;
use divan::{black_box, Bencher};
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn main() {
    divan::main();
}

/// Deterministic shuffled key set, so runs are comparable.
fn shuffled_keys(n: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    keys.shuffle(&mut rng);
    keys
}

// =============================================================================
// Construction
// =============================================================================

#[divan::bench_group]
mod construction {
    use super::BPlusTree;

    #[divan::bench(args = [3, 8, 32])]
    fn new(branching: usize) -> BPlusTree<u64, u64> {
        BPlusTree::new(branching)
    }
}

// =============================================================================
// Insert Operations
// =============================================================================

#[divan::bench_group]
mod insert {
    use super::{black_box, shuffled_keys, BPlusTree, Bencher};

    #[divan::bench(args = [3, 8, 32])]
    fn ascending_1k(bencher: Bencher, branching: usize) {
        bencher
            .with_inputs(|| BPlusTree::<u64, u64>::new(branching))
            .bench_local_values(|mut tree| {
                for k in 0..1000u64 {
                    tree.insert(black_box(k), black_box(k));
                }
                tree
            });
    }

    #[divan::bench(args = [3, 8, 32])]
    fn shuffled_1k(bencher: Bencher, branching: usize) {
        let keys = shuffled_keys(1000);

        bencher
            .with_inputs(|| BPlusTree::<u64, u64>::new(branching))
            .bench_local_values(|mut tree| {
                for &k in &keys {
                    tree.insert(black_box(k), black_box(k));
                }
                tree
            });
    }

    #[divan::bench]
    fn upsert_existing(bencher: Bencher) {
        bencher
            .with_inputs(|| {
                let mut tree = BPlusTree::<u64, u64>::new(8);
                for k in 0..1000u64 {
                    tree.insert(k, k);
                }
                tree
            })
            .bench_local_values(|mut tree| {
                tree.insert(black_box(500), black_box(999));
                tree
            });
    }
}

// =============================================================================
// Lookup Operations
// =============================================================================

#[divan::bench_group]
mod find {
    use super::{black_box, shuffled_keys, BPlusTree, Bencher};

    fn populated(branching: usize) -> BPlusTree<u64, u64> {
        let mut tree = BPlusTree::new(branching);
        for k in shuffled_keys(10_000) {
            tree.insert(k, k * 2);
        }
        tree
    }

    #[divan::bench(args = [3, 8, 32])]
    fn hit_10k(bencher: Bencher, branching: usize) {
        let tree = populated(branching);

        bencher.bench_local(|| tree.find(black_box(&5000)));
    }

    #[divan::bench(args = [3, 8, 32])]
    fn miss_10k(bencher: Bencher, branching: usize) {
        let tree = populated(branching);

        bencher.bench_local(|| tree.find(black_box(&99_999)));
    }
}
