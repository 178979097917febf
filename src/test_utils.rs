//! Test utilities shared by unit, property and Gherkin tests.

use crate::config::TreeConfig;
use crate::tree::{Color, Key, RbTree};

/// Empty tree that validates itself after every mutation.
pub fn verifying_tree() -> RbTree {
    let config = TreeConfig {
        verify_invariants: true,
        ..TreeConfig::default()
    };
    match RbTree::with_config(&config) {
        Ok(tree) => tree,
        Err(e) => panic!("failed to build test tree: {e}"),
    }
}

/// Verifying tree holding `keys`, inserted in order.
pub fn tree_from_keys(keys: &[Key]) -> RbTree {
    let mut tree = verifying_tree();
    for &key in keys {
        if let Err(e) = tree.insert(key) {
            panic!("insert {key} failed: {e}");
        }
    }
    tree
}

/// Pre-order (key, color) pairs. Two trees with equal shapes have equal
/// results.
pub fn shape(tree: &RbTree) -> Vec<(Key, Color)> {
    tree.snapshot()
        .into_iter()
        .map(|view| (view.key, view.color))
        .collect()
}

/// Panic with the violation if `tree` is not a valid red-black tree.
/// Returns the black-height otherwise.
pub fn assert_valid(tree: &RbTree) -> usize {
    match tree.validate() {
        Ok(black_height) => black_height,
        Err(violation) => panic!("invalid tree: {violation}\n{:#?}", tree.snapshot()),
    }
}
