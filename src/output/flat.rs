//! Flattening a tree into its leaves

use crate::tree::{Dir, Item, Leaf};

/// Every file and unknown item below `root`, depth-first in traversal order.
/// Directories are descended into but never emitted.
pub fn flatten(root: &Dir) -> Vec<Leaf<'_>> {
    let mut leaves = Vec::new();
    push_leaves(&root.items, &mut leaves);
    leaves
}

fn push_leaves<'a>(items: &'a [Item], leaves: &mut Vec<Leaf<'a>>) {
    for item in items {
        match item {
            Item::Dir(dir) => push_leaves(&dir.items, leaves),
            Item::File(file) => leaves.push(Leaf::File(file)),
            Item::Unknown(unknown) => leaves.push(Leaf::Unknown(unknown)),
        }
    }
}
