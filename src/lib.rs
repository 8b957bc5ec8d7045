//! filetree - recursive directory snapshots
//!
//! Scan a directory once into an immutable [`Dir`], then project it as
//! indented text ([`render`]), a flat list of leaves ([`flatten`]) or a file
//! count ([`count_files`]).

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::ScanError;
pub use output::{RenderOptions, TextFormatter, flatten, print_flat_json, print_json, render};
pub use stats::{TreeStats, count_files, print_stats, print_stats_json};
pub use tree::{
    Dir, ErrorPolicy, File, Item, ItemType, Leaf, Scan, ScanConfig, Tree, TreeWalker, UnknownItem,
};
