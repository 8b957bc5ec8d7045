//! Directory tree walking logic
//!
//! - `TreeWalker`: walks a directory depth-first and builds the full tree in memory
//! - `Tree`: a root path plus configuration, exposing the scan and its projections

mod config;
mod handle;
mod item;
mod utils;
mod walker;

// Re-export public types
pub use config::{ErrorPolicy, ScanConfig};
pub use handle::Tree;
pub use item::{Dir, File, Item, ItemType, Leaf, UnknownItem};
pub use utils::{base_name, extension_of, format_size, normalize_path};
pub use walker::{Scan, TreeWalker};
