//! Tree projections and display
//!
//! - `config` - Render options
//! - `text` - Indented text rendering and colored console output
//! - `flat` - Flattening a tree into its leaves
//! - `json` - JSON output

mod config;
mod flat;
mod json;
mod text;

// Re-export public types and functions
pub use config::RenderOptions;
pub use flat::flatten;
pub use json::{print_flat_json, print_json, tree_to_json};
pub use text::{TextFormatter, render};
