//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::{Dir, Leaf};

fn to_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

/// Tree as pretty-printed JSON. The root carries `"type": "dir"` like every
/// nested directory.
pub fn tree_to_json(root: &Dir) -> io::Result<String> {
    to_json(&TaggedDir { kind: "dir", dir: root })
}

/// Print tree as pretty-printed JSON to stdout.
pub fn print_json(root: &Dir) -> io::Result<()> {
    println!("{}", tree_to_json(root)?);
    Ok(())
}

/// Print a flattened tree as a pretty-printed JSON array to stdout.
pub fn print_flat_json(leaves: &[Leaf<'_>]) -> io::Result<()> {
    println!("{}", to_json(leaves)?);
    Ok(())
}

#[derive(Serialize)]
struct TaggedDir<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    dir: &'a Dir,
}
