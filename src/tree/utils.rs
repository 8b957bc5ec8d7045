//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// Drops `.` components, collapses repeated separators and resolves `..`
/// against a preceding normal component. An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Join an entry name onto an already normalized parent, so that children
/// of `.` come out as `name` rather than `./name`.
pub fn join_path(parent: &Path, name: &OsStr) -> PathBuf {
    if parent == Path::new(".") {
        PathBuf::from(name)
    } else {
        parent.join(name)
    }
}

/// Base name of a path, falling back to the normalized path for `/`, `.` or `..`.
pub fn base_name(path: &Path) -> String {
    let normalized = normalize_path(path);
    match normalized.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().to_string(),
        _ => normalized.display().to_string(),
    }
}

/// Extension of a file name including the leading dot.
///
/// A dot in first position marks a hidden file, not an extension.
pub fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[idx..].to_string()),
        _ => None,
    }
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
