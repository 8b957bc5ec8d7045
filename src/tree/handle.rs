//! `Tree` - a root path bound to a scan configuration

use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::output::{RenderOptions, flatten, render};
use crate::stats::count_files;

use super::config::ScanConfig;
use super::item::{Dir, Item};
use super::walker::{Scan, TreeWalker};

/// A directory tree rooted at a fixed path.
///
/// Every call rescans the filesystem. To project the same snapshot several
/// ways, call [`Tree::scan`] once and use the free functions in
/// [`crate::output`] and [`crate::stats`] on the result.
#[derive(Debug, Clone)]
pub struct Tree {
    path: PathBuf,
    config: ScanConfig,
}

impl Tree {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the tree, keeping entries skipped under [`crate::ErrorPolicy::Skip`].
    pub fn scan_report(&self) -> Result<Scan, ScanError> {
        TreeWalker::new(self.config.clone()).walk(&self.path)
    }

    /// Walk the tree and return its root directory.
    pub fn scan(&self) -> Result<Dir, ScanError> {
        self.scan_report().map(|scan| scan.root)
    }

    /// Object representation of the tree. Same as [`Tree::scan`].
    pub fn to_object(&self) -> Result<Dir, ScanError> {
        self.scan()
    }

    /// Scan, then render as indented text.
    pub fn render(&self, options: &RenderOptions) -> Result<String, ScanError> {
        Ok(render(&self.scan()?, options))
    }

    /// Scan, then return every file and unknown item in traversal order.
    pub fn flatten(&self) -> Result<Vec<Item>, ScanError> {
        let root = self.scan()?;
        Ok(flatten(&root).iter().map(|leaf| leaf.to_item()).collect())
    }

    /// Number of files in an already scanned tree. Does not touch the filesystem.
    pub fn count_files(root: &Dir) -> usize {
        count_files(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ItemType;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        fs::write(dir.path().join("b"), "abc").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.txt"), "hi").unwrap();
        dir
    }

    #[test]
    fn test_sample_scenario() {
        let dir = sample();
        let tree = Tree::new(dir.path()).with_config(ScanConfig::deterministic());

        let root = tree.to_object().unwrap();
        assert_eq!(root.size, 10);
        assert_eq!(Tree::count_files(&root), 3);

        let flat = tree.flatten().unwrap();
        let names: Vec<&str> = flat.iter().map(Item::name).collect();
        assert_eq!(names, vec!["a.txt", "b", "c.txt"]);
        assert!(flat.iter().all(|i| i.item_type() == ItemType::File));

        let text = tree
            .render(&RenderOptions {
                indent_size: 4,
                bullet: "* ".to_string(),
                ..Default::default()
            })
            .unwrap();
        let p = dir.path().display();
        let expected = format!(
            "* {p}\n    * {p}/a.txt\n    * {p}/b\n    * {p}/sub\n        * {p}/sub/c.txt"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_path_is_kept_as_given() {
        let dir = sample();
        let given = dir.path().join(".").join("sub").join("..");
        let tree = Tree::new(&given);
        assert_eq!(tree.path(), given.as_path());
        assert_eq!(tree.scan().unwrap().path, dir.path());
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let dir = sample();
        let tree = Tree::new(dir.path()).with_config(ScanConfig::deterministic());
        assert_eq!(tree.scan().unwrap(), tree.scan().unwrap());
    }

    #[test]
    fn test_scan_reflects_changes() {
        let dir = sample();
        let tree = Tree::new(dir.path());
        let before = tree.scan().unwrap();
        fs::write(dir.path().join("d.txt"), "1234").unwrap();
        let after = tree.scan().unwrap();
        assert_eq!(after.size, before.size + 4);
    }

    #[test]
    fn test_operations_fail_on_file_root() {
        let dir = sample();
        let tree = Tree::new(dir.path().join("a.txt"));
        assert!(tree.scan().unwrap_err().is_precondition());
        assert!(tree.render(&RenderOptions::default()).is_err());
        assert!(tree.flatten().is_err());
    }
}
