//! Tree item types produced by a scan

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Discriminant of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Dir,
    File,
    Unknown,
}

/// A regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    pub path: PathBuf,
    pub name: String,
    /// Extension including the leading dot, e.g. `.txt`.
    pub ext: Option<String>,
    pub size: u64,
}

/// A directory and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dir {
    pub path: PathBuf,
    pub name: String,
    /// Sum of the sizes of all File and Dir children.
    pub size: u64,
    pub items: Vec<Item>,
}

/// Anything that is neither a regular file nor a directory
/// (symlinks, sockets, fifos, devices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownItem {
    pub path: PathBuf,
    pub name: String,
}

/// A single entry in the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Dir(Dir),
    File(File),
    Unknown(UnknownItem),
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Dir(_) => ItemType::Dir,
            Item::File(_) => ItemType::File,
            Item::Unknown(_) => ItemType::Unknown,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Item::Dir(d) => &d.path,
            Item::File(f) => &f.path,
            Item::Unknown(u) => &u.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Dir(d) => &d.name,
            Item::File(f) => &f.name,
            Item::Unknown(u) => &u.name,
        }
    }

    /// Size contribution to the parent directory. Unknown items count as 0.
    pub fn size(&self) -> u64 {
        match self {
            Item::Dir(d) => d.size,
            Item::File(f) => f.size,
            Item::Unknown(_) => 0,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Item::Dir(_))
    }
}

impl Dir {
    /// Build a directory node, summing the sizes of its children.
    /// The sum saturates at `u64::MAX` (sparse files can report huge lengths).
    pub fn new(path: PathBuf, name: String, items: Vec<Item>) -> Self {
        let size = items
            .iter()
            .map(Item::size)
            .fold(0u64, |acc, s| acc.saturating_add(s));
        Self {
            path,
            name,
            size,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Element of a flattened tree: a file or an unknown item, never a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Leaf<'a> {
    File(&'a File),
    Unknown(&'a UnknownItem),
}

impl<'a> Leaf<'a> {
    pub fn item_type(&self) -> ItemType {
        match self {
            Leaf::File(_) => ItemType::File,
            Leaf::Unknown(_) => ItemType::Unknown,
        }
    }

    pub fn path(&self) -> &'a Path {
        match self {
            Leaf::File(f) => &f.path,
            Leaf::Unknown(u) => &u.path,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Leaf::File(f) => &f.name,
            Leaf::Unknown(u) => &u.name,
        }
    }

    /// Clone the borrowed leaf into an owned [`Item`].
    pub fn to_item(self) -> Item {
        match self {
            Leaf::File(f) => Item::File(f.clone()),
            Leaf::Unknown(u) => Item::Unknown(u.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> Item {
        Item::File(File {
            path: PathBuf::from(path),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            ext: None,
            size,
        })
    }

    #[test]
    fn test_dir_size_sums_children() {
        let unknown = Item::Unknown(UnknownItem {
            path: PathBuf::from("/r/link"),
            name: "link".to_string(),
        });
        let sub = Dir::new(
            PathBuf::from("/r/sub"),
            "sub".to_string(),
            vec![file("/r/sub/c", 2)],
        );
        let root = Dir::new(
            PathBuf::from("/r"),
            "r".to_string(),
            vec![file("/r/a", 5), unknown, Item::Dir(sub)],
        );
        assert_eq!(root.size, 7);
    }

    #[test]
    fn test_dir_size_saturates_on_overflow() {
        let sub = Dir::new(
            PathBuf::from("/r/sub"),
            "sub".to_string(),
            vec![file("/r/sub/x", u64::MAX), file("/r/sub/y", u64::MAX)],
        );
        assert_eq!(sub.size, u64::MAX);

        let root = Dir::new(
            PathBuf::from("/r"),
            "r".to_string(),
            vec![file("/r/a", u64::MAX - 1), file("/r/b", 1), Item::Dir(sub)],
        );
        assert_eq!(root.size, u64::MAX);
    }

    #[test]
    fn test_item_accessors() {
        let item = file("/r/a.txt", 5);
        assert_eq!(item.item_type(), ItemType::File);
        assert_eq!(item.name(), "a.txt");
        assert_eq!(item.path(), Path::new("/r/a.txt"));
        assert!(!item.is_dir());
    }

    #[test]
    fn test_item_serializes_with_type_tag() {
        let item = Item::File(File {
            path: PathBuf::from("/r/a.txt"),
            name: "a.txt".to_string(),
            ext: Some(".txt".to_string()),
            size: 5,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["ext"], ".txt");
        assert_eq!(json["size"], 5);

        let dir = Item::Dir(Dir::new(PathBuf::from("/r"), "r".to_string(), vec![item]));
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["type"], "dir");
        assert_eq!(json["items"][0]["name"], "a.txt");
    }
}
