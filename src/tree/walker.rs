//! TreeWalker - builds the full tree in memory

use std::fs::{self, DirEntry};
use std::path::Path;

use rayon::prelude::*;
use snafu::{ResultExt, ensure};
use tracing::{debug, warn};

use crate::error::{
    MetadataSnafu, NotADirectorySnafu, ReadDirSnafu, RootMetadataSnafu, ScanError,
};

use super::config::{ErrorPolicy, ScanConfig};
use super::item::{Dir, File, Item, UnknownItem};
use super::utils::{base_name, extension_of, join_path, normalize_path};

/// Result of a completed walk.
#[derive(Debug)]
pub struct Scan {
    pub root: Dir,
    /// Entries left out under [`ErrorPolicy::Skip`]. Always empty under fail-fast.
    pub skipped: Vec<ScanError>,
}

/// Subtree (if any) produced for one directory entry, plus the errors swallowed below it.
type EntryOutcome = (Option<Item>, Vec<ScanError>);

/// Tree walker that builds the full tree in memory.
///
/// Siblings are walked with rayon and joined before the parent's size is summed.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root`, which must resolve to a directory.
    pub fn walk(&self, root: &Path) -> Result<Scan, ScanError> {
        let meta = fs::metadata(root).context(RootMetadataSnafu { path: root })?;
        ensure!(meta.is_dir(), NotADirectorySnafu { path: root });

        let path = normalize_path(root);
        debug!("Scanning {}", path.display());

        let (items, skipped) = match self.config.parallel_workers {
            0 | 1 => self.walk_children(&path)?,
            workers => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(|| self.walk_children(&path))?,
                Err(e) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    debug!("Could not build a {workers}-thread pool ({e}), using the global pool");
                    self.walk_children(&path)?
                }
            },
        };

        let root = Dir::new(path, base_name(root), items);
        debug!(
            "Scanned {}: {} bytes, {} skipped entries",
            root.path.display(),
            root.size,
            skipped.len()
        );
        Ok(Scan { root, skipped })
    }

    /// List and classify every entry of `dir`, recursing into subdirectories.
    fn walk_children(&self, dir: &Path) -> Result<(Vec<Item>, Vec<ScanError>), ScanError> {
        let mut entries = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
            .context(ReadDirSnafu { path: dir })?;

        if self.config.sort_entries {
            entries.sort_by_key(|a| a.file_name());
        }

        let outcomes: Vec<EntryOutcome> = if self.config.parallel_workers == 1 {
            entries
                .iter()
                .map(|entry| self.walk_entry(dir, entry))
                .collect::<Result<_, _>>()?
        } else {
            entries
                .par_iter()
                .map(|entry| self.walk_entry(dir, entry))
                .collect::<Result<_, _>>()?
        };

        let mut items = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for (item, errors) in outcomes {
            items.extend(item);
            skipped.extend(errors);
        }
        Ok((items, skipped))
    }

    fn walk_entry(&self, parent: &Path, entry: &DirEntry) -> Result<EntryOutcome, ScanError> {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = join_path(parent, &entry.file_name());

        let file_type = match entry.file_type().context(MetadataSnafu { path: &path }) {
            Ok(t) => t,
            Err(e) => return self.recover(e),
        };

        if file_type.is_dir() {
            match self.walk_children(&path) {
                Ok((items, skipped)) => Ok((Some(Item::Dir(Dir::new(path, name, items))), skipped)),
                Err(e) => self.recover(e),
            }
        } else if file_type.is_file() {
            match entry.metadata().context(MetadataSnafu { path: &path }) {
                Ok(meta) => {
                    let ext = extension_of(&name);
                    Ok((
                        Some(Item::File(File {
                            path,
                            name,
                            ext,
                            size: meta.len(),
                        })),
                        Vec::new(),
                    ))
                }
                Err(e) => self.recover(e),
            }
        } else {
            Ok((Some(Item::Unknown(UnknownItem { path, name })), Vec::new()))
        }
    }

    /// Apply the error policy to an entry-level failure.
    fn recover(&self, error: ScanError) -> Result<EntryOutcome, ScanError> {
        match self.config.error_policy {
            ErrorPolicy::FailFast => Err(error),
            ErrorPolicy::Skip => {
                warn!("Skipping {}: {}", error.path().display(), error);
                Ok((None, vec![error]))
            }
        }
    }
}
