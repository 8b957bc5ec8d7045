//! Error types for directory scanning

use std::path::{Path, PathBuf};

use snafu::Snafu;

/// Errors produced while scanning a directory tree.
///
/// `NotADirectory` and `RootMetadata` are precondition failures on the root
/// path; `ReadDir` and `Metadata` are I/O failures on entries below it.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ScanError {
    #[snafu(display("Can't make file tree from a file: {}", path.display()))]
    NotADirectory { path: PathBuf },
    #[snafu(display("cannot access '{}'", path.display()))]
    RootMetadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to read directory '{}'", path.display()))]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to read metadata of '{}'", path.display()))]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ScanError {
    /// True when the root path itself is unusable.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ScanError::NotADirectory { .. } | ScanError::RootMetadata { .. }
        )
    }

    /// The path the failing lookup was made on.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotADirectory { path }
            | ScanError::RootMetadata { path, .. }
            | ScanError::ReadDir { path, .. }
            | ScanError::Metadata { path, .. } => path,
        }
    }
}
