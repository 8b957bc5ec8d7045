//! Configuration types for tree walkers

/// What to do when an entry below the root cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole scan on the first failure.
    #[default]
    FailFast,
    /// Leave the failing entry out, record the error and keep going.
    Skip,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Sort entries by file name instead of keeping directory-listing order.
    pub sort_entries: bool,
    pub error_policy: ErrorPolicy,
    /// Number of parallel workers for sibling traversal.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl ScanConfig {
    /// Sequential, sorted scanning. Handy for reproducible output.
    pub fn deterministic() -> Self {
        Self {
            sort_entries: true,
            parallel_workers: 1,
            ..Default::default()
        }
    }
}
