//! Configuration types for CSV validation.
//!
//! Only the filesystem source is configurable. The validation rules
//! themselves (type vocabulary, date formats, column aliases) are fixed
//! process-wide constants in the `rules` module, not configuration.

use std::path::PathBuf;

/// Filesystem source options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots
/// (e.g. `sample-data/`) are a CLI/wrapper concern, not baked into the
/// library — keeps `plancheck-validator` repo-layout-agnostic.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format).
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// scan root and traversing system directories in CI environments.
    /// Only enable if you explicitly trust all symlinks under the roots.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}
