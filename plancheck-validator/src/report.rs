//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{RowError, ScanError};

/// Validation outcome for a single CSV file.
///
/// Owned by the caller that requested validation of that file; immutable
/// once returned. `row_count` reflects data rows counted before any abort,
/// so a file whose scan stopped on a parse failure still reports the rows
/// it got through.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileReport {
    /// The file this outcome describes.
    pub file: PathBuf,
    /// Number of data rows scanned (the header line is not counted).
    pub row_count: usize,
    /// Row-scoped and file-level errors, in discovery order.
    pub errors: Vec<RowError>,
    /// Reserved for future use; currently always empty.
    pub warnings: Vec<String>,
}

impl FileReport {
    /// Whether the file produced no errors and no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Result of a validation run over a set of paths.
///
/// Callers must check both `files` and `scan_errors`. A non-empty
/// `scan_errors` means some files were never validated at all; treat
/// this as a failure regardless of the per-file outcomes.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files successfully scanned (read + parsed).
    pub scanned_files: usize,
    /// Number of files that could not be scanned (read failures).
    pub failed_files: usize,
    /// Whether every scanned file is clean AND no scan errors occurred.
    pub ok: bool,
    /// Per-file outcomes, in scan order (paths sorted lexicographically).
    pub files: Vec<FileReport>,
    /// Scan-level errors: files that could not be read at all.
    pub scan_errors: Vec<ScanError>,
}

impl ValidationReport {
    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Total data rows across all scanned files.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.row_count).sum()
    }

    /// Number of validation errors found across all scanned files.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.files.iter().map(|f| f.errors.len()).sum()
    }

    /// Number of warnings across all scanned files.
    #[must_use]
    pub fn warnings_count(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }
}
