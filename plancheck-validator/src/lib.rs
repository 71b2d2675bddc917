//! # plancheck-validator
//!
//! Structural and semantic validation for CSV data headed into a
//! scheduling tool.
//!
//! The crate separates the **validation engine** (date recognition and
//! per-row checks, pure over in-memory content) from the **filesystem
//! source** (discovery, bounded reads). Files are processed strictly
//! sequentially; one bad file never aborts the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use plancheck_validator::{validate_fs, FsSourceConfig};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("sample-data")];
//! fs_config.exclude = vec!["archive/*".to_owned()];
//!
//! let report = validate_fs(&fs_config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Data rows: {}", report.total_rows());
//! println!("Errors: {}", report.errors_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod date;
mod error;
mod fs;
pub mod output;
mod report;
mod rules;
mod validate;

pub use config::FsSourceConfig;
pub use date::{DateCheck, recognize};
pub use error::{RowError, ScanError, ScanErrorKind};
pub use report::{FileReport, ValidationReport};
pub use validate::{validate_content, validate_file};

/// Validate every CSV file under the configured paths.
///
/// This is the primary public API. Files are discovered, sorted, and
/// validated one at a time; per-file outcomes and scan failures are
/// accumulated into a single [`ValidationReport`].
///
/// # Errors
///
/// Returns an error if `config.paths` is empty or if any provided path
/// does not exist. Returns `Ok` with `scanned_files: 0` if paths exist
/// but contain no CSV files. Scan failures (unreadable files, oversized
/// files, traversal errors) are reported in `report.scan_errors` and
/// never silently discarded.
pub fn validate_fs(config: &FsSourceConfig) -> anyhow::Result<ValidationReport> {
    if config.paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    for path in &config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (csv_files, mut scan_errors) = fs::find_csv_files(config);

    let mut files = Vec::with_capacity(csv_files.len());
    let mut scanned_files: usize = 0;
    // Discovery-stage failures (walk errors, boundary violations) are
    // already in scan_errors from find_csv_files. Count them upfront.
    let mut failed_files: usize = scan_errors.len();

    for file_path in &csv_files {
        tracing::debug!(file = %file_path.display(), "validating");
        match validate::validate_file(file_path, config.max_file_size) {
            Ok(file_report) => {
                scanned_files += 1;
                files.push(file_report);
            }
            Err(scan_err) => {
                scan_errors.push(scan_err);
                failed_files += 1;
            }
        }
    }

    let ok = scan_errors.is_empty() && files.iter().all(FileReport::is_clean);
    Ok(ValidationReport {
        scanned_files,
        failed_files,
        ok,
        files,
        scan_errors,
    })
}
