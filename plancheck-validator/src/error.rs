//! Error types for CSV validation.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of scan-level failure that prevented a file from being validated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The resolved path is outside the scan root (symlink escape).
    OutsideRoot,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A scan-level error: a file that could not be validated at all.
///
/// These are distinct from [`RowError`] (a problem found *inside* a file
/// that was read successfully). A `ScanError` means the file never reached
/// the row checks — callers must treat these as failures, not skips.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// A single validation error found in a CSV file.
///
/// Row-scoped errors carry the 1-based line number (the header occupies
/// line 1, so the first data row is 2). File-level errors, i.e. a missing
/// header line or a malformed record that aborted the scan, use `row` 0
/// and an empty `column`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct RowError {
    /// 1-based line number; 0 for file-level errors.
    pub row: usize,
    /// Header name of the offending column; empty for file-level errors.
    pub column: String,
    /// The offending value as it appeared in the file; empty for
    /// file-level errors.
    pub value: String,
    /// Human-readable error description.
    pub message: String,
}

impl RowError {
    /// A type value outside the accepted vocabulary. `value` is the
    /// trimmed, lowercased cell content.
    #[must_use]
    pub fn invalid_type(row: usize, column: &str, value: &str) -> Self {
        Self {
            row,
            column: column.to_owned(),
            value: value.to_owned(),
            message: format!(
                "Row {row}: Invalid type '{value}' (must be task/milestone/release/meeting)"
            ),
        }
    }

    /// A non-empty value in a date column that matched none of the
    /// accepted formats. `value` is the raw cell content.
    #[must_use]
    pub fn invalid_date(row: usize, column: &str, value: &str) -> Self {
        Self {
            row,
            column: column.to_owned(),
            value: value.to_owned(),
            message: format!("Row {row}: Invalid date format '{value}' in column '{column}'"),
        }
    }

    /// The file has no header line; no row scan was attempted.
    #[must_use]
    pub fn no_headers() -> Self {
        Self {
            row: 0,
            column: String::new(),
            value: String::new(),
            message: "No headers found".to_owned(),
        }
    }

    /// A malformed record raised by the CSV parser. Aborts the remaining
    /// scan of the file it occurred in.
    #[must_use]
    pub fn parse_failure(err: &csv::Error) -> Self {
        Self {
            row: 0,
            column: String::new(),
            value: String::new(),
            message: format!("CSV parsing error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_message() {
        let err = RowError::invalid_type(2, "type", "sprint");
        assert_eq!(
            err.message,
            "Row 2: Invalid type 'sprint' (must be task/milestone/release/meeting)"
        );
        assert_eq!(err.row, 2);
        assert_eq!(err.column, "type");
    }

    #[test]
    fn test_invalid_date_message_names_the_checked_alias() {
        let err = RowError::invalid_date(5, "Due Date", "13/45/2025");
        assert_eq!(
            err.message,
            "Row 5: Invalid date format '13/45/2025' in column 'Due Date'"
        );
        assert_eq!(err.value, "13/45/2025");
    }

    #[test]
    fn test_no_headers_is_file_level() {
        let err = RowError::no_headers();
        assert_eq!(err.message, "No headers found");
        assert_eq!(err.row, 0);
        assert!(err.column.is_empty());
    }

    #[test]
    fn test_scan_error_format() {
        let err = ScanError {
            file: PathBuf::from("data/tasks.csv"),
            kind: ScanErrorKind::FileTooLarge,
            message: "File exceeds maximum size of 10 bytes".to_owned(),
        };
        let formatted = err.format_human_readable();
        assert!(formatted.contains("data/tasks.csv"));
        assert!(formatted.contains("[scan error]"));
        assert!(formatted.contains("exceeds maximum size"));
    }
}
