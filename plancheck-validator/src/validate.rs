//! Per-file CSV validation: the type-vocabulary and date-format checks.
//!
//! Each data row is judged independently, with no cross-row state. A row is
//! judged only on columns that exist in the header; absent logical fields
//! are silently skipped.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::date::{self, DateCheck};
use crate::error::{RowError, ScanError};
use crate::fs;
use crate::report::FileReport;
use crate::rules::{DATE_FIELD_GROUPS, TYPE_ALIASES, VALID_TYPES};

/// Validate one CSV file from disk.
///
/// I/O-level failures (unreadable, oversized, non-UTF-8) come back as
/// `ScanError`s; everything found in the content itself lands in the
/// returned [`FileReport`].
///
/// # Errors
///
/// Returns a `ScanError` if the file could not be read at all.
pub fn validate_file(path: &Path, max_file_size: u64) -> Result<FileReport, ScanError> {
    let content = fs::read_file_bounded(path, max_file_size)?;
    Ok(validate_content(&content, path))
}

/// Validate CSV content as a header + rows table.
///
/// Never fails: structural problems (no header line) and mid-file parse
/// failures degrade to errors in the returned report, with `row_count`
/// reflecting the rows counted before any abort.
#[must_use]
pub fn validate_content(content: &str, path: &Path) -> FileReport {
    let mut errors = Vec::new();
    let mut row_count: usize = 0;

    let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = match reader.headers() {
        Ok(h) if !h.is_empty() => h.clone(),
        Ok(_) => {
            errors.push(RowError::no_headers());
            return finish(path, 0, errors);
        }
        Err(e) => {
            errors.push(RowError::parse_failure(&e));
            return finish(path, 0, errors);
        }
    };

    // Data rows are 1-indexed starting at 2: the header occupies line 1.
    for (record_result, row) in reader.records().zip(2usize..) {
        let record = match record_result {
            Ok(r) => r,
            Err(e) => {
                // A malformed record aborts this file's remaining scan;
                // rows counted so far are kept.
                errors.push(RowError::parse_failure(&e));
                break;
            }
        };
        row_count += 1;
        check_type(&headers, &record, row, &mut errors);
        check_dates(&headers, &record, row, &mut errors);
    }

    finish(path, row_count, errors)
}

fn finish(path: &Path, row_count: usize, errors: Vec<RowError>) -> FileReport {
    tracing::debug!(
        file = %path.display(),
        rows = row_count,
        errors = errors.len(),
        "validated"
    );
    FileReport {
        file: path.to_path_buf(),
        row_count,
        errors,
        warnings: Vec::new(),
    }
}

/// Cell value under the header `name`, or `None` when that header is
/// absent from this file.
fn field<'r>(headers: &StringRecord, record: &'r StringRecord, name: &str) -> Option<&'r str> {
    let idx = headers.iter().position(|h| h == name)?;
    Some(record.get(idx).unwrap_or(""))
}

/// First alias from `aliases` that exists as a header, regardless of the
/// value under it. This is deliberately "first match, stop": a later alias
/// is never consulted once an earlier one is present, even with an empty
/// value.
fn first_present_alias<'a>(headers: &StringRecord, aliases: &[&'a str]) -> Option<&'a str> {
    aliases
        .iter()
        .find(|alias| headers.iter().any(|h| h == **alias))
        .copied()
}

/// Type-vocabulary check: trim + lowercase, then membership test. Empty
/// values pass (optional field).
fn check_type(headers: &StringRecord, record: &StringRecord, row: usize, errors: &mut Vec<RowError>) {
    let Some(alias) = first_present_alias(headers, TYPE_ALIASES) else {
        return;
    };
    let value = field(headers, record, alias)
        .unwrap_or("")
        .trim()
        .to_lowercase();
    if !value.is_empty() && !VALID_TYPES.contains(&value.as_str()) {
        errors.push(RowError::invalid_type(row, alias, &value));
    }
}

/// Date-format checks for the three logical date groups. Each group is
/// independent; a failure in one never suppresses checks on another.
fn check_dates(
    headers: &StringRecord,
    record: &StringRecord,
    row: usize,
    errors: &mut Vec<RowError>,
) {
    for group in DATE_FIELD_GROUPS {
        let Some(alias) = first_present_alias(headers, group) else {
            continue;
        };
        let value = field(headers, record, alias).unwrap_or("");
        if value.trim().is_empty() {
            continue;
        }
        if date::recognize(value) == DateCheck::Invalid {
            errors.push(RowError::invalid_date(row, alias, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn validate(content: &str) -> FileReport {
        validate_content(content, &PathBuf::from("test.csv"))
    }

    #[test]
    fn test_clean_file_has_no_errors() {
        let report = validate("type,start_date,end_date\nTask,2025-06-01,2025-06-05\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
        assert!(report.warnings.is_empty());
        assert_eq!(report.row_count, 1);
    }

    #[test]
    fn test_type_check_is_case_insensitive_on_values() {
        let report = validate("type\nMILESTONE\nMeeting\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
        assert_eq!(report.row_count, 2);
    }

    #[test]
    fn test_invalid_type_reports_row_and_lowercased_value() {
        let report = validate("type,name\nSprint,Q3 planning\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Row 2: Invalid type 'sprint' (must be task/milestone/release/meeting)"
        );
    }

    #[test]
    fn test_empty_type_value_is_allowed() {
        let report = validate("type,name\n,unlabelled\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
    }

    #[test]
    fn test_type_header_lookup_is_case_sensitive() {
        // Neither 'type' nor 'Type' is present, so no type check runs.
        let report = validate("TYPE\nsprint\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
    }

    #[test]
    fn test_lowercase_type_header_wins_over_capitalized() {
        // Both spellings present: 'type' is consulted, 'Type' is not.
        let report = validate("type,Type\ntask,sprint\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
    }

    #[test]
    fn test_invalid_date_names_the_exact_column() {
        let report = validate("type,start_date,end_date\nTask,13/45/2025,2025-06-05\n");
        assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
        assert_eq!(
            report.errors[0].message,
            "Row 2: Invalid date format '13/45/2025' in column 'start_date'"
        );
    }

    #[test]
    fn test_first_present_alias_stops_even_when_empty() {
        // start_date is present but empty; 'Start Date' holds garbage.
        // The group must stop at start_date and report nothing.
        let report = validate("start_date,Start Date\n,not a date\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
    }

    #[test]
    fn test_later_alias_is_used_when_earlier_absent() {
        let report = validate("Due Date\n99/99/9999\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Row 2: Invalid date format '99/99/9999' in column 'Due Date'"
        );
    }

    #[test]
    fn test_generic_date_group_is_checked() {
        let report = validate("Date,notes\nyesterday,standup\n");
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("in column 'Date'"));
    }

    #[test]
    fn test_whitespace_date_value_is_valid() {
        let report = validate("start_date\n   \n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
        assert_eq!(report.row_count, 1);
    }

    #[test]
    fn test_row_numbers_start_at_two() {
        let report = validate("type\ntask\nsprint\n");
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.starts_with("Row 3:"));
    }

    #[test]
    fn test_checks_on_one_row_are_independent() {
        // An invalid type must not suppress the date check on the same row.
        let report = validate("type,start_date\nsprint,junk\n");
        assert_eq!(report.errors.len(), 2, "got: {:?}", report.errors);
        assert!(report.errors[0].message.contains("Invalid type"));
        assert!(report.errors[1].message.contains("Invalid date format"));
    }

    #[test]
    fn test_header_only_file_is_clean() {
        let report = validate("type,start_date,end_date\n");
        assert!(report.errors.is_empty());
        assert_eq!(report.row_count, 0);
    }

    #[test]
    fn test_empty_content_reports_no_headers() {
        let report = validate("");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "No headers found");
        assert_eq!(report.row_count, 0);
    }

    #[test]
    fn test_malformed_record_aborts_remaining_scan() {
        // Row 3 has an extra field; row 4's bad date must never be reached.
        let content = "type,start_date\ntask,2025-06-01\nmilestone,2025-06-02,extra\ntask,13/45/2025\n";
        let report = validate(content);
        assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
        assert!(report.errors[0].message.contains("CSV parsing error"));
        assert_eq!(report.row_count, 1, "rows before the abort are kept");
    }

    #[test]
    fn test_quoted_fields_parse_normally() {
        let report = validate("type,name,start_date\ntask,\"launch, phase 1\",2025-06-01\n");
        assert!(report.errors.is_empty(), "got: {:?}", report.errors);
        assert_eq!(report.row_count, 1);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let content = "type,start_date\nsprint,13/45/2025\n";
        let first = validate(content);
        let second = validate(content);
        assert_eq!(first.errors, second.errors);
        assert_eq!(first.row_count, second.row_count);
    }
}
