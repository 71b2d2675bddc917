//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Clean files get a one-line `OK (N rows)` indicator; files with problems
/// get a block listing their row count and every error and warning.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer, "  CSV DATA VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer)?;

    for file in &report.files {
        if file.is_clean() {
            writeln!(
                writer,
                "  {} ({} rows): OK",
                file.file.display(),
                file.row_count
            )?;
        } else {
            writeln!(writer, "  {} ({} rows)", file.file.display(), file.row_count)?;
            if !file.errors.is_empty() {
                writeln!(writer, "    Errors ({}):", file.errors.len())?;
                for error in &file.errors {
                    writeln!(writer, "      - {}", error.message)?;
                }
            }
            if !file.warnings.is_empty() {
                writeln!(writer, "    Warnings ({}):", file.warnings.len())?;
                for warning in &file.warnings {
                    writeln!(writer, "      - {warning}")?;
                }
            }
        }
    }

    if !report.scan_errors.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", "-".repeat(70))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be validated)")?;
        writeln!(writer, "{}", "-".repeat(70))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "  {}", scan_err.format_human_readable())?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer, "  Files validated:  {}", report.files_attempted())?;
    writeln!(writer, "  Total data rows:  {}", report.total_rows())?;
    writeln!(writer, "  Total errors:     {}", report.errors_count())?;
    writeln!(writer, "  Total warnings:   {}", report.warnings_count())?;
    writeln!(writer)?;

    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files are valid",
            report.scanned_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be scanned",
                report.failed_files
            )?;
        }
        if report.errors_count() > 0 {
            writeln!(
                writer,
                "\u{2717} Validation failed with {} errors",
                report.errors_count()
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(70))?;

    Ok(())
}
