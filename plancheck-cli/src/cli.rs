//! Command-line interface for the plancheck validator.
//!
//! Thin driver: argument parsing, logging setup, report rendering, and
//! the process exit status. All validation logic lives in
//! `plancheck-validator`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use plancheck_validator::{FsSourceConfig, ValidationReport, output, validate_fs};

#[derive(Debug, Parser)]
#[command(
    name = "plancheck",
    version,
    about = "Validate CSV sample data before scheduling-tool imports"
)]
struct Cli {
    /// Files or directories to scan (directories are searched recursively
    /// for *.csv)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Exclude glob patterns (may be repeated)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Maximum file size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 10_485_760)]
    max_file_size: u64,

    /// Only print the summary and verdict
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Run the validator and return the process exit code: 0 when every file
/// is clean, 1 otherwise.
///
/// # Errors
///
/// Returns an error for caller misuse (no paths, nonexistent path) or if
/// writing the report fails.
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = FsSourceConfig::default();
    config.paths = cli.paths;
    config.exclude = cli.exclude;
    config.max_file_size = cli.max_file_size;

    let report = validate_fs(&config)?;

    match cli.format {
        OutputFormat::Json => {
            output::write_json(&report, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Human => print_human(&report, cli.quiet),
    }

    Ok(i32::from(!report.ok))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Per-file status lines, scan errors, and a summary block. `colored`
/// drops the ANSI codes on its own when stdout is not a terminal.
fn print_human(report: &ValidationReport, quiet: bool) {
    if !quiet {
        for file in &report.files {
            if file.is_clean() {
                println!(
                    "{} {} ({} rows)",
                    "ok".green().bold(),
                    file.file.display(),
                    file.row_count
                );
            } else {
                println!(
                    "{} {} ({} rows)",
                    "FAIL".red().bold(),
                    file.file.display(),
                    file.row_count
                );
                for error in &file.errors {
                    println!("     {}", error.message);
                }
                for warning in &file.warnings {
                    println!("     {} {warning}", "warning:".yellow());
                }
            }
        }
        for scan_err in &report.scan_errors {
            println!(
                "{} {}",
                "FAIL".red().bold(),
                scan_err.format_human_readable()
            );
        }
        println!();
    }

    println!("  Files validated:  {}", report.files_attempted());
    println!("  Total data rows:  {}", report.total_rows());
    println!("  Total errors:     {}", report.errors_count());
    println!("  Total warnings:   {}", report.warnings_count());
    println!();

    if report.ok {
        println!(
            "{}",
            format!("\u{2713} All {} files are valid", report.scanned_files).green()
        );
    } else {
        let total_failures = report.errors_count() + report.scan_errors.len();
        println!(
            "{}",
            format!("\u{2717} Validation failed with {total_failures} errors").red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }
}
