//! CLI command implementations.
//!
//! Each command returns its rendered output; the binary decides where it
//! goes.

use crate::cli::output::{Locale, OutputFormat, format_report, format_survey};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Report, collatz_sequence, survey};
use crate::error::Result;
use tracing::info;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the starting value or range is invalid, or if a
/// sequence overflows.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let locale = Locale::parse(&cli.locale);

    match cli.resolved_command() {
        Commands::Report { value } => cmd_report(cli.resolve_start(value), format, locale),
        Commands::Range { from, to } => cmd_range(from, to, format),
    }
}

fn cmd_report(start: i64, format: OutputFormat, locale: Locale) -> Result<String> {
    info!(start, "running report");
    let sequence = collatz_sequence(start)?;
    let report = Report::from_sequence(&sequence)?;
    Ok(format_report(&report, format, locale))
}

fn cmd_range(from: i64, to: i64, format: OutputFormat) -> Result<String> {
    info!(from, to, "running range survey");
    let result = survey(from, to)?;
    Ok(format_survey(&result, format))
}
