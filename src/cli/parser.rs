//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::DEFAULT_START;
use clap::{Parser, Subcommand};

/// collatz-rs: Collatz sequence generator.
///
/// Prints the hailstone trajectory of a starting value together with its
/// step count and peak.
#[derive(Parser, Debug)]
#[command(name = "collatz-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Starting value used by `report` when no positional value is given.
    #[arg(
        short,
        long,
        env = "COLLATZ_START",
        global = true,
        allow_negative_numbers = true
    )]
    pub start: Option<i64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Label language for text output (en, ja).
    #[arg(long, default_value = "en", env = "COLLATZ_LOCALE", global = true)]
    pub locale: String,

    /// The subcommand to execute (defaults to `report`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the sequence, step count, and maximum for one start.
    Report {
        /// Starting value (overrides --start).
        #[arg(value_name = "START", allow_negative_numbers = true)]
        value: Option<i64>,
    },

    /// Summarize every start in an inclusive range.
    Range {
        /// First starting value.
        #[arg(allow_negative_numbers = true)]
        from: i64,

        /// Last starting value (inclusive).
        #[arg(allow_negative_numbers = true)]
        to: i64,
    },
}

impl Cli {
    /// Returns the starting value for `report`.
    ///
    /// Resolution order: positional argument, `--start` / `COLLATZ_START`,
    /// then [`DEFAULT_START`].
    #[must_use]
    pub fn resolve_start(&self, positional: Option<i64>) -> i64 {
        positional.or(self.start).unwrap_or(DEFAULT_START)
    }

    /// Returns the command to run, treating a bare invocation as `report`.
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Report { value: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn bare_cli() -> Cli {
        Cli {
            start: None,
            verbose: false,
            format: "text".to_string(),
            locale: "en".to_string(),
            command: None,
        }
    }

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_start() {
        let cli = bare_cli();
        assert_eq!(cli.resolve_start(None), DEFAULT_START);
        assert_eq!(cli.resolved_command(), Commands::Report { value: None });
    }

    #[test]
    fn test_start_precedence() {
        let cli = Cli {
            start: Some(6),
            ..bare_cli()
        };
        assert_eq!(cli.resolve_start(None), 6);
        assert_eq!(cli.resolve_start(Some(9)), 9);
    }

    #[test]
    fn test_parse_report_positional() {
        let cli = Cli::try_parse_from(["collatz-rs", "report", "6"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Report { value: Some(6) }));
    }

    #[test]
    fn test_parse_negative_start() {
        let cli = Cli::try_parse_from(["collatz-rs", "report", "-5"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Report { value: Some(-5) }));
    }

    #[test]
    fn test_parse_range() {
        let cli = Cli::try_parse_from(["collatz-rs", "--format", "json", "range", "1", "10"])
            .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.command, Some(Commands::Range { from: 1, to: 10 }));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(Cli::try_parse_from(["collatz-rs", "report", "abc"]).is_err());
    }
}
