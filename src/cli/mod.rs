//! CLI layer for collatz-rs.
//!
//! Provides the command-line interface using clap, with commands for
//! single-sequence reports and range surveys.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::{Locale, OutputFormat};
pub use parser::{Cli, Commands};
