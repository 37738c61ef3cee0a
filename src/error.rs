//! Error types for collatz-rs operations.
//!
//! This module provides the error hierarchy using `thiserror` for sequence
//! generation, reporting, and CLI commands.

use thiserror::Error;

/// Result type alias for collatz-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Sequence generation errors.
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Report construction errors.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while generating a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Starting value below 1; the iteration would never reach 1.
    #[error("starting value must be at least 1, got {value}")]
    InvalidStart {
        /// The rejected starting value.
        value: i64,
    },

    /// `3n + 1` does not fit in an `i64`.
    #[error("3n + 1 overflows i64 at n = {value}")]
    Overflow {
        /// The odd value whose successor overflowed.
        value: i64,
    },
}

/// Errors raised while building a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// No values to report on.
    #[error("cannot report on an empty sequence")]
    EmptySequence,
}

/// CLI command-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Range bounds out of order.
    #[error("invalid range: {from} is greater than {to}")]
    InvalidRange {
        /// Lower bound.
        from: i64,
        /// Upper bound.
        to: i64,
    },

    /// Range covers more starts than a survey allows.
    #[error("range of {span} starting values exceeds maximum {max}")]
    RangeTooLarge {
        /// Number of starts requested.
        span: u64,
        /// Maximum allowed.
        max: u64,
    },
}
