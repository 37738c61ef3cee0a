//! # collatz-rs
//!
//! Collatz sequence generator and reporter.
//!
//! Starting from a positive integer, repeatedly halve even values and map odd
//! values to `3n + 1` until reaching 1. The full trajectory is reported with
//! its step count and peak value.
//!
//! ## Features
//!
//! - **Checked arithmetic**: overflow in `3n + 1` is an error, not wraparound
//! - **Validation**: starting values below 1 are rejected
//! - **Surveys**: summarize every start in a range
//! - **Output**: text (English or Japanese labels) or JSON
//!
//! ```
//! use collatz_rs::{Report, collatz_sequence};
//!
//! let report = Report::from_sequence(&collatz_sequence(27)?)?;
//! assert_eq!(report.steps, 111);
//! assert_eq!(report.max, 9232);
//! # Ok::<(), collatz_rs::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{
    DEFAULT_START, MAX_SURVEY_SPAN, Report, Sequence, Summary, Survey, collatz_sequence,
    next_value, survey,
};

pub use cli::{Cli, Commands, Locale, OutputFormat};
