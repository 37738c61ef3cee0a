//! Core domain logic for collatz-rs.
//!
//! Sequence generation, per-sequence reports, and range surveys. These are
//! pure computations with no I/O.

pub mod report;
pub mod sequence;
pub mod survey;

pub use report::{Report, Summary};
pub use sequence::{DEFAULT_START, Sequence, collatz_sequence, next_value};
pub use survey::{MAX_SURVEY_SPAN, Survey, survey};
