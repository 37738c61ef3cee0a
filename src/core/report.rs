//! Sequence reports.
//!
//! A [`Report`] pairs a sequence with the figures printed about it: the step
//! count and the peak value.

use crate::core::sequence::Sequence;
use crate::error::{ReportError, Result};
use serde::Serialize;

/// Step count and peak for one starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Starting value.
    pub start: i64,
    /// Sequence length minus one.
    pub steps: usize,
    /// Largest value visited.
    pub max: i64,
}

/// Everything printed about a single sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Starting value.
    pub start: i64,
    /// Every visited value, in order.
    pub sequence: Vec<i64>,
    /// Sequence length minus one.
    pub steps: usize,
    /// Largest value visited.
    pub max: i64,
}

impl Report {
    /// Builds a report from raw sequence values.
    ///
    /// The maximum is found by a linear scan; no position is assumed.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptySequence`] if `values` is empty.
    pub fn new(start: i64, values: &[i64]) -> Result<Self> {
        let max = values
            .iter()
            .copied()
            .max()
            .ok_or(ReportError::EmptySequence)?;

        Ok(Self {
            start,
            sequence: values.to_vec(),
            steps: values.len() - 1,
            max,
        })
    }

    /// Builds a report from a generated sequence.
    ///
    /// # Errors
    ///
    /// Never fails for a sequence produced by
    /// [`collatz_sequence`](crate::core::collatz_sequence).
    pub fn from_sequence(sequence: &Sequence) -> Result<Self> {
        Self::new(sequence.start(), sequence.values())
    }

    /// Drops the values, keeping the start, step count, and peak.
    #[must_use]
    pub const fn summary(&self) -> Summary {
        Summary {
            start: self.start,
            steps: self.steps,
            max: self.max,
        }
    }
}
