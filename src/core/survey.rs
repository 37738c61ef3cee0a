//! Range surveys.
//!
//! Runs the generator over an inclusive range of starting values and keeps
//! a [`Summary`] per start.

use crate::core::report::{Report, Summary};
use crate::core::sequence::collatz_sequence;
use crate::error::{CommandError, Result, SequenceError};
use serde::Serialize;
use tracing::debug;

/// Maximum number of starting values in one survey.
pub const MAX_SURVEY_SPAN: u64 = 1_000_000;

/// Summaries for every start in `from..=to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    /// First starting value.
    pub from: i64,
    /// Last starting value (inclusive).
    pub to: i64,
    /// One summary per start, in ascending order.
    pub entries: Vec<Summary>,
    /// Start with the most steps (smallest start on ties).
    pub longest: Summary,
    /// Start with the largest peak (smallest start on ties).
    pub highest: Summary,
}

/// Surveys every starting value in `from..=to`.
///
/// # Errors
///
/// Returns an error if `from < 1`, `from > to`, the range is wider than
/// [`MAX_SURVEY_SPAN`], or any sequence overflows.
pub fn survey(from: i64, to: i64) -> Result<Survey> {
    if from < 1 {
        return Err(SequenceError::InvalidStart { value: from }.into());
    }
    if from > to {
        return Err(CommandError::InvalidRange { from, to }.into());
    }
    let span = to.abs_diff(from).saturating_add(1);
    if span > MAX_SURVEY_SPAN {
        return Err(CommandError::RangeTooLarge {
            span,
            max: MAX_SURVEY_SPAN,
        }
        .into());
    }

    let entries = (from..=to)
        .map(|start| -> Result<Summary> {
            Ok(Report::from_sequence(&collatz_sequence(start)?)?.summary())
        })
        .collect::<Result<Vec<_>>>()?;

    // Range is non-empty, so both folds see at least one entry.
    let first = entries[0];
    let longest = entries
        .iter()
        .fold(first, |best, s| if s.steps > best.steps { *s } else { best });
    let highest = entries
        .iter()
        .fold(first, |best, s| if s.max > best.max { *s } else { best });

    debug!(from, to, longest = longest.start, highest = highest.start, "survey complete");

    Ok(Survey {
        from,
        to,
        entries,
        longest,
        highest,
    })
}
