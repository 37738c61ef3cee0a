//! Collatz sequence generation.
//!
//! A sequence is the full trajectory of a starting value under the map
//! `n -> n / 2` (even) and `n -> 3n + 1` (odd), ending at the first 1.

use crate::error::{Result, SequenceError};
use serde::Serialize;
use tracing::debug;

/// Starting value used when none is supplied.
pub const DEFAULT_START: i64 = 27;

/// The trajectory of a starting value down to 1.
///
/// Always non-empty: the first element is the starting value and the last
/// element is 1.
///
/// # Examples
///
/// ```
/// use collatz_rs::core::collatz_sequence;
///
/// let seq = collatz_sequence(6).unwrap();
/// assert_eq!(seq.values(), &[6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// assert_eq!(seq.steps(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    /// Returns the starting value.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.values[0]
    }

    /// Returns every visited value in order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of values, including the start and the terminal 1.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of transformations applied to reach 1.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.values.len() - 1
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    /// Consumes the sequence, returning the underlying values.
    #[must_use]
    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Applies one Collatz step to `value`.
///
/// # Errors
///
/// Returns [`SequenceError::Overflow`] if `3 * value + 1` does not fit in
/// an `i64`.
pub fn next_value(value: i64) -> Result<i64> {
    if value % 2 == 0 {
        return Ok(value / 2);
    }
    value
        .checked_mul(3)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| SequenceError::Overflow { value }.into())
}

/// Computes the Collatz sequence for `start`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidStart`] if `start < 1`, and
/// [`SequenceError::Overflow`] if an intermediate value exceeds `i64`.
pub fn collatz_sequence(start: i64) -> Result<Sequence> {
    if start < 1 {
        return Err(SequenceError::InvalidStart { value: start }.into());
    }

    let mut values = Vec::new();
    let mut current = start;
    while current != 1 {
        values.push(current);
        current = next_value(current)?;
    }
    values.push(1);

    debug!(start, steps = values.len() - 1, "generated sequence");
    Ok(Sequence { values })
}
