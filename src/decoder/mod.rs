//! Digit-run to angle decoder.
//!
//! A digit run carries a DMS angle with no field separators, so the field
//! boundaries have to be inferred. Layouts are hypothesized as segmentation
//! candidates, validated against domain constraints (minutes and seconds in
//! [0, 60), longitude degrees under 180) and the first candidate that
//! validates wins. The decoder is pure: same run and axis in, same angle
//! out, and the axis bound on the *signed* value is the sign resolver's job.

pub mod segmentation;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{AxisKind, DecodedAngle, DigitRun};

pub use segmentation::{candidates_for, FieldRule, SegmentationCandidate};

/// Decode one digit run into an unsigned DMS angle.
///
/// Fails with `EmptyDigitRun` for empty runs, `InvalidDigitRun` when a
/// non-digit character slipped past extraction, and `UnparseableDigitRun`
/// when no candidate split passes its range rules.
pub fn decode(digits: &DigitRun, axis: AxisKind) -> Result<DecodedAngle> {
    if digits.is_empty() {
        return Err(ProcessingError::EmptyDigitRun);
    }
    if !digits.is_well_formed() {
        return Err(ProcessingError::InvalidDigitRun {
            digits: digits.to_string(),
        });
    }

    let run = digits.as_str();
    for candidate in candidates_for(axis, run.len()) {
        if let Some(angle) = candidate.apply(run) {
            debug!(
                %axis,
                digits = run,
                degrees = angle.degrees,
                minutes = angle.minutes,
                seconds = angle.seconds,
                "digit run decoded"
            );
            return Ok(angle);
        }
    }

    Err(ProcessingError::UnparseableDigitRun {
        axis,
        digits: run.to_string(),
    })
}
