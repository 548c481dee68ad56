use serde::{Deserialize, Serialize};

/// An unsigned angle recovered from a digit run, broken into DMS sub-fields.
///
/// The magnitude is always non-negative; the sign is applied later by the
/// sign resolver, never by the decoder. Seconds may carry a fractional part
/// when the digit run had trailing digits beyond the seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub magnitude: f64,
}

impl DecodedAngle {
    pub fn new(degrees: u32, minutes: u32, seconds: f64) -> Self {
        let magnitude = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
        Self {
            degrees,
            minutes,
            seconds,
            magnitude,
        }
    }

    /// Whole degrees with no minutes/seconds component.
    pub fn whole_degrees(degrees: u32) -> Self {
        Self::new(degrees, 0, 0.0)
    }
}
