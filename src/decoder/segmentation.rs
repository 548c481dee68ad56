use crate::models::{AxisKind, DecodedAngle};

/// Range rule for a minutes or seconds sub-field within one candidate split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Field not present in this split
    Absent,
    /// Field of the given digit width; value must be < 60
    Bounded(usize),
    /// Field of the given digit width; no range check applied
    Unbounded(usize),
    /// Field of the given digit width that is consumed by the layout but
    /// dropped from the result
    Discarded(usize),
}

impl FieldRule {
    fn width(&self) -> usize {
        match self {
            FieldRule::Absent => 0,
            FieldRule::Bounded(w) | FieldRule::Unbounded(w) | FieldRule::Discarded(w) => *w,
        }
    }
}

/// One hypothesized way to split a digit run into degree/minute/second
/// sub-fields. Candidates are transient: `candidates_for` yields them in
/// priority order and the decoder commits to the first that applies cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationCandidate {
    degree_width: usize,
    minutes: FieldRule,
    seconds: FieldRule,
    /// Upper bound on the degrees field, exclusive. Longitude candidates
    /// reject degrees >= 180 during segmentation; latitude leaves bound
    /// enforcement to the sign resolver.
    degree_cap: Option<u32>,
}

impl SegmentationCandidate {
    const fn new(
        degree_width: usize,
        minutes: FieldRule,
        seconds: FieldRule,
        degree_cap: Option<u32>,
    ) -> Self {
        Self {
            degree_width,
            minutes,
            seconds,
            degree_cap,
        }
    }

    /// Total digit width of the declared fields (excludes any fractional
    /// remainder).
    pub fn width(&self) -> usize {
        self.degree_width + self.minutes.width() + self.seconds.width()
    }

    /// Try this split against a digit run. Returns `None` when the run is
    /// too short or a field violates its range rule.
    pub fn apply(&self, digits: &str) -> Option<DecodedAngle> {
        if digits.len() < self.width() {
            return None;
        }

        let degrees: u32 = digits[..self.degree_width].parse().ok()?;
        if let Some(cap) = self.degree_cap {
            if degrees >= cap {
                return None;
            }
        }

        let mut cursor = self.degree_width;

        let minutes = match self.minutes {
            FieldRule::Absent => 0,
            FieldRule::Bounded(w) => {
                let value: u32 = digits[cursor..cursor + w].parse().ok()?;
                cursor += w;
                if value >= 60 {
                    return None;
                }
                value
            }
            FieldRule::Unbounded(w) => {
                let value: u32 = digits[cursor..cursor + w].parse().ok()?;
                cursor += w;
                value
            }
            // Degenerate split: the trailing digit is consumed but its value
            // is silently dropped, so information is lost. Kept as-is for
            // compatibility with grids already encoded this way.
            FieldRule::Discarded(_) => {
                return Some(DecodedAngle::whole_degrees(degrees));
            }
        };

        let mut seconds = match self.seconds {
            FieldRule::Absent => 0.0,
            FieldRule::Bounded(w) => {
                let value: u32 = digits[cursor..cursor + w].parse().ok()?;
                cursor += w;
                if value >= 60 {
                    return None;
                }
                value as f64
            }
            FieldRule::Unbounded(w) => {
                let value: u32 = digits[cursor..cursor + w].parse().ok()?;
                cursor += w;
                value as f64
            }
            FieldRule::Discarded(_) => 0.0,
        };

        // Trailing digits beyond the seconds field are fractional seconds
        if self.seconds != FieldRule::Absent && cursor < digits.len() {
            seconds += fractional(&digits[cursor..]);
        }

        Some(DecodedAngle::new(degrees, minutes, seconds))
    }
}

/// Base-10 fraction from trailing digits: "12" contributes 0.12.
fn fractional(digits: &str) -> f64 {
    let mut scale = 0.1;
    let mut acc = 0.0;
    for ch in digits.chars() {
        acc += ch.to_digit(10).unwrap_or(0) as f64 * scale;
        scale /= 10.0;
    }
    acc
}

const LONGITUDE_CAP: Option<u32> = Some(180);

/// Candidate splits for one axis and digit-run length, highest priority
/// first. This is the single canonical fallback table: the decoder takes the
/// first candidate whose fields all pass their range rules.
///
/// Latitude layouts are fixed by run length (degrees can never need a third
/// digit inside the +/-90 bound), so exactly one candidate is produced and a
/// range violation fails the run outright. Longitude is genuinely ambiguous:
/// longer, more specific splits (three degree digits, the true DDDMMSS
/// convention) are preferred whenever the run supports them, with looser
/// splits as a last resort for non-standard encodings such as a missing
/// leading zero or truncated seconds.
pub fn candidates_for(axis: AxisKind, len: usize) -> Vec<SegmentationCandidate> {
    use FieldRule::{Absent, Bounded, Discarded, Unbounded};

    match axis {
        AxisKind::Latitude => match len {
            0 => vec![],
            l @ 1..=2 => vec![SegmentationCandidate::new(l, Absent, Absent, None)],
            3 => vec![SegmentationCandidate::new(2, Bounded(1), Absent, None)],
            4 => vec![SegmentationCandidate::new(2, Bounded(2), Absent, None)],
            5 => vec![SegmentationCandidate::new(2, Bounded(2), Bounded(1), None)],
            _ => vec![SegmentationCandidate::new(2, Bounded(2), Bounded(2), None)],
        },
        AxisKind::Longitude => {
            let mut chain = Vec::new();

            if len >= 7 {
                chain.push(SegmentationCandidate::new(
                    3,
                    Bounded(2),
                    Bounded(2),
                    LONGITUDE_CAP,
                ));
            }
            if len >= 6 {
                chain.push(SegmentationCandidate::new(
                    2,
                    Bounded(2),
                    Bounded(2),
                    LONGITUDE_CAP,
                ));
            }
            if len >= 7 {
                // Three-digit seconds / three-digit minutes rescues: the odd
                // field is taken verbatim with no < 60 check
                chain.push(SegmentationCandidate::new(
                    2,
                    Bounded(2),
                    Unbounded(3),
                    LONGITUDE_CAP,
                ));
                chain.push(SegmentationCandidate::new(
                    2,
                    Unbounded(3),
                    Bounded(2),
                    LONGITUDE_CAP,
                ));
            }
            match len {
                6 => {
                    // The documented chain retries 2-2-2 before 3-2-1 here;
                    // the retry can never newly match but keeps the order
                    // auditable against the fallback table
                    chain.push(SegmentationCandidate::new(
                        2,
                        Bounded(2),
                        Bounded(2),
                        LONGITUDE_CAP,
                    ));
                    chain.push(SegmentationCandidate::new(
                        3,
                        Bounded(2),
                        Bounded(1),
                        LONGITUDE_CAP,
                    ));
                }
                5 => {
                    chain.push(SegmentationCandidate::new(
                        2,
                        Bounded(2),
                        Bounded(1),
                        LONGITUDE_CAP,
                    ));
                    chain.push(SegmentationCandidate::new(
                        3,
                        Bounded(2),
                        Absent,
                        LONGITUDE_CAP,
                    ));
                    chain.push(SegmentationCandidate::new(
                        2,
                        Unbounded(3),
                        Absent,
                        LONGITUDE_CAP,
                    ));
                }
                4 => {
                    chain.push(SegmentationCandidate::new(
                        2,
                        Bounded(2),
                        Absent,
                        LONGITUDE_CAP,
                    ));
                    chain.push(SegmentationCandidate::new(
                        3,
                        Discarded(1),
                        Absent,
                        LONGITUDE_CAP,
                    ));
                }
                3 => {
                    chain.push(SegmentationCandidate::new(3, Absent, Absent, LONGITUDE_CAP));
                }
                2 => {
                    chain.push(SegmentationCandidate::new(2, Absent, Absent, LONGITUDE_CAP));
                }
                _ => {}
            }

            chain
        }
    }
}
