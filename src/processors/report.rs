use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consumers::TimezoneInfo;
use crate::utils::coordinates::format_position;

/// Outcome for one grid index. Out-of-bound values are carried for
/// reporting but are never handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    Decoded {
        latitude: f64,
        longitude: f64,
        dms: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        timezone: Option<TimezoneInfo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        place: Option<String>,
    },
    OutOfBound {
        latitude: f64,
        longitude: f64,
    },
    Failed {
        reason: String,
    },
}

/// One processed grid index: raw digit runs, resolved signs, and outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEntry {
    /// 1-based position in the grid
    pub index: usize,
    pub latitude_run: String,
    pub longitude_run: String,
    /// Resolved latitude sign then longitude sign, e.g. "+-"
    pub sign_combo: String,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

impl PairEntry {
    pub fn is_decoded(&self) -> bool {
        matches!(self.outcome, PairOutcome::Decoded { .. })
    }

    /// Multi-line console block for one pair in the classic report layout.
    pub fn display_block(&self) -> String {
        let mut block = format!(
            "Pair {} (lat={}, lon={}):",
            self.index,
            placeholder_for_empty(&self.latitude_run),
            placeholder_for_empty(&self.longitude_run),
        );

        match &self.outcome {
            PairOutcome::Decoded {
                latitude,
                longitude,
                dms,
                timezone,
                place,
            } => {
                block.push_str(&format!("\n  Coordinates: {}", dms));
                block.push_str(&format!(
                    "\n    (Decimal: {:+.6}, {:+.6})",
                    latitude, longitude
                ));
                block.push_str(&format!("\n    Sign combination: {}", self.sign_combo));
                if let Some(tz) = timezone {
                    block.push_str(&format!("\n    Timezone: {}", tz.name));
                    block.push_str(&format!(
                        "\n    GMT Offset: {:+.2} hours",
                        tz.utc_offset_hours
                    ));
                }
                if let Some(place) = place {
                    block.push_str(&format!("\n    Location: {}", place));
                }
            }
            PairOutcome::OutOfBound {
                latitude,
                longitude,
            } => {
                block.push_str(&format!(
                    "\n  Warning: coordinates ({:.6}, {:.6}) are out of valid range, skipped",
                    latitude, longitude
                ));
            }
            PairOutcome::Failed { reason } => {
                block.push_str(&format!("\n  Warning: not decodable ({}), skipped", reason));
            }
        }

        block
    }
}

fn placeholder_for_empty(run: &str) -> &str {
    if run.is_empty() {
        "<empty>"
    } else {
        run
    }
}

/// Full result of one grid processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<PairEntry>,
}

impl ProcessingReport {
    pub fn new(entries: Vec<PairEntry>) -> Self {
        Self {
            generated_at: Utc::now(),
            entries,
        }
    }

    pub fn decoded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_decoded()).count()
    }

    pub fn out_of_bound_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PairOutcome::OutOfBound { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PairOutcome::Failed { .. }))
            .count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Processing Summary:\n  Total pairs: {}\n  Decoded: {}\n  Out of range: {}\n  Failed: {}",
            self.entries.len(),
            self.decoded_count(),
            self.out_of_bound_count(),
            self.failed_count()
        )
    }
}

/// Build the Decoded outcome for a valid pair, DMS string included.
pub fn decoded_outcome(latitude: f64, longitude: f64) -> PairOutcome {
    PairOutcome::Decoded {
        latitude,
        longitude,
        dms: format_position(latitude, longitude),
        timezone: None,
        place: None,
    }
}
