use std::path::Path;

use crate::error::Result;
use crate::processors::{PairEntry, PairOutcome};

/// Writes processed pairs as flat CSV, one row per grid index.
pub struct CsvWriter {
    include_failures: bool,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            include_failures: true,
        }
    }

    pub fn with_include_failures(mut self, include_failures: bool) -> Self {
        self.include_failures = include_failures;
        self
    }

    pub fn write_entries(&self, entries: &[PairEntry], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record([
            "index",
            "latitude_run",
            "longitude_run",
            "sign_combo",
            "status",
            "latitude",
            "longitude",
            "dms",
            "timezone",
            "utc_offset_hours",
            "place",
        ])?;

        for entry in entries {
            match &entry.outcome {
                PairOutcome::Decoded {
                    latitude,
                    longitude,
                    dms,
                    timezone,
                    place,
                } => {
                    writer.write_record([
                        entry.index.to_string(),
                        entry.latitude_run.clone(),
                        entry.longitude_run.clone(),
                        entry.sign_combo.clone(),
                        "decoded".to_string(),
                        format!("{:.6}", latitude),
                        format!("{:.6}", longitude),
                        dms.clone(),
                        timezone.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
                        timezone
                            .as_ref()
                            .map(|t| format!("{:+.2}", t.utc_offset_hours))
                            .unwrap_or_default(),
                        place.clone().unwrap_or_default(),
                    ])?;
                }
                PairOutcome::OutOfBound {
                    latitude,
                    longitude,
                } if self.include_failures => {
                    writer.write_record([
                        entry.index.to_string(),
                        entry.latitude_run.clone(),
                        entry.longitude_run.clone(),
                        entry.sign_combo.clone(),
                        "out_of_bound".to_string(),
                        format!("{:.6}", latitude),
                        format!("{:.6}", longitude),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                    ])?;
                }
                PairOutcome::Failed { reason } if self.include_failures => {
                    writer.write_record([
                        entry.index.to_string(),
                        entry.latitude_run.clone(),
                        entry.longitude_run.clone(),
                        entry.sign_combo.clone(),
                        format!("failed: {}", reason),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                    ])?;
                }
                _ => {}
            }
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::report::decoded_outcome;
    use tempfile::TempDir;

    fn entries() -> Vec<PairEntry> {
        vec![
            PairEntry {
                index: 1,
                latitude_run: "324506".to_string(),
                longitude_run: "3031976".to_string(),
                sign_combo: "++".to_string(),
                outcome: decoded_outcome(32.751667, 30.787778),
            },
            PairEntry {
                index: 2,
                latitude_run: String::new(),
                longitude_run: "42".to_string(),
                sign_combo: "++".to_string(),
                outcome: PairOutcome::Failed {
                    reason: "latitude: Empty digit run".to_string(),
                },
            },
        ]
    }

    #[test]
    fn test_write_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.csv");

        CsvWriter::new().write_entries(&entries(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("index,latitude_run"));
        assert!(lines.next().unwrap().contains("decoded"));
        assert!(lines.next().unwrap().contains("failed"));
    }

    #[test]
    fn test_failures_can_be_excluded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.csv");

        CsvWriter::new()
            .with_include_failures(false)
            .write_entries(&entries(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2); // header + one decoded row
    }
}
