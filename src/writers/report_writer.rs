use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;
use crate::processors::ProcessingReport;

/// Serializes a full processing report to pretty-printed JSON.
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_report(&self, report: &ProcessingReport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::report::{decoded_outcome, PairEntry};
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        let report = ProcessingReport::new(vec![PairEntry {
            index: 1,
            latitude_run: "324506".to_string(),
            longitude_run: "3031976".to_string(),
            sign_combo: "+-".to_string(),
            outcome: decoded_outcome(32.751667, -30.787778),
        }]);

        ReportWriter::new().write_report(&report, &path).unwrap();

        let parsed: ProcessingReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.entries, report.entries);
        assert_eq!(parsed.entries[0].sign_combo, "+-");
    }
}
