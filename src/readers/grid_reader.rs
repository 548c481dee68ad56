use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{ProcessingError, Result};
use crate::models::DigitRun;
use crate::utils::constants::{PAIR_COUNT, PLACEHOLDER};

/// Digit runs extracted from one grid file, one run per coordinate instance.
/// Both sequences hold exactly `PAIR_COUNT` entries; missing or malformed
/// grid entries appear as empty runs and fail at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRuns {
    pub longitude: Vec<DigitRun>,
    pub latitude: Vec<DigitRun>,
}

/// Reads the delimiter-free coordinate grid.
///
/// The file splits at the first blank line. Lines above it encode longitude
/// column-wise: after placeholder stripping, character position `i` of each
/// line contributes one digit, top to bottom, to longitude run `i`. Lines
/// below encode latitude row-wise, one placeholder-stripped line per run.
pub struct GridReader {
    pair_count: usize,
}

impl GridReader {
    pub fn new() -> Self {
        Self {
            pair_count: PAIR_COUNT,
        }
    }

    pub fn with_pair_count(pair_count: usize) -> Self {
        Self { pair_count }
    }

    pub fn read(&self, path: &Path) -> Result<AxisRuns> {
        let text = fs::read_to_string(path)?;
        self.extract_axis_runs(&text)
    }

    /// Extract per-axis digit runs from grid text.
    pub fn extract_axis_runs(&self, text: &str) -> Result<AxisRuns> {
        let lines: Vec<&str> = text.lines().collect();

        let separator = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .ok_or_else(|| {
                ProcessingError::InvalidFormat(
                    "no blank line separating the column and row sections".to_string(),
                )
            })?;

        let longitude = self.extract_columns(&lines[..separator]);
        let latitude = self.extract_rows(&lines[separator + 1..]);

        Ok(AxisRuns {
            longitude,
            latitude,
        })
    }

    /// Column-wise extraction: digit `i` of each cleaned line, top to bottom.
    /// Lines shorter than a column position simply contribute nothing to it.
    fn extract_columns(&self, lines: &[&str]) -> Vec<DigitRun> {
        let cleaned: Vec<String> = lines.iter().filter_map(|line| clean_line(line)).collect();

        let mut runs = Vec::with_capacity(self.pair_count);
        for col in 0..self.pair_count {
            let digits: String = cleaned
                .iter()
                .filter_map(|line| line.as_bytes().get(col).map(|&b| b as char))
                .collect();
            runs.push(DigitRun::new(digits));
        }
        runs
    }

    /// Row-wise extraction: one cleaned line per run, padded or truncated to
    /// the fixed pair count.
    fn extract_rows(&self, lines: &[&str]) -> Vec<DigitRun> {
        let mut runs: Vec<DigitRun> = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match clean_line(line) {
                Some(digits) => DigitRun::new(digits),
                None => DigitRun::empty(),
            })
            .collect();

        runs.truncate(self.pair_count);
        while runs.len() < self.pair_count {
            runs.push(DigitRun::empty());
        }
        runs
    }
}

impl Default for GridReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip placeholders and whitespace. Returns `None` for lines that end up
/// empty or still hold non-digit characters; such lines degrade to empty
/// runs rather than aborting the read.
fn clean_line(line: &str) -> Option<String> {
    let cleaned: String = line
        .trim()
        .chars()
        .filter(|&c| c != PLACEHOLDER)
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        warn!(line, "grid line holds non-digit characters, dropping it");
        return None;
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_GRID: &str = "\
336111111752
060045631965
343005943513
195242552307
922923199005
_78153003176
___642148___

324506
300240
402700
425229
311409
272654
365201
211408
323047
04229_
143957
35056_
";

    #[test]
    fn test_sections_split_at_first_blank_line() {
        let runs = GridReader::new().extract_axis_runs(SAMPLE_GRID).unwrap();
        assert_eq!(runs.longitude.len(), 12);
        assert_eq!(runs.latitude.len(), 12);
    }

    #[test]
    fn test_missing_separator_is_an_error() {
        let err = GridReader::new()
            .extract_axis_runs("324506\n300240\n")
            .unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidFormat(_)));
    }

    #[test]
    fn test_column_extraction() {
        let runs = GridReader::new().extract_axis_runs(SAMPLE_GRID).unwrap();

        // First column, top to bottom; placeholder stripping shifts the
        // sixth line left so its leading 7 lands in column 0
        assert_eq!(runs.longitude[0].as_str(), "3031976");
        assert_eq!(runs.longitude[1].as_str(), "3649284");

        // The last line cleans down to six digits, so it stops contributing
        // beyond column 5
        assert_eq!(runs.longitude[6].as_str(), "169510");

        // Column 11 only reaches the five full-width lines
        assert_eq!(runs.longitude[11].as_str(), "25375");
    }

    #[test]
    fn test_row_extraction_strips_placeholders() {
        let runs = GridReader::new().extract_axis_runs(SAMPLE_GRID).unwrap();
        assert_eq!(runs.latitude[0].as_str(), "324506");
        assert_eq!(runs.latitude[9].as_str(), "04229");
        assert_eq!(runs.latitude[11].as_str(), "35056");
    }

    #[test]
    fn test_short_grid_pads_with_empty_runs() {
        let runs = GridReader::new()
            .extract_axis_runs("12\n34\n\n324506\n")
            .unwrap();
        assert_eq!(runs.latitude[0].as_str(), "324506");
        assert!(runs.latitude[1].is_empty());
        assert_eq!(runs.latitude.len(), 12);

        // Two two-digit column lines give two-digit runs for the first two
        // columns and empty runs beyond them
        assert_eq!(runs.longitude[0].as_str(), "13");
        assert_eq!(runs.longitude[1].as_str(), "24");
        assert!(runs.longitude[2].is_empty());
    }

    #[test]
    fn test_malformed_row_degrades_to_empty_run() {
        let runs = GridReader::new()
            .extract_axis_runs("123456\n\n32a506\n300240\n")
            .unwrap();
        assert!(runs.latitude[0].is_empty());
        assert_eq!(runs.latitude[1].as_str(), "300240");
    }

    #[test]
    fn test_custom_pair_count() {
        let runs = GridReader::with_pair_count(3)
            .extract_axis_runs("123\n456\n\n324506\n")
            .unwrap();
        assert_eq!(runs.longitude.len(), 3);
        assert_eq!(runs.latitude.len(), 3);
        assert_eq!(runs.longitude[0].as_str(), "14");
    }

    #[test]
    fn test_extra_rows_truncated() {
        let mut text = String::from("123456\n\n");
        for _ in 0..15 {
            text.push_str("324506\n");
        }
        let runs = GridReader::new().extract_axis_runs(&text).unwrap();
        assert_eq!(runs.latitude.len(), 12);
    }
}
