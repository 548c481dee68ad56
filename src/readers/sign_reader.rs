use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::resolvers::{Sign, SignTable};

/// Reads the sign specification file.
///
/// Up to two lines: line one carries one sign character per longitude
/// instance, line two per latitude instance. The file's convention is
/// inverted with respect to the usual north/east-positive reading: a `'+'`
/// character means sign -1 and any other character means +1. The inversion
/// is part of the existing file contract and is preserved exactly.
pub struct SignReader;

impl SignReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a sign table, defaulting to all-positive when the file is
    /// missing.
    pub fn read(&self, path: &Path) -> Result<SignTable> {
        if !path.exists() {
            warn!(path = %path.display(), "sign file not found, all signs default to +1");
            return Ok(SignTable::default());
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut lines = Vec::with_capacity(2);
        for line_result in reader.lines() {
            let line = line_result?;
            let trimmed = line.trim().to_string();
            if !trimmed.is_empty() {
                lines.push(trimmed);
            }
        }

        Ok(self.parse_lines(&lines))
    }

    fn parse_lines(&self, lines: &[String]) -> SignTable {
        let mut table = SignTable::default();
        if let Some(line) = lines.first() {
            table.longitude = line.chars().map(sign_for).collect();
        }
        if let Some(line) = lines.get(1) {
            table.latitude = line.chars().map(sign_for).collect();
        }
        table
    }
}

impl Default for SignReader {
    fn default() -> Self {
        Self::new()
    }
}

// '+' maps to -1, anything else to +1
fn sign_for(c: char) -> Sign {
    if c == '+' {
        Sign::Negative
    } else {
        Sign::Positive
    }
}
