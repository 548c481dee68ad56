use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};
use validator::Validate;

use crate::consumers::Capabilities;
use crate::decoder::decode;
use crate::error::{ProcessingError, Result};
use crate::models::{AxisKind, CoordinatePair};
use crate::processors::report::{decoded_outcome, PairEntry, PairOutcome, ProcessingReport};
use crate::readers::{AxisRuns, GridReader, SignReader};
use crate::resolvers::{apply_sign, SignTable};
use crate::utils::progress::ProgressReporter;

/// End-to-end orchestration: read the grid and sign files, decode the fixed
/// set of index-paired (latitude, longitude) instances, apply signs, check
/// bounds, and annotate valid pairs through the injected capabilities.
///
/// Decoding is pure and runs in parallel; a failed or out-of-range pair is
/// reported and skipped, never fatal.
pub struct Pipeline {
    max_workers: usize,
    capabilities: Capabilities,
}

impl Pipeline {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            capabilities: Capabilities::new(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn process(
        &self,
        grid_path: &Path,
        signs_path: Option<&Path>,
        progress: Option<&ProgressReporter>,
    ) -> Result<ProcessingReport> {
        if let Some(p) = progress {
            p.set_message("Reading coordinate grid...");
        }
        let runs = GridReader::new().read(grid_path)?;

        let signs = match signs_path {
            Some(path) => SignReader::new().read(path)?,
            None => SignTable::default(),
        };

        if let Some(p) = progress {
            p.set_message("Decoding digit runs...");
        }
        let mut entries = self.process_runs(&runs, &signs)?;

        if let Some(p) = progress {
            p.set_message("Annotating coordinates...");
        }
        self.annotate(&mut entries);

        let report = ProcessingReport::new(entries);
        info!(
            decoded = report.decoded_count(),
            out_of_bound = report.out_of_bound_count(),
            failed = report.failed_count(),
            "grid processed"
        );
        Ok(report)
    }

    /// Decode and sign-resolve every index pair. Pure per pair, so the pairs
    /// are processed in parallel on a dedicated pool.
    pub fn process_runs(&self, runs: &AxisRuns, signs: &SignTable) -> Result<Vec<PairEntry>> {
        let pair_count = runs.latitude.len().min(runs.longitude.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        pool.install(|| {
            (0..pair_count)
                .into_par_iter()
                .map(|index| self.process_pair(runs, signs, index))
                .collect()
        })
    }

    fn process_pair(&self, runs: &AxisRuns, signs: &SignTable, index: usize) -> Result<PairEntry> {
        let latitude_run = &runs.latitude[index];
        let longitude_run = &runs.longitude[index];
        let latitude_sign = signs.latitude_sign(index);
        let longitude_sign = signs.longitude_sign(index);
        let sign_combo = format!("{}{}", latitude_sign.symbol(), longitude_sign.symbol());

        let latitude_angle = decode(latitude_run, AxisKind::Latitude);
        let longitude_angle = decode(longitude_run, AxisKind::Longitude);

        let outcome = match (&latitude_angle, &longitude_angle) {
            (Ok(lat), Ok(lon)) => {
                let lat = apply_sign(lat.magnitude, latitude_sign, AxisKind::Latitude);
                let lon = apply_sign(lon.magnitude, longitude_sign, AxisKind::Longitude);

                if lat.valid && lon.valid {
                    // Consistency check between the axis bounds and the
                    // declared model ranges; a mismatch skips the entry
                    let pair = CoordinatePair::new(index + 1, lat.value, lon.value);
                    match pair.validate() {
                        Ok(()) => decoded_outcome(lat.value, lon.value),
                        Err(e) => {
                            let reason = format!("model validation: {}", e);
                            warn!(index = index + 1, %reason, "pair rejected, skipping");
                            PairOutcome::Failed { reason }
                        }
                    }
                } else {
                    warn!(
                        index = index + 1,
                        latitude = lat.value,
                        longitude = lon.value,
                        "signed coordinates out of range, skipping"
                    );
                    PairOutcome::OutOfBound {
                        latitude: lat.value,
                        longitude: lon.value,
                    }
                }
            }
            (lat_result, lon_result) => {
                let mut reasons = Vec::new();
                if let Err(e) = lat_result {
                    reasons.push(format!("latitude: {}", e));
                }
                if let Err(e) = lon_result {
                    reasons.push(format!("longitude: {}", e));
                }
                let reason = reasons.join("; ");
                warn!(index = index + 1, %reason, "pair not decodable, skipping");
                PairOutcome::Failed { reason }
            }
        };

        Ok(PairEntry {
            index: index + 1,
            latitude_run: latitude_run.to_string(),
            longitude_run: longitude_run.to_string(),
            sign_combo,
            outcome,
        })
    }

    /// Fill timezone and place annotations on decoded entries. Only valid
    /// pairs ever reach the consumer capabilities.
    fn annotate(&self, entries: &mut [PairEntry]) {
        if !self.capabilities.has_timezone() && !self.capabilities.has_geocoder() {
            return;
        }

        for entry in entries.iter_mut() {
            if let PairOutcome::Decoded {
                latitude,
                longitude,
                timezone,
                place,
                ..
            } = &mut entry.outcome
            {
                *timezone = self.capabilities.timezone_at(*latitude, *longitude);
                *place = self.capabilities.place_name(*latitude, *longitude);
            }
        }
    }
}
