use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::consumers::{Capabilities, SolarTimezoneEstimator};
use crate::error::Result;
use crate::processors::Pipeline;
use crate::readers::GridReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, ReportWriter};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Decode {
            input,
            signs,
            json,
            csv,
            max_workers,
            no_timezone,
        } => {
            println!("Decoding coordinate grid: {}", input.display());
            println!("Sign file: {}", signs.display());

            let mut capabilities = Capabilities::new();
            if !no_timezone {
                capabilities = capabilities.with_timezone(SolarTimezoneEstimator);
            }

            let progress = ProgressReporter::new_spinner("Processing grid...");
            let pipeline = Pipeline::new(max_workers).with_capabilities(capabilities);

            let report = tokio::task::spawn_blocking(move || {
                pipeline.process(&input, Some(signs.as_path()), Some(&progress))
            })
            .await??;

            println!();
            for entry in &report.entries {
                println!("{}\n", entry.display_block());
            }
            println!("{}", report.summary());

            if let Some(path) = json {
                ReportWriter::new().write_report(&report, &path)?;
                println!("Report written to: {}", path.display());
            }
            if let Some(path) = csv {
                CsvWriter::new().write_entries(&report.entries, &path)?;
                println!("CSV written to: {}", path.display());
            }
        }

        Commands::Validate {
            input,
            signs,
            max_workers,
        } => {
            println!("Validating coordinate grid: {}", input.display());

            let progress = ProgressReporter::new_spinner("Validating grid...");
            let pipeline = Pipeline::new(max_workers);

            let report = tokio::task::spawn_blocking(move || {
                pipeline.process(&input, Some(signs.as_path()), Some(&progress))
            })
            .await??;

            println!("\n{}", report.summary());

            let skipped = report.out_of_bound_count() + report.failed_count();
            if skipped == 0 {
                println!("✅ All pairs decoded within bounds");
            } else {
                println!("⚠️  {} pair(s) reported and skipped:", skipped);
                for entry in report.entries.iter().filter(|e| !e.is_decoded()) {
                    println!("{}", entry.display_block());
                }
            }
        }

        Commands::Info { file } => {
            println!("Grid file: {}\n", file.display());

            let runs = GridReader::new().read(&file)?;
            println!("Longitude runs (column-wise):");
            for (i, run) in runs.longitude.iter().enumerate() {
                println!("  {:>2}: {:<12} ({} digits)", i + 1, run, run.len());
            }
            println!("\nLatitude runs (row-wise):");
            for (i, run) in runs.latitude.iter().enumerate() {
                println!("  {:>2}: {:<12} ({} digits)", i + 1, run, run.len());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}
