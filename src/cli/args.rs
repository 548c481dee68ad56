use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_GRID_FILE, DEFAULT_SIGNS_FILE};

#[derive(Parser)]
#[command(name = "coordgrid")]
#[command(about = "Delimiter-free DMS coordinate grid decoder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a coordinate grid and report each pair
    Decode {
        #[arg(short, long, help = "Input grid file", default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Sign specification file (all signs default to +1 when missing)",
            default_value = DEFAULT_SIGNS_FILE
        )]
        signs: PathBuf,

        #[arg(long, help = "Write the full report as JSON")]
        json: Option<PathBuf>,

        #[arg(long, help = "Write decoded pairs as CSV")]
        csv: Option<PathBuf>,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,

        #[arg(long, default_value = "false", help = "Skip timezone annotation")]
        no_timezone: bool,
    },

    /// Decode without annotation and summarize valid/failed pairs
    Validate {
        #[arg(short, long, help = "Input grid file", default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Sign specification file (all signs default to +1 when missing)",
            default_value = DEFAULT_SIGNS_FILE
        )]
        signs: PathBuf,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Show the raw digit-run extraction for a grid file
    Info {
        #[arg(short, long)]
        file: PathBuf,
    },
}
