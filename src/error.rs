use thiserror::Error;

use crate::models::AxisKind;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty digit run")]
    EmptyDigitRun,

    #[error("No valid segmentation for {axis} digit run '{digits}'")]
    UnparseableDigitRun { axis: AxisKind, digits: String },

    #[error("Digit run '{digits}' contains non-digit characters")]
    InvalidDigitRun { digits: String },

    #[error("Invalid grid format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
