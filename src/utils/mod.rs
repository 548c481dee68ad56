pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{decimal_to_dms, format_dms, format_position};
pub use progress::ProgressReporter;
