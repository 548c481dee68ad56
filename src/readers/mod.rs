pub mod grid_reader;
pub mod sign_reader;

pub use grid_reader::{AxisRuns, GridReader};
pub use sign_reader::SignReader;
