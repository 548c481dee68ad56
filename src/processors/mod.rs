pub mod pipeline;
pub mod report;

pub use pipeline::Pipeline;
pub use report::{PairEntry, PairOutcome, ProcessingReport};
