pub mod cli;
pub mod consumers;
pub mod decoder;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod resolvers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
