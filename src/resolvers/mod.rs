pub mod sign;

pub use sign::{apply_sign, Sign, SignTable};
