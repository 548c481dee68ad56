pub mod angle;
pub mod axis;
pub mod coordinate;
pub mod digit_run;

pub use angle::DecodedAngle;
pub use axis::AxisKind;
pub use coordinate::{CoordinatePair, SignedCoordinate};
pub use digit_run::DigitRun;
