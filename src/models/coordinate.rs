use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AxisKind;

/// A decoded magnitude with its sign applied. `valid` is false when the
/// signed value falls outside the axis bound; such coordinates are reported
/// and skipped, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignedCoordinate {
    pub axis: AxisKind,
    pub value: f64,
    pub valid: bool,
}

impl SignedCoordinate {
    pub fn new(axis: AxisKind, value: f64) -> Self {
        Self {
            axis,
            value,
            valid: value.abs() <= axis.bound(),
        }
    }
}

/// One fully resolved (latitude, longitude) pair, indexed by its 1-based
/// position in the grid.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CoordinatePair {
    pub index: usize,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl CoordinatePair {
    pub fn new(index: usize, latitude: f64, longitude: f64) -> Self {
        Self {
            index,
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_coordinate_validity() {
        assert!(SignedCoordinate::new(AxisKind::Latitude, -45.0).valid);
        assert!(SignedCoordinate::new(AxisKind::Latitude, 90.0).valid);
        assert!(!SignedCoordinate::new(AxisKind::Latitude, 95.0).valid);
        assert!(SignedCoordinate::new(AxisKind::Longitude, 175.0).valid);
        assert!(!SignedCoordinate::new(AxisKind::Longitude, -180.5).valid);
    }

    #[test]
    fn test_pair_validation() {
        let pair = CoordinatePair::new(1, 32.751667, -30.787778);
        assert!(pair.validate().is_ok());

        let bad = CoordinatePair::new(2, 95.0, 0.0);
        assert!(bad.validate().is_err());
    }
}
