use serde::{Deserialize, Serialize};

use crate::models::{AxisKind, SignedCoordinate};

/// Sign applied to a decoded magnitude (north/east positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn factor(&self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// Per-axis sign sequences read from the sign specification file. Positions
/// beyond the file's entries default to positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignTable {
    pub longitude: Vec<Sign>,
    pub latitude: Vec<Sign>,
}

impl SignTable {
    pub fn latitude_sign(&self, index: usize) -> Sign {
        self.latitude.get(index).copied().unwrap_or_default()
    }

    pub fn longitude_sign(&self, index: usize) -> Sign {
        self.longitude.get(index).copied().unwrap_or_default()
    }
}

/// Apply a sign to a decoded magnitude and check the result against the axis
/// bound. Out-of-bound values are flagged, never clamped.
pub fn apply_sign(magnitude: f64, sign: Sign, axis: AxisKind) -> SignedCoordinate {
    SignedCoordinate::new(axis, magnitude * sign.factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sign() {
        let coord = apply_sign(45.0, Sign::Negative, AxisKind::Latitude);
        assert_eq!(coord.value, -45.0);
        assert!(coord.valid);

        let coord = apply_sign(45.0, Sign::Positive, AxisKind::Latitude);
        assert_eq!(coord.value, 45.0);
        assert!(coord.valid);
    }

    #[test]
    fn test_out_of_bound_flagged_not_clamped() {
        let coord = apply_sign(95.0, Sign::Positive, AxisKind::Latitude);
        assert!(!coord.valid);
        assert_eq!(coord.value, 95.0);

        let coord = apply_sign(190.5, Sign::Negative, AxisKind::Longitude);
        assert!(!coord.valid);
        assert_eq!(coord.value, -190.5);
    }

    #[test]
    fn test_bound_is_inclusive() {
        assert!(apply_sign(90.0, Sign::Negative, AxisKind::Latitude).valid);
        assert!(apply_sign(180.0, Sign::Positive, AxisKind::Longitude).valid);
    }

    #[test]
    fn test_sign_table_defaults_positive() {
        let table = SignTable {
            longitude: vec![Sign::Negative],
            latitude: vec![],
        };
        assert_eq!(table.longitude_sign(0), Sign::Negative);
        assert_eq!(table.longitude_sign(5), Sign::Positive);
        assert_eq!(table.latitude_sign(0), Sign::Positive);
    }
}
