use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    LATITUDE_BOUND, LATITUDE_DEGREE_WIDTH, LONGITUDE_BOUND, LONGITUDE_DEGREE_WIDTH,
};

/// Coordinate axis. Each axis carries its own degree-field width convention
/// and valid-range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Latitude,
    Longitude,
}

impl AxisKind {
    /// Maximum absolute value a signed coordinate on this axis may take.
    pub fn bound(&self) -> f64 {
        match self {
            AxisKind::Latitude => LATITUDE_BOUND,
            AxisKind::Longitude => LONGITUDE_BOUND,
        }
    }

    /// Maximum number of digits the degrees field can occupy on this axis.
    pub fn degree_width(&self) -> usize {
        match self {
            AxisKind::Latitude => LATITUDE_DEGREE_WIDTH,
            AxisKind::Longitude => LONGITUDE_DEGREE_WIDTH,
        }
    }

    /// Hemisphere letter for a signed value on this axis.
    pub fn hemisphere(&self, value: f64) -> char {
        match (self, value >= 0.0) {
            (AxisKind::Latitude, true) => 'N',
            (AxisKind::Latitude, false) => 'S',
            (AxisKind::Longitude, true) => 'E',
            (AxisKind::Longitude, false) => 'W',
        }
    }
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::Latitude => write!(f, "latitude"),
            AxisKind::Longitude => write!(f, "longitude"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_bounds() {
        assert_eq!(AxisKind::Latitude.bound(), 90.0);
        assert_eq!(AxisKind::Longitude.bound(), 180.0);
        assert_eq!(AxisKind::Latitude.degree_width(), 2);
        assert_eq!(AxisKind::Longitude.degree_width(), 3);
    }

    #[test]
    fn test_hemisphere_letters() {
        assert_eq!(AxisKind::Latitude.hemisphere(51.5), 'N');
        assert_eq!(AxisKind::Latitude.hemisphere(-33.9), 'S');
        assert_eq!(AxisKind::Longitude.hemisphere(0.0), 'E');
        assert_eq!(AxisKind::Longitude.hemisphere(-0.13), 'W');
    }
}
