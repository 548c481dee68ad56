use crate::consumers::{TimezoneInfo, TimezoneLookup};
use crate::utils::constants::DEGREES_PER_HOUR;

/// Network-free timezone estimate from longitude alone: one hour per 15
/// degrees, named as the matching `Etc/GMT` zone. Political timezone
/// boundaries obviously diverge from solar time; this is the built-in
/// fallback when no real provider is injected.
pub struct SolarTimezoneEstimator;

impl TimezoneLookup for SolarTimezoneEstimator {
    fn timezone_at(&self, _latitude: f64, longitude: f64) -> Option<TimezoneInfo> {
        let offset = (longitude / DEGREES_PER_HOUR).round().clamp(-12.0, 12.0);
        let offset_int = offset as i32;

        // Etc/GMT zone names carry the inverse sign: UTC+2 is Etc/GMT-2
        let name = if offset_int == 0 {
            "Etc/GMT".to_string()
        } else {
            format!("Etc/GMT{:+}", -offset_int)
        };

        Some(TimezoneInfo {
            name,
            utc_offset_hours: offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_longitude() {
        let tz = SolarTimezoneEstimator.timezone_at(0.0, 30.0).unwrap();
        assert_eq!(tz.utc_offset_hours, 2.0);
        assert_eq!(tz.name, "Etc/GMT-2");

        let tz = SolarTimezoneEstimator.timezone_at(40.0, -75.0).unwrap();
        assert_eq!(tz.utc_offset_hours, -5.0);
        assert_eq!(tz.name, "Etc/GMT+5");
    }

    #[test]
    fn test_zero_offset_zone_name() {
        let tz = SolarTimezoneEstimator.timezone_at(51.5, 0.1).unwrap();
        assert_eq!(tz.name, "Etc/GMT");
        assert_eq!(tz.utc_offset_hours, 0.0);
    }

    #[test]
    fn test_antimeridian_clamped() {
        let tz = SolarTimezoneEstimator.timezone_at(0.0, 179.9).unwrap();
        assert_eq!(tz.utc_offset_hours, 12.0);
        let tz = SolarTimezoneEstimator.timezone_at(0.0, -179.9).unwrap();
        assert_eq!(tz.utc_offset_hours, -12.0);
    }

    #[test]
    fn test_latitude_is_irrelevant() {
        let a = SolarTimezoneEstimator.timezone_at(-80.0, 45.0).unwrap();
        let b = SolarTimezoneEstimator.timezone_at(80.0, 45.0).unwrap();
        assert_eq!(a, b);
    }
}
