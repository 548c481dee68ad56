use crate::models::AxisKind;

/// Split a decimal-degree value into (degrees, minutes, seconds) on its
/// absolute value. The sign is rendered separately as a hemisphere letter.
pub fn decimal_to_dms(decimal: f64) -> (u32, u32, f64) {
    let abs_decimal = decimal.abs();

    let degrees = abs_decimal.floor() as u32;
    let minutes_decimal = (abs_decimal - degrees as f64) * 60.0;
    let minutes = minutes_decimal.floor() as u32;
    let seconds = (minutes_decimal - minutes as f64) * 60.0;

    (degrees, minutes, seconds)
}

/// Format DMS sub-fields as `32° 45' 6.00"`.
pub fn format_dms(degrees: u32, minutes: u32, seconds: f64) -> String {
    format!("{}\u{b0} {}' {:.2}\"", degrees, minutes, seconds)
}

/// Format a signed value on one axis with its hemisphere letter,
/// e.g. `32° 45' 6.00" N`.
pub fn format_axis_value(value: f64, axis: AxisKind) -> String {
    let (d, m, s) = decimal_to_dms(value);
    format!("{} {}", format_dms(d, m, s), axis.hemisphere(value))
}

/// Format a full position, latitude first: `32° 45' 6.00" N, 30° 47' 16.00" E`.
pub fn format_position(latitude: f64, longitude: f64) -> String {
    format!(
        "{}, {}",
        format_axis_value(latitude, AxisKind::Latitude),
        format_axis_value(longitude, AxisKind::Longitude)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_dms() {
        let (d, m, s) = decimal_to_dms(32.751_666_666_666_664);
        assert_eq!(d, 32);
        assert_eq!(m, 45);
        assert!((s - 6.0).abs() < 1e-6);

        // Sign is dropped; formatting attaches the hemisphere letter instead
        let (d, m, s) = decimal_to_dms(-0.1275);
        assert_eq!(d, 0);
        assert_eq!(m, 7);
        assert!((s - 39.0).abs() < 1e-6);
    }

    #[test]
    fn test_format_dms() {
        assert_eq!(format_dms(32, 45, 6.0), "32\u{b0} 45' 6.00\"");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(
            format_axis_value(-33.0, AxisKind::Latitude),
            "33\u{b0} 0' 0.00\" S"
        );
        assert_eq!(
            format_axis_value(30.5, AxisKind::Longitude),
            "30\u{b0} 30' 0.00\" E"
        );
    }
}
