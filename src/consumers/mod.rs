//! Downstream collaborators that annotate decoded coordinates.
//!
//! The decoder has no dependency on anything here. Providers are injected
//! once at startup through [`Capabilities`]; call sites never probe for
//! optional integrations themselves.

pub mod capabilities;
pub mod timezone;

use serde::{Deserialize, Serialize};

pub use capabilities::Capabilities;
pub use timezone::SolarTimezoneEstimator;

/// Timezone resolved for a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    pub name: String,
    pub utc_offset_hours: f64,
}

/// Resolves a timezone for a coordinate pair.
pub trait TimezoneLookup: Send + Sync {
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Option<TimezoneInfo>;
}

/// Resolves a human-readable place name for a coordinate pair. Network
/// providers (and their retry policy) plug in behind this seam; none ship
/// built in.
pub trait ReverseGeocoder: Send + Sync {
    fn place_name(&self, latitude: f64, longitude: f64) -> Option<String>;
}
