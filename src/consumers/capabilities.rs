use crate::consumers::{ReverseGeocoder, TimezoneInfo, TimezoneLookup};

/// Explicit capability configuration for the consumer layer, built once at
/// startup and injected into the pipeline. A capability left unset simply
/// leaves the corresponding annotation empty.
#[derive(Default)]
pub struct Capabilities {
    timezone: Option<Box<dyn TimezoneLookup>>,
    geocoder: Option<Box<dyn ReverseGeocoder>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timezone(mut self, lookup: impl TimezoneLookup + 'static) -> Self {
        self.timezone = Some(Box::new(lookup));
        self
    }

    pub fn with_geocoder(mut self, geocoder: impl ReverseGeocoder + 'static) -> Self {
        self.geocoder = Some(Box::new(geocoder));
        self
    }

    pub fn has_timezone(&self) -> bool {
        self.timezone.is_some()
    }

    pub fn has_geocoder(&self) -> bool {
        self.geocoder.is_some()
    }

    pub fn timezone_at(&self, latitude: f64, longitude: f64) -> Option<TimezoneInfo> {
        self.timezone
            .as_ref()
            .and_then(|t| t.timezone_at(latitude, longitude))
    }

    pub fn place_name(&self, latitude: f64, longitude: f64) -> Option<String> {
        self.geocoder
            .as_ref()
            .and_then(|g| g.place_name(latitude, longitude))
    }
}
