//! The resolver — primary public API for Dialscope.
//!
//! Turns a raw phone-number string into a [`LocationRecord`] by
//! composing three capabilities: phone-number parsing/metadata,
//! geocoding, and coordinate-to-local-time. The resolver itself holds
//! no lookup state; each call builds a fresh record.

use crate::clock::{Clock, LocalTimeService};
use crate::geo::{Geocoder, GeocodingService};
use crate::number::{NumberService, PhoneNumberService};
use crate::record::{locality_from_address, LocationRecord, UNKNOWN};
use std::fmt;

/// Resolution failures. Downstream lookup misses are not failures —
/// they degrade to "Unknown" fields in an otherwise successful record.
#[derive(Debug)]
pub enum ResolutionError {
    /// Input is not a parsable, valid phone number.
    InvalidNumber,
    /// A collaborator call itself failed (network, bad response).
    LookupFailed(String),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "Please enter a valid phone number"),
            Self::LookupFailed(msg) => write!(f, "Lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for ResolutionError {}

/// The number resolver with its three injected capabilities.
pub struct NumberResolver<P, G, T> {
    numbers: P,
    geocoder: G,
    clock: T,
    locale: String,
}

impl NumberResolver<NumberService, Geocoder, Clock> {
    /// The default capability stack: `phonenumber` + built-in tables,
    /// cached Nominatim geocoding, timeapi.io zone lookup.
    pub fn new() -> Self {
        Self::with_services(NumberService::new(), Geocoder::new(), Clock::new())
    }

    /// Offline mode — both network capabilities fall back to built-in
    /// data only.
    pub fn set_offline(&mut self, offline: bool) {
        self.geocoder.set_offline(offline);
        self.clock.set_offline(offline);
    }
}

impl Default for NumberResolver<NumberService, Geocoder, Clock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, G, T> NumberResolver<P, G, T>
where
    P: PhoneNumberService,
    G: GeocodingService,
    T: LocalTimeService,
{
    pub fn with_services(numbers: P, geocoder: G, clock: T) -> Self {
        Self {
            numbers,
            geocoder,
            clock,
            locale: "en".to_string(),
        }
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
    }

    /// Resolve a raw phone-number string into a location record.
    ///
    /// Only invalid input and collaborator failures are errors; a
    /// number the geocoder cannot place still yields a record with
    /// "Unknown" locality fields and the map action disabled.
    pub fn resolve(&mut self, raw: &str) -> Result<LocationRecord, ResolutionError> {
        let parsed = self
            .numbers
            .parse(raw)
            .map_err(|_| ResolutionError::InvalidNumber)?;
        if !parsed.valid {
            return Err(ResolutionError::InvalidNumber);
        }

        let country_description = self.numbers.region_description(&parsed, &self.locale);
        let carrier_name = self.numbers.carrier_name(&parsed, &self.locale);
        let time_zones = self.numbers.time_zones(&parsed);

        // The region name, not the number, drives the coordinate
        // lookup. Deliberately lossy: a country-level query resolves to
        // one representative point, so locality is approximate at best.
        // An empty description has nothing to geocode; the collaborator
        // is never called and the record degrades to the no-match path.
        let found = if country_description.trim().is_empty() {
            None
        } else {
            self.geocoder
                .geocode(&country_description)
                .map_err(|e| ResolutionError::LookupFailed(e.to_string()))?
        };

        let record = match found {
            Some(place) => {
                let (city, state) = locality_from_address(&place.address);
                let local_time_display = self
                    .clock
                    .timezone_at(place.lat, place.lon)
                    .and_then(|zone| self.clock.current_time_in(&zone))
                    .unwrap_or_else(|| UNKNOWN.to_string());

                LocationRecord {
                    country_description,
                    carrier_name,
                    time_zones,
                    longitude: Some(place.lon),
                    latitude: Some(place.lat),
                    city,
                    state,
                    local_time_display,
                    map_query_enabled: true,
                }
            }
            None => LocationRecord {
                country_description,
                carrier_name,
                time_zones,
                longitude: None,
                latitude: None,
                city: UNKNOWN.to_string(),
                state: UNKNOWN.to_string(),
                local_time_display: UNKNOWN.to_string(),
                map_query_enabled: false,
            },
        };

        Ok(record)
    }
}
