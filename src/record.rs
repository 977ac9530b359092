//! The resolved output record and the locality extraction heuristic.

use serde::Serialize;

/// Sentinel for fields a lookup could not fill.
pub const UNKNOWN: &str = "Unknown";

/// Everything Dialscope derives from one phone number. Built once per
/// lookup, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct LocationRecord {
    pub country_description: String,
    pub carrier_name: String,
    /// Ordered IANA zones for the number's region.
    pub time_zones: Vec<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub city: String,
    pub state: String,
    /// `hh:mm AM/PM`, or "Unknown".
    pub local_time_display: String,
    pub map_query_enabled: bool,
}

impl LocationRecord {
    /// Google Maps query URL, when coordinates exist.
    pub fn map_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                Some(format!("https://www.google.com/maps?q={},{}", lat, lon))
            }
            _ => None,
        }
    }
}

/// Extract (city, state) from a geocoder's comma-separated address by
/// fixed positional offset from the end: 5th-from-last token is the
/// city, 3rd-from-last the state.
///
/// Precondition: the address needs more than 4 tokens for a city and
/// more than 2 for a state; below that the field is "Unknown". This is
/// an offset convention observed in Nominatim display names, not a
/// semantic address parser — swap it for an address-details API before
/// trying to make it smarter.
pub fn locality_from_address(address: &str) -> (String, String) {
    let parts: Vec<&str> = address.split(',').collect();

    let city = if parts.len() > 4 {
        parts[parts.len() - 5].trim().to_string()
    } else {
        UNKNOWN.to_string()
    };

    let state = if parts.len() > 2 {
        parts[parts.len() - 3].trim().to_string()
    } else {
        UNKNOWN.to_string()
    };

    (city, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_five_tokens() {
        let (city, state) =
            locality_from_address("123 Main St, Springfield, Sangamon County, Illinois, USA");
        assert_eq!(city, "123 Main St");
        assert_eq!(state, "Sangamon County");
    }

    #[test]
    fn test_locality_many_tokens() {
        let (city, state) = locality_from_address(
            "Gamla stan, Stockholm, Stockholms kommun, Stockholms län, 111 29, Sverige",
        );
        // 6 tokens: city = [-5] = "Stockholm", state = [-3] = "Stockholms län"
        assert_eq!(city, "Stockholm");
        assert_eq!(state, "Stockholms län");
    }

    #[test]
    fn test_locality_four_tokens_city_unknown() {
        let (city, state) = locality_from_address("Springfield, Sangamon County, Illinois, USA");
        assert_eq!(city, UNKNOWN);
        assert_eq!(state, "Sangamon County");
    }

    #[test]
    fn test_locality_three_tokens() {
        let (city, state) = locality_from_address("a, b, c");
        assert_eq!(city, UNKNOWN);
        assert_eq!(state, "a");
    }

    #[test]
    fn test_locality_too_few_tokens() {
        let (city, state) = locality_from_address("United States");
        assert_eq!(city, UNKNOWN);
        assert_eq!(state, UNKNOWN);

        let (city, state) = locality_from_address("a, b");
        assert_eq!(city, UNKNOWN);
        assert_eq!(state, UNKNOWN);
    }

    #[test]
    fn test_locality_trims_whitespace() {
        let (city, state) = locality_from_address("x,  padded city , b,  padded state , e");
        assert_eq!(city, "padded city");
        assert_eq!(state, "padded state");
    }

    #[test]
    fn test_map_url() {
        let record = LocationRecord {
            country_description: "Sweden".into(),
            carrier_name: String::new(),
            time_zones: vec![],
            longitude: Some(14.5209),
            latitude: Some(59.6749),
            city: UNKNOWN.into(),
            state: UNKNOWN.into(),
            local_time_display: UNKNOWN.into(),
            map_query_enabled: true,
        };
        assert_eq!(
            record.map_url().unwrap(),
            "https://www.google.com/maps?q=59.6749,14.5209"
        );
    }

    #[test]
    fn test_map_url_without_coords() {
        let record = LocationRecord {
            country_description: "Sweden".into(),
            carrier_name: String::new(),
            time_zones: vec![],
            longitude: None,
            latitude: None,
            city: UNKNOWN.into(),
            state: UNKNOWN.into(),
            local_time_display: UNKNOWN.into(),
            map_query_enabled: false,
        };
        assert!(record.map_url().is_none());
    }
}
