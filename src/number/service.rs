//! The phone-number capability, backed by the `phonenumber` crate for
//! parsing and validation and by the built-in tables for metadata.

use super::metadata;
use super::types::{NumberError, ParsedNumber};

/// Parse/validate/metadata capability for phone numbers.
///
/// Metadata accessors return empty values when the answer is not in
/// static data; that is an honest "unknown", not an error.
pub trait PhoneNumberService {
    fn parse(&self, raw: &str) -> Result<ParsedNumber, NumberError>;

    /// Human-readable country/region name for the number, per locale.
    fn region_description(&self, number: &ParsedNumber, locale: &str) -> String;

    /// Mobile network operator, where determinable from prefix data.
    fn carrier_name(&self, number: &ParsedNumber, locale: &str) -> String;

    /// Ordered IANA time zones for the number's region.
    fn time_zones(&self, number: &ParsedNumber) -> Vec<String>;
}

/// Default implementation over `phonenumber` + built-in tables.
///
/// Locale handling: the built-in tables are English-only, so every
/// locale currently resolves to the English name.
pub struct NumberService;

impl NumberService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberService {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberService for NumberService {
    fn parse(&self, raw: &str) -> Result<ParsedNumber, NumberError> {
        // User input often carries grouping characters; strip them up
        // front so the parser sees clean digits.
        let cleaned = raw.replace(['(', ')', ' ', '-'], "");

        // The phonenumber crate has known panics on odd input, so the
        // parse runs under catch_unwind.
        let result = std::panic::catch_unwind(move || phonenumber::parse(None, cleaned));

        let number = match result {
            Ok(Ok(number)) => number,
            Ok(Err(err)) => return Err(NumberError::Parse(err.to_string())),
            Err(_) => return Err(NumberError::Parse("parser panicked".into())),
        };

        let valid = phonenumber::is_valid(&number);
        let region = number.country().id().map(|id| id.as_ref().to_string());

        Ok(ParsedNumber {
            e164: number.format().mode(phonenumber::Mode::E164).to_string(),
            country_code: number.country().code(),
            national_number: number.national().value(),
            region,
            valid,
        })
    }

    fn region_description(&self, number: &ParsedNumber, _locale: &str) -> String {
        match number.region.as_deref() {
            Some(region) => metadata::region_display_name(region)
                // The bare ISO code still geocodes; better than nothing.
                .unwrap_or(region)
                .to_string(),
            None => String::new(),
        }
    }

    fn carrier_name(&self, number: &ParsedNumber, _locale: &str) -> String {
        match number.region.as_deref() {
            Some(region) => metadata::carrier_for(region, number.national_number)
                .unwrap_or_default()
                .to_string(),
            None => String::new(),
        }
    }

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String> {
        match number.region.as_deref() {
            Some(region) => metadata::time_zones_for_region(region)
                .iter()
                .map(|z| z.to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_us_number() {
        let svc = NumberService::new();
        let parsed = svc.parse("+14155552671").unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.country_code, 1);
        assert_eq!(parsed.national_number, 4155552671);
        assert_eq!(parsed.region.as_deref(), Some("US"));
        assert_eq!(parsed.e164, "+14155552671");
    }

    #[test]
    fn test_parse_with_grouping_characters() {
        let svc = NumberService::new();
        let parsed = svc.parse("+1 (415) 555-2671").unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.national_number, 4155552671);
    }

    #[test]
    fn test_parse_garbage_fails() {
        let svc = NumberService::new();
        assert!(svc.parse("not a number").is_err());
    }

    #[test]
    fn test_too_short_number_is_invalid() {
        let svc = NumberService::new();
        // Parses, but fails the US numbering plan.
        if let Ok(parsed) = svc.parse("+1415555") {
            assert!(!parsed.valid);
        }
    }

    #[test]
    fn test_region_description_en() {
        let svc = NumberService::new();
        let parsed = svc.parse("+14155552671").unwrap();
        assert_eq!(svc.region_description(&parsed, "en"), "United States");
    }

    #[test]
    fn test_swedish_number_metadata() {
        let svc = NumberService::new();
        let parsed = svc.parse("+46701234567").unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.country_code, 46);
        assert_eq!(svc.region_description(&parsed, "en"), "Sweden");
        assert_eq!(svc.carrier_name(&parsed, "en"), "Telia");
        assert_eq!(svc.time_zones(&parsed), vec!["Europe/Stockholm"]);
    }

    #[test]
    fn test_us_carrier_unknown_is_empty() {
        let svc = NumberService::new();
        let parsed = svc.parse("+14155552671").unwrap();
        assert_eq!(svc.carrier_name(&parsed, "en"), "");
    }

    #[test]
    fn test_us_time_zones_ordered() {
        let svc = NumberService::new();
        let parsed = svc.parse("+14155552671").unwrap();
        let zones = svc.time_zones(&parsed);
        assert_eq!(zones.first().map(String::as_str), Some("America/New_York"));
        assert!(zones.contains(&"America/Los_Angeles".to_string()));
    }
}
