//! Built-in number metadata: region display names, carrier prefixes,
//! and region → IANA time-zone lists.
//!
//! These tables stand in for a full offline carrier/geocoding database.
//! They cover the common calling regions; a miss returns an empty
//! string / empty slice, which the resolver treats as "unknown", never
//! as an error.

/// English display name for an ISO 3166-1 alpha-2 region.
pub fn region_display_name(region: &str) -> Option<&'static str> {
    let name = match region {
        "US" => "United States",
        "CA" => "Canada",
        "MX" => "Mexico",
        "BR" => "Brazil",
        "AR" => "Argentina",
        "CO" => "Colombia",
        "PE" => "Peru",
        "CL" => "Chile",
        "GB" => "United Kingdom",
        "IE" => "Ireland",
        "FR" => "France",
        "DE" => "Germany",
        "IT" => "Italy",
        "ES" => "Spain",
        "PT" => "Portugal",
        "NL" => "Netherlands",
        "BE" => "Belgium",
        "CH" => "Switzerland",
        "AT" => "Austria",
        "SE" => "Sweden",
        "NO" => "Norway",
        "DK" => "Denmark",
        "FI" => "Finland",
        "IS" => "Iceland",
        "PL" => "Poland",
        "CZ" => "Czechia",
        "HU" => "Hungary",
        "RO" => "Romania",
        "GR" => "Greece",
        "TR" => "Turkey",
        "RU" => "Russia",
        "UA" => "Ukraine",
        "SA" => "Saudi Arabia",
        "AE" => "United Arab Emirates",
        "QA" => "Qatar",
        "KW" => "Kuwait",
        "OM" => "Oman",
        "BH" => "Bahrain",
        "YE" => "Yemen",
        "JO" => "Jordan",
        "LB" => "Lebanon",
        "SY" => "Syria",
        "IQ" => "Iraq",
        "IR" => "Iran",
        "IL" => "Israel",
        "PS" => "Palestine",
        "EG" => "Egypt",
        "MA" => "Morocco",
        "DZ" => "Algeria",
        "TN" => "Tunisia",
        "NG" => "Nigeria",
        "KE" => "Kenya",
        "ET" => "Ethiopia",
        "TZ" => "Tanzania",
        "ZA" => "South Africa",
        "GH" => "Ghana",
        "IN" => "India",
        "PK" => "Pakistan",
        "BD" => "Bangladesh",
        "LK" => "Sri Lanka",
        "NP" => "Nepal",
        "AF" => "Afghanistan",
        "CN" => "China",
        "JP" => "Japan",
        "KR" => "South Korea",
        "TH" => "Thailand",
        "VN" => "Vietnam",
        "PH" => "Philippines",
        "MY" => "Malaysia",
        "SG" => "Singapore",
        "ID" => "Indonesia",
        "AU" => "Australia",
        "NZ" => "New Zealand",
        "KZ" => "Kazakhstan",
        "UZ" => "Uzbekistan",
        "AZ" => "Azerbaijan",
        "GE" => "Georgia",
        _ => return None,
    };
    Some(name)
}

// ─── Carrier prefixes ───────────────────────────────────────────

struct CarrierPrefix {
    region: &'static str,
    /// Prefix of the national significant number, digits only.
    prefix: &'static str,
    carrier: &'static str,
}

const CARRIER_PREFIXES: &[CarrierPrefix] = &[
    // United Kingdom mobile ranges
    CarrierPrefix { region: "GB", prefix: "7400", carrier: "Three" },
    CarrierPrefix { region: "GB", prefix: "7402", carrier: "O2" },
    CarrierPrefix { region: "GB", prefix: "7500", carrier: "Vodafone" },
    CarrierPrefix { region: "GB", prefix: "7511", carrier: "EE" },
    CarrierPrefix { region: "GB", prefix: "7700", carrier: "Vodafone" },
    CarrierPrefix { region: "GB", prefix: "79", carrier: "Vodafone" },
    // Sweden
    CarrierPrefix { region: "SE", prefix: "70", carrier: "Telia" },
    CarrierPrefix { region: "SE", prefix: "72", carrier: "Tele2" },
    CarrierPrefix { region: "SE", prefix: "73", carrier: "Tre" },
    CarrierPrefix { region: "SE", prefix: "76", carrier: "Telenor" },
    // Germany
    CarrierPrefix { region: "DE", prefix: "151", carrier: "Telekom" },
    CarrierPrefix { region: "DE", prefix: "152", carrier: "Vodafone" },
    CarrierPrefix { region: "DE", prefix: "157", carrier: "E-Plus" },
    CarrierPrefix { region: "DE", prefix: "176", carrier: "O2" },
    // France
    CarrierPrefix { region: "FR", prefix: "607", carrier: "Orange" },
    CarrierPrefix { region: "FR", prefix: "611", carrier: "SFR" },
    CarrierPrefix { region: "FR", prefix: "640", carrier: "Free Mobile" },
    CarrierPrefix { region: "FR", prefix: "660", carrier: "Bouygues Telecom" },
    // India
    CarrierPrefix { region: "IN", prefix: "70", carrier: "Jio" },
    CarrierPrefix { region: "IN", prefix: "90", carrier: "Airtel" },
    CarrierPrefix { region: "IN", prefix: "98", carrier: "Vodafone Idea" },
    CarrierPrefix { region: "IN", prefix: "99", carrier: "Airtel" },
    // Pakistan
    CarrierPrefix { region: "PK", prefix: "300", carrier: "Jazz" },
    CarrierPrefix { region: "PK", prefix: "313", carrier: "Zong" },
    CarrierPrefix { region: "PK", prefix: "333", carrier: "Ufone" },
    CarrierPrefix { region: "PK", prefix: "345", carrier: "Telenor" },
    // Saudi Arabia
    CarrierPrefix { region: "SA", prefix: "50", carrier: "STC" },
    CarrierPrefix { region: "SA", prefix: "54", carrier: "Mobily" },
    CarrierPrefix { region: "SA", prefix: "59", carrier: "Zain" },
    // Egypt
    CarrierPrefix { region: "EG", prefix: "10", carrier: "Vodafone" },
    CarrierPrefix { region: "EG", prefix: "11", carrier: "Etisalat" },
    CarrierPrefix { region: "EG", prefix: "12", carrier: "Orange" },
    // Nigeria
    CarrierPrefix { region: "NG", prefix: "803", carrier: "MTN" },
    CarrierPrefix { region: "NG", prefix: "805", carrier: "Glo" },
    CarrierPrefix { region: "NG", prefix: "802", carrier: "Airtel" },
    // Indonesia
    CarrierPrefix { region: "ID", prefix: "811", carrier: "Telkomsel" },
    CarrierPrefix { region: "ID", prefix: "814", carrier: "Indosat" },
    CarrierPrefix { region: "ID", prefix: "817", carrier: "XL Axiata" },
    // Japan
    CarrierPrefix { region: "JP", prefix: "70", carrier: "SoftBank" },
    CarrierPrefix { region: "JP", prefix: "80", carrier: "au" },
    CarrierPrefix { region: "JP", prefix: "90", carrier: "NTT Docomo" },
    // Australia
    CarrierPrefix { region: "AU", prefix: "400", carrier: "Telstra" },
    CarrierPrefix { region: "AU", prefix: "411", carrier: "Optus" },
    CarrierPrefix { region: "AU", prefix: "420", carrier: "Vodafone" },
];

/// Carrier for a national number, longest matching prefix wins.
/// NANP numbers carry no carrier prefix in static data, so US/CA
/// lookups legitimately come back empty.
pub fn carrier_for(region: &str, national_number: u64) -> Option<&'static str> {
    let digits = national_number.to_string();
    CARRIER_PREFIXES
        .iter()
        .filter(|c| c.region == region && digits.starts_with(c.prefix))
        .max_by_key(|c| c.prefix.len())
        .map(|c| c.carrier)
}

// ─── Time zones per region ──────────────────────────────────────

/// Ordered IANA time zones for a region, east to west where a region
/// spans several.
pub fn time_zones_for_region(region: &str) -> &'static [&'static str] {
    match region {
        "US" => &[
            "America/New_York",
            "America/Chicago",
            "America/Denver",
            "America/Phoenix",
            "America/Los_Angeles",
            "America/Anchorage",
            "Pacific/Honolulu",
        ],
        "CA" => &[
            "America/St_Johns",
            "America/Halifax",
            "America/Toronto",
            "America/Winnipeg",
            "America/Edmonton",
            "America/Vancouver",
        ],
        "MX" => &["America/Mexico_City", "America/Chihuahua", "America/Tijuana"],
        "BR" => &["America/Sao_Paulo", "America/Manaus", "America/Rio_Branco"],
        "AR" => &["America/Argentina/Buenos_Aires"],
        "CO" => &["America/Bogota"],
        "PE" => &["America/Lima"],
        "CL" => &["America/Santiago"],
        "GB" => &["Europe/London"],
        "IE" => &["Europe/Dublin"],
        "FR" => &["Europe/Paris"],
        "DE" => &["Europe/Berlin"],
        "IT" => &["Europe/Rome"],
        "ES" => &["Europe/Madrid", "Atlantic/Canary"],
        "PT" => &["Europe/Lisbon", "Atlantic/Azores"],
        "NL" => &["Europe/Amsterdam"],
        "BE" => &["Europe/Brussels"],
        "CH" => &["Europe/Zurich"],
        "AT" => &["Europe/Vienna"],
        "SE" => &["Europe/Stockholm"],
        "NO" => &["Europe/Oslo"],
        "DK" => &["Europe/Copenhagen"],
        "FI" => &["Europe/Helsinki"],
        "IS" => &["Atlantic/Reykjavik"],
        "PL" => &["Europe/Warsaw"],
        "CZ" => &["Europe/Prague"],
        "HU" => &["Europe/Budapest"],
        "RO" => &["Europe/Bucharest"],
        "GR" => &["Europe/Athens"],
        "TR" => &["Europe/Istanbul"],
        "RU" => &[
            "Europe/Kaliningrad",
            "Europe/Moscow",
            "Asia/Yekaterinburg",
            "Asia/Novosibirsk",
            "Asia/Irkutsk",
            "Asia/Vladivostok",
            "Asia/Kamchatka",
        ],
        "UA" => &["Europe/Kyiv"],
        "SA" => &["Asia/Riyadh"],
        "AE" => &["Asia/Dubai"],
        "QA" => &["Asia/Qatar"],
        "KW" => &["Asia/Kuwait"],
        "OM" => &["Asia/Muscat"],
        "BH" => &["Asia/Bahrain"],
        "JO" => &["Asia/Amman"],
        "LB" => &["Asia/Beirut"],
        "IQ" => &["Asia/Baghdad"],
        "IR" => &["Asia/Tehran"],
        "IL" => &["Asia/Jerusalem"],
        "PS" => &["Asia/Gaza", "Asia/Hebron"],
        "EG" => &["Africa/Cairo"],
        "MA" => &["Africa/Casablanca"],
        "DZ" => &["Africa/Algiers"],
        "TN" => &["Africa/Tunis"],
        "NG" => &["Africa/Lagos"],
        "KE" => &["Africa/Nairobi"],
        "ET" => &["Africa/Addis_Ababa"],
        "TZ" => &["Africa/Dar_es_Salaam"],
        "ZA" => &["Africa/Johannesburg"],
        "GH" => &["Africa/Accra"],
        "IN" => &["Asia/Kolkata"],
        "PK" => &["Asia/Karachi"],
        "BD" => &["Asia/Dhaka"],
        "LK" => &["Asia/Colombo"],
        "NP" => &["Asia/Kathmandu"],
        "AF" => &["Asia/Kabul"],
        "CN" => &["Asia/Shanghai", "Asia/Urumqi"],
        "JP" => &["Asia/Tokyo"],
        "KR" => &["Asia/Seoul"],
        "TH" => &["Asia/Bangkok"],
        "VN" => &["Asia/Ho_Chi_Minh"],
        "PH" => &["Asia/Manila"],
        "MY" => &["Asia/Kuala_Lumpur"],
        "SG" => &["Asia/Singapore"],
        "ID" => &["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura"],
        "AU" => &[
            "Australia/Sydney",
            "Australia/Brisbane",
            "Australia/Adelaide",
            "Australia/Darwin",
            "Australia/Perth",
        ],
        "NZ" => &["Pacific/Auckland"],
        "KZ" => &["Asia/Almaty", "Asia/Aqtobe"],
        "UZ" => &["Asia/Tashkent"],
        "AZ" => &["Asia/Baku"],
        "GE" => &["Asia/Tbilisi"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_display_name() {
        assert_eq!(region_display_name("US"), Some("United States"));
        assert_eq!(region_display_name("SE"), Some("Sweden"));
        assert_eq!(region_display_name("ZZ"), None);
    }

    #[test]
    fn test_carrier_prefix_match() {
        // Swedish mobile 70-xxx-xxxx → Telia
        assert_eq!(carrier_for("SE", 701234567), Some("Telia"));
        assert_eq!(carrier_for("SE", 761234567), Some("Telenor"));
    }

    #[test]
    fn test_carrier_longest_prefix_wins() {
        // GB 79... matches "79"; 7500... matches the longer "7500"
        assert_eq!(carrier_for("GB", 7912345678), Some("Vodafone"));
        assert_eq!(carrier_for("GB", 7500123456), Some("Vodafone"));
        assert_eq!(carrier_for("GB", 7511123456), Some("EE"));
    }

    #[test]
    fn test_carrier_unknown_region() {
        assert_eq!(carrier_for("US", 4155552671), None);
        assert_eq!(carrier_for("ZZ", 123456789), None);
    }

    #[test]
    fn test_time_zones_ordered() {
        let us = time_zones_for_region("US");
        assert_eq!(us.first(), Some(&"America/New_York"));
        assert_eq!(us.last(), Some(&"Pacific/Honolulu"));
        assert_eq!(time_zones_for_region("SE"), &["Europe/Stockholm"]);
        assert!(time_zones_for_region("ZZ").is_empty());
    }
}
