//! Geocoding providers: Nominatim and a built-in country dataset.

use super::types::{GeoError, GeoMatch, GeoSource};
use serde::Deserialize;
use std::time::Duration;

const NOMINATIM_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Dialscope/0.3 (phone-number-lookup)";

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinPlace {
    names: &'static [&'static str], // canonical + aliases, lowercase
    lat: f64,
    lon: f64,
    address: &'static str,
}

const BUILTIN_PLACES: &[BuiltinPlace] = &[
    BuiltinPlace {
        names: &["united states", "usa", "us"],
        lat: 39.7837, lon: -100.4459,
        address: "United States",
    },
    BuiltinPlace {
        names: &["canada"],
        lat: 61.0667, lon: -107.9917,
        address: "Canada",
    },
    BuiltinPlace {
        names: &["mexico"],
        lat: 23.6585, lon: -102.0077,
        address: "México",
    },
    BuiltinPlace {
        names: &["brazil", "brasil"],
        lat: -10.3333, lon: -53.2,
        address: "Brasil",
    },
    BuiltinPlace {
        names: &["united kingdom", "uk", "gb"],
        lat: 54.7024, lon: -3.2766,
        address: "United Kingdom",
    },
    BuiltinPlace {
        names: &["ireland"],
        lat: 52.865, lon: -7.9794,
        address: "Éire / Ireland",
    },
    BuiltinPlace {
        names: &["france"],
        lat: 46.6034, lon: 1.8883,
        address: "France",
    },
    BuiltinPlace {
        names: &["germany", "deutschland"],
        lat: 51.1638, lon: 10.4478,
        address: "Deutschland",
    },
    BuiltinPlace {
        names: &["italy", "italia"],
        lat: 42.6384, lon: 12.6743,
        address: "Italia",
    },
    BuiltinPlace {
        names: &["spain", "españa"],
        lat: 39.3261, lon: -4.8379,
        address: "España",
    },
    BuiltinPlace {
        names: &["sweden", "sverige"],
        lat: 59.6749, lon: 14.5209,
        address: "Sverige",
    },
    BuiltinPlace {
        names: &["norway", "norge"],
        lat: 61.1529, lon: 8.7876,
        address: "Norge",
    },
    BuiltinPlace {
        names: &["turkey", "türkiye"],
        lat: 38.9597, lon: 34.9249,
        address: "Türkiye",
    },
    BuiltinPlace {
        names: &["russia"],
        lat: 64.6863, lon: 97.7453,
        address: "Россия",
    },
    BuiltinPlace {
        names: &["saudi arabia", "ksa"],
        lat: 25.6243, lon: 42.3528,
        address: "السعودية",
    },
    BuiltinPlace {
        names: &["united arab emirates", "uae"],
        lat: 24.0002, lon: 53.9995,
        address: "الإمارات العربية المتحدة",
    },
    BuiltinPlace {
        names: &["egypt"],
        lat: 26.2540, lon: 29.2675,
        address: "مصر",
    },
    BuiltinPlace {
        names: &["nigeria"],
        lat: 9.6, lon: 7.9999,
        address: "Nigeria",
    },
    BuiltinPlace {
        names: &["kenya"],
        lat: 1.4419, lon: 38.4314,
        address: "Kenya",
    },
    BuiltinPlace {
        names: &["south africa"],
        lat: -28.8166, lon: 24.9916,
        address: "South Africa",
    },
    BuiltinPlace {
        names: &["india"],
        lat: 22.3511, lon: 78.6677,
        address: "India",
    },
    BuiltinPlace {
        names: &["pakistan"],
        lat: 30.3308, lon: 71.2475,
        address: "Pakistan",
    },
    BuiltinPlace {
        names: &["bangladesh"],
        lat: 24.4769, lon: 90.2934,
        address: "বাংলাদেশ",
    },
    BuiltinPlace {
        names: &["china"],
        lat: 35.0, lon: 105.0,
        address: "中国",
    },
    BuiltinPlace {
        names: &["japan"],
        lat: 36.5748, lon: 139.2394,
        address: "日本",
    },
    BuiltinPlace {
        names: &["south korea"],
        lat: 36.638, lon: 127.6961,
        address: "대한민국",
    },
    BuiltinPlace {
        names: &["indonesia"],
        lat: -2.4833, lon: 117.8903,
        address: "Indonesia",
    },
    BuiltinPlace {
        names: &["australia"],
        lat: -24.7761, lon: 134.755,
        address: "Australia",
    },
    BuiltinPlace {
        names: &["new zealand", "aotearoa"],
        lat: -41.5001, lon: 172.8344,
        address: "New Zealand / Aotearoa",
    },
];

/// Look up a place in the built-in dataset. Exact name match first,
/// then substring. Queries are region names produced by our own
/// metadata tables, so no fuzzy matching is needed here.
pub fn builtin_geocode(query: &str) -> Option<GeoMatch> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    for place in BUILTIN_PLACES {
        if place.names.iter().any(|n| *n == q) {
            return Some(builtin_to_match(place));
        }
    }

    for place in BUILTIN_PLACES {
        if place.names.iter().any(|n| n.contains(&q) || q.contains(n)) {
            return Some(builtin_to_match(place));
        }
    }

    None
}

fn builtin_to_match(place: &BuiltinPlace) -> GeoMatch {
    GeoMatch {
        lat: place.lat,
        lon: place.lon,
        address: place.address.to_string(),
        source: GeoSource::Builtin,
    }
}

// ─── Nominatim provider ─────────────────────────────────────────

#[derive(Deserialize, Debug, Clone)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocode a free-text place query via OpenStreetMap Nominatim.
/// Returns `Ok(None)` when the provider has no match.
pub fn nominatim_geocode(query: &str) -> Result<Option<GeoMatch>, GeoError> {
    let url = format!(
        "https://nominatim.openstreetmap.org/search?q={}&format=json&limit=1&addressdetails=0",
        urlencode(query),
    );

    let response = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(NOMINATIM_TIMEOUT)
        .call()
        .map_err(|e| GeoError::Network(e.to_string()))?;

    let results: Vec<NominatimResult> = response
        .into_json()
        .map_err(|e| GeoError::InvalidResponse(e.to_string()))?;

    let top = match results.first() {
        Some(r) => r,
        None => return Ok(None),
    };

    let lat: f64 = top
        .lat
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad latitude '{}'", top.lat)))?;
    let lon: f64 = top
        .lon
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad longitude '{}'", top.lon)))?;

    Ok(Some(GeoMatch {
        lat,
        lon,
        address: top.display_name.clone(),
        source: GeoSource::Nominatim,
    }))
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

pub fn urlencode(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            _ if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '~' => {
                out.push(c);
            }
            // Everything else is percent-encoded per UTF-8 byte.
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}
