//! Geocoding service — orchestrates the fallback chain.
//!
//! Online:  cache → Nominatim → built-in dataset
//! Offline: cache → built-in dataset
//!
//! A provider "no match" is `Ok(None)`; only a failed network call
//! with no usable fallback surfaces as an error.

use super::cache::GeoCache;
use super::providers;
use super::types::{GeoError, GeoMatch};

/// A free-text place query → coordinates + address capability.
pub trait GeocodingService {
    fn geocode(&mut self, query: &str) -> Result<Option<GeoMatch>, GeoError>;
}

/// Default geocoder with cache, Nominatim, and built-in fallback.
pub struct Geocoder {
    cache: GeoCache,
    offline: bool,
}

impl Geocoder {
    pub fn new() -> Self {
        Self {
            cache: GeoCache::load(),
            offline: false,
        }
    }

    /// Create a geocoder with a specific cache (for testing).
    pub fn with_cache(cache: GeoCache) -> Self {
        Self { cache, offline: false }
    }

    /// Offline mode — skip network calls.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodingService for Geocoder {
    fn geocode(&mut self, query: &str) -> Result<Option<GeoMatch>, GeoError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        // 1. Cache
        if let Some(hit) = self.cache.get(query) {
            return Ok(Some(hit));
        }

        // 2. Nominatim
        if !self.offline {
            match providers::nominatim_geocode(query) {
                Ok(Some(found)) => {
                    self.cache.put(query, &found);
                    return Ok(Some(found));
                }
                Ok(None) => {
                    // Provider answered "no such place"; the built-in
                    // dataset may still know the country.
                    return Ok(providers::builtin_geocode(query));
                }
                Err(err) => {
                    // Network trouble — fall back before failing.
                    if let Some(found) = providers::builtin_geocode(query) {
                        return Ok(Some(found));
                    }
                    return Err(err);
                }
            }
        }

        // 3. Built-in dataset
        Ok(providers::builtin_geocode(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::types::GeoSource;
    use tempfile::TempDir;

    fn offline_geocoder() -> (Geocoder, TempDir) {
        let dir = TempDir::new().unwrap();
        let cache = GeoCache::load_from(dir.path().join("cache.json"));
        let mut geocoder = Geocoder::with_cache(cache);
        geocoder.set_offline(true);
        (geocoder, dir)
    }

    #[test]
    fn test_offline_builtin_fallback() {
        let (mut geocoder, _dir) = offline_geocoder();
        let found = geocoder.geocode("Sweden").unwrap().unwrap();
        assert_eq!(found.source, GeoSource::Builtin);
        assert!((found.lat - 59.6749).abs() < 0.01);
    }

    #[test]
    fn test_offline_unknown_place_is_none_not_error() {
        let (mut geocoder, _dir) = offline_geocoder();
        assert!(geocoder.geocode("Atlantis").unwrap().is_none());
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let (mut geocoder, _dir) = offline_geocoder();
        assert!(geocoder.geocode("").unwrap().is_none());
        assert!(geocoder.geocode("   ").unwrap().is_none());
    }

    #[test]
    fn test_cache_hit_wins() {
        let dir = TempDir::new().unwrap();
        let mut cache = GeoCache::load_from(dir.path().join("cache.json"));
        cache.put("somewhere", &GeoMatch {
            lat: 10.0,
            lon: 20.0,
            address: "Somewhere, Earth".into(),
            source: GeoSource::Nominatim,
        });

        let mut geocoder = Geocoder::with_cache(cache);
        geocoder.set_offline(true);

        let hit = geocoder.geocode("Somewhere").unwrap().unwrap();
        assert_eq!(hit.source, GeoSource::Cache);
        assert_eq!(hit.address, "Somewhere, Earth");
    }
}
