//! File-based geocoding cache at ~/.dialscope/cache.json.
//!
//! TTL: 30 days. Case-insensitive keys. Missing or corrupt files load
//! as an empty cache.

use super::types::{GeoMatch, GeoSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const CACHE_TTL_MS: i64 = 30 * 24 * 3600 * 1000; // 30 days in ms

#[derive(Serialize, Deserialize, Clone)]
struct CacheEntry {
    lat: f64,
    lon: f64,
    address: String,
    timestamp: i64,
}

/// The geocoding cache.
pub struct GeoCache {
    path: PathBuf,
    entries: HashMap<String, CacheEntry>,
}

impl GeoCache {
    /// Load from the default location (~/.dialscope/cache.json).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load from a specific path (for testing).
    pub fn load_from(path: PathBuf) -> Self {
        let entries = Self::read_file(&path).unwrap_or_default();
        Self { path, entries }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dialscope")
            .join("cache.json")
    }

    fn read_file(path: &PathBuf) -> Option<HashMap<String, CacheEntry>> {
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Look up a query. Returns None if missing or expired.
    pub fn get(&self, query: &str) -> Option<GeoMatch> {
        let entry = self.entries.get(&query.to_lowercase())?;

        let now = chrono::Utc::now().timestamp_millis();
        if now - entry.timestamp > CACHE_TTL_MS {
            return None; // expired
        }

        Some(GeoMatch {
            lat: entry.lat,
            lon: entry.lon,
            address: entry.address.clone(),
            source: GeoSource::Cache,
        })
    }

    /// Store a match under its query and persist to disk.
    pub fn put(&mut self, query: &str, found: &GeoMatch) {
        let entry = CacheEntry {
            lat: found.lat,
            lon: found.lon,
            address: found.address.clone(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.entries.insert(query.to_lowercase(), entry);
        self.persist();
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.entries) {
            let _ = fs::write(&self.path, json);
        }
    }

    /// Number of entries (for testing).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache() -> (GeoCache, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        (GeoCache::load_from(path), dir)
    }

    fn sample_match() -> GeoMatch {
        GeoMatch {
            lat: 59.6749,
            lon: 14.5209,
            address: "Sverige".into(),
            source: GeoSource::Nominatim,
        }
    }

    #[test]
    fn test_put_get() {
        let (mut cache, _dir) = test_cache();
        cache.put("Sweden", &sample_match());

        let hit = cache.get("sweden").unwrap();
        assert_eq!(hit.source, GeoSource::Cache);
        assert!((hit.lat - 59.6749).abs() < 0.001);
        assert_eq!(hit.address, "Sverige");
    }

    #[test]
    fn test_case_insensitive() {
        let (mut cache, _dir) = test_cache();
        cache.put("Sweden", &sample_match());
        assert!(cache.get("SWEDEN").is_some());
    }

    #[test]
    fn test_miss() {
        let (cache, _dir) = test_cache();
        assert!(cache.get("nowhere").is_none());
    }

    #[test]
    fn test_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        {
            let mut cache = GeoCache::load_from(path.clone());
            cache.put("Japan", &GeoMatch {
                lat: 36.5748,
                lon: 139.2394,
                address: "日本".into(),
                source: GeoSource::Nominatim,
            });
        }

        let cache2 = GeoCache::load_from(path);
        let hit = cache2.get("japan").unwrap();
        assert_eq!(hit.address, "日本");
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{not json").unwrap();

        let cache = GeoCache::load_from(path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entry_misses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        // Timestamp far in the past.
        let stale = r#"{
            "sweden": {
                "lat": 59.6749,
                "lon": 14.5209,
                "address": "Sverige",
                "timestamp": 0
            }
        }"#;
        fs::write(&path, stale).unwrap();

        let cache = GeoCache::load_from(path);
        assert!(cache.get("sweden").is_none());
    }
}
