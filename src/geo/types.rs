//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a geocoding answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoSource {
    Cache,
    Nominatim,
    Builtin,
}

impl fmt::Display for GeoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => write!(f, "Cache"),
            Self::Nominatim => write!(f, "Nominatim"),
            Self::Builtin => write!(f, "Built-in"),
        }
    }
}

/// A geocoded place: representative point plus the provider's
/// comma-separated free-text address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMatch {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub source: GeoSource,
}

/// Geocoding collaborator failures. "No match" is not an error; it is
/// `Ok(None)` at the service boundary.
#[derive(Debug)]
pub enum GeoError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}
