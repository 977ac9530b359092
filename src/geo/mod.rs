//! Geocoding subsystem for Dialscope.
//!
//! Resolves free-text place queries (country/region names derived from
//! phone numbers) to coordinates and a formatted address, with local
//! caching and a built-in fallback dataset.

pub mod cache;
pub mod providers;
pub mod resolver;
pub mod types;

pub use cache::GeoCache;
pub use resolver::{Geocoder, GeocodingService};
pub use types::{GeoError, GeoMatch, GeoSource};
