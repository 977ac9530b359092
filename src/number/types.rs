//! Core types for the phone-number subsystem.

use serde::Serialize;
use std::fmt;

/// A parsed phone number with its validity verdict.
///
/// Only a number with `valid == true` may proceed to the lookup
/// pipeline; everything else is rejected before any network call.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedNumber {
    /// E.164 rendering, e.g. "+14155552671".
    pub e164: String,
    /// Country calling code, e.g. 1 for NANP, 46 for Sweden.
    pub country_code: u16,
    /// National significant number, digits only.
    pub national_number: u64,
    /// ISO 3166-1 alpha-2 region, e.g. "US", when determinable.
    pub region: Option<String>,
    /// Validity per the region's numbering plan.
    pub valid: bool,
}

/// Phone-number parsing errors.
#[derive(Debug)]
pub enum NumberError {
    /// Input could not be parsed as a phone number at all.
    Parse(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Cannot parse phone number: {}", msg),
        }
    }
}

impl std::error::Error for NumberError {}
