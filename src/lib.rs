//! Dialscope — phone-number intelligence.
//!
//! Validates a phone number and derives country, carrier, time zones,
//! approximate coordinates, locality, and estimated local time by
//! composing three capabilities: a phone-number service, a geocoding
//! service, and a local-time service.

pub mod clock;
pub mod geo;
pub mod history;
pub mod number;
pub mod record;
pub mod resolve;
pub mod server;
