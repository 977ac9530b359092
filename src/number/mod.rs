//! Phone-number subsystem for Dialscope.
//!
//! Parsing and validation delegate to the `phonenumber` crate; region
//! names, carrier prefixes, and per-region time zones come from small
//! built-in tables.

pub mod metadata;
pub mod service;
pub mod types;

pub use service::{NumberService, PhoneNumberService};
pub use types::{NumberError, ParsedNumber};
