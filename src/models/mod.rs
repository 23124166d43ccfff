//! Display models for CLI output
//!
//! Converts vendor response types into ranked, display-ready records.

pub mod airlines;
pub mod display;

pub use airlines::AirlineDirectory;
pub use display::{DEFAULT_BOOKING_URL, FlightSummary, ResponseNormalizer};
