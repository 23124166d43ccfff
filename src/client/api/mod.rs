//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Token acquisition
//! - [`FlightSearchApi`] - Flight-offers search

mod auth;
mod search;

pub use auth::AuthApi;
pub use search::FlightSearchApi;
