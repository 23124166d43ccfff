//! Flight-search API client

pub mod amadeus;
pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod token;

pub use amadeus::{AmadeusClient, Credentials, DEFAULT_BASE_URL};
pub use api::{AuthApi, FlightSearchApi};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockFlightClient;
pub use token::TokenProvider;
