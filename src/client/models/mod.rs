//! Flight-search API data models
//!
//! Request and response types for the token and flight-offers endpoints,
//! organized by concern.

mod auth;
mod offer;
mod search;

pub use auth::{AccessToken, TokenResponse};
pub use offer::{
    Aircraft, FlightEndpoint, FlightOffer, FlightOffersResponse, Itinerary, OfferPrice, Segment,
};
pub use search::{SearchCriteria, SearchDefaults, TravelClass};
