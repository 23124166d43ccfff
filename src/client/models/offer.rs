//! Flight offer models
//!
//! Only the subset of the vendor schema that farescout consumes is modelled;
//! every other field in the response is ignored.

use serde::{Deserialize, Serialize};

/// Response envelope of the flight-offers search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffersResponse {
    /// Offers in vendor order
    #[serde(default)]
    pub data: Vec<FlightOffer>,
}

/// One priced itinerary bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    /// Offer identifier, used for the booking reference
    pub id: String,

    /// Outbound itinerary first, then the return leg for round trips
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,

    /// Offer price
    pub price: OfferPrice,
}

/// Offer price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferPrice {
    /// Total price as a decimal string, e.g. "456.70"
    pub total: String,

    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// One direction of travel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// ISO-8601 duration, e.g. "PT9H10M"
    pub duration: String,

    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// One physical flight leg
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Marketing carrier IATA code
    pub carrier_code: String,

    /// Flight number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    pub departure: FlightEndpoint,

    pub arrival: FlightEndpoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Aircraft>,
}

/// Departure or arrival point of a segment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    /// Airport IATA code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,

    /// Local timestamp, e.g. "2025-08-05T17:40:00"
    pub at: String,
}

/// Aircraft operating a segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
