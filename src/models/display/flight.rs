//! Flight summary display model and response normalization

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{FlightOffer, FlightOffersResponse, Segment};
use crate::error::ParseError;
use crate::models::AirlineDirectory;
use crate::output::PrettyLine;
use crate::output::formatters::{
    format_duration_minutes, format_price, format_stops, parse_iso_duration, time_of_day,
};

/// Number of offers kept from a search response
pub const MAX_SUMMARIES: usize = 3;

/// Default base for booking links
pub const DEFAULT_BOOKING_URL: &str = "https://www.amadeus.com/book";

/// One ranked flight option for table/JSON output.
#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct FlightSummary {
    /// 1-based position in the vendor's response
    #[tabled(rename = "#")]
    pub rank: usize,

    #[tabled(rename = "AIRLINE")]
    pub airline: String,

    /// Rounded, `$`-prefixed total
    #[tabled(rename = "PRICE")]
    pub price: String,

    /// Outbound plus return duration, e.g. `20h 15m`
    #[tabled(rename = "DURATION")]
    pub duration: String,

    #[tabled(skip)]
    pub total_duration_minutes: u32,

    #[tabled(rename = "STOPS")]
    pub stops: String,

    #[tabled(skip)]
    pub stop_count: usize,

    /// Outbound departure, `HH:MM`
    #[tabled(rename = "DEPART")]
    pub departure: String,

    /// Outbound arrival, `HH:MM`
    #[tabled(rename = "ARRIVE")]
    pub arrival: String,

    #[tabled(rename = "AIRCRAFT")]
    pub aircraft: String,

    #[tabled(skip)]
    pub booking_url: String,
}

impl PrettyLine for FlightSummary {
    fn pretty_line(&self) -> String {
        format!(
            "{}. {} - {} ({}, {})",
            self.rank, self.airline, self.price, self.duration, self.stops
        )
    }
}

/// Turns raw search responses into ranked [`FlightSummary`] lists.
#[derive(Debug, Clone)]
pub struct ResponseNormalizer {
    airlines: AirlineDirectory,
    booking_url: String,
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new(AirlineDirectory::default(), DEFAULT_BOOKING_URL)
    }
}

impl ResponseNormalizer {
    pub fn new(airlines: AirlineDirectory, booking_url: impl Into<String>) -> Self {
        Self {
            airlines,
            booking_url: booking_url.into(),
        }
    }

    /// Summarize the first [`MAX_SUMMARIES`] offers, keeping vendor order.
    ///
    /// Any malformed offer among them fails the whole batch.
    pub fn normalize(
        &self,
        response: &FlightOffersResponse,
    ) -> Result<Vec<FlightSummary>, ParseError> {
        response
            .data
            .iter()
            .take(MAX_SUMMARIES)
            .enumerate()
            .map(|(index, offer)| self.summarize(index + 1, offer))
            .collect()
    }

    fn summarize(&self, rank: usize, offer: &FlightOffer) -> Result<FlightSummary, ParseError> {
        let missing = |field| ParseError::MissingField {
            offer: offer.id.clone(),
            field,
        };

        let outbound = offer.itineraries.first().ok_or_else(|| missing("itineraries"))?;
        let first: &Segment = outbound
            .segments
            .first()
            .ok_or_else(|| missing("itineraries[0].segments"))?;
        let last: &Segment = outbound
            .segments
            .last()
            .ok_or_else(|| missing("itineraries[0].segments"))?;

        let mut total_minutes = parse_iso_duration(&outbound.duration)?;
        if let Some(inbound) = offer.itineraries.get(1) {
            total_minutes = total_minutes
                .checked_add(parse_iso_duration(&inbound.duration)?)
                .ok_or_else(|| ParseError::InvalidDuration(inbound.duration.clone()))?;
        }

        let stop_count = outbound.segments.len() - 1;

        Ok(FlightSummary {
            rank,
            airline: self.airlines.name_for(&first.carrier_code).to_string(),
            price: format_price(&offer.price.total)?,
            duration: format_duration_minutes(total_minutes),
            total_duration_minutes: total_minutes,
            stops: format_stops(stop_count),
            stop_count,
            departure: time_of_day(&first.departure.at)?,
            arrival: time_of_day(&last.arrival.at)?,
            aircraft: first
                .aircraft
                .as_ref()
                .and_then(|a| a.code.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            booking_url: format!("{}?offer={}", self.booking_url, offer.id),
        })
    }
}
