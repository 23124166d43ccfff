//! Search request models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cabin class accepted by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// Wire value for the `travelClass` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::PremiumEconomy => "PREMIUM_ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

/// Caller-supplied search parameters. Every field is optional; missing
/// fields are filled from [`SearchDefaults`] when the request is built.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub adults: Option<u32>,
    pub travel_class: Option<TravelClass>,
    pub max_results: Option<u32>,
    /// Carrier codes to restrict the search to, in preference order
    pub preferred_airlines: Vec<String>,
}

/// Values applied to absent [`SearchCriteria`] fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub adults: u32,
    pub travel_class: TravelClass,
    pub max_results: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            origin: "ORD".to_string(),
            destination: "BCN".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap_or_default(),
            return_date: NaiveDate::from_ymd_opt(2025, 8, 8).unwrap_or_default(),
            adults: 1,
            travel_class: TravelClass::Business,
            max_results: 10,
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

impl SearchCriteria {
    /// Build the flight-offers query string, filling gaps from `defaults`.
    pub fn query_params(&self, defaults: &SearchDefaults) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (
                "originLocationCode",
                self.origin.clone().unwrap_or_else(|| defaults.origin.clone()),
            ),
            (
                "destinationLocationCode",
                self.destination
                    .clone()
                    .unwrap_or_else(|| defaults.destination.clone()),
            ),
            (
                "departureDate",
                self.departure_date
                    .unwrap_or(defaults.departure_date)
                    .format(DATE_FORMAT)
                    .to_string(),
            ),
            (
                "returnDate",
                self.return_date
                    .unwrap_or(defaults.return_date)
                    .format(DATE_FORMAT)
                    .to_string(),
            ),
            (
                "adults",
                self.adults.unwrap_or(defaults.adults).to_string(),
            ),
            (
                "travelClass",
                self.travel_class
                    .unwrap_or(defaults.travel_class)
                    .as_str()
                    .to_string(),
            ),
            (
                "max",
                self.max_results.unwrap_or(defaults.max_results).to_string(),
            ),
        ];

        if !self.preferred_airlines.is_empty() {
            params.push(("includedAirlineCodes", self.preferred_airlines.join(",")));
        }

        params
    }
}
