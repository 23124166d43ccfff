//! Search command arguments

use chrono::NaiveDate;
use clap::Args;

use crate::client::models::{SearchCriteria, TravelClass};

/// Flight search options. Anything left unset falls back to the configured
/// search defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Origin airport IATA code (e.g. ORD)
    #[arg(long, value_parser = parse_iata)]
    pub origin: Option<String>,

    /// Destination airport IATA code (e.g. BCN)
    #[arg(long, value_parser = parse_iata)]
    pub destination: Option<String>,

    /// Outbound date (YYYY-MM-DD)
    #[arg(long)]
    pub departure_date: Option<NaiveDate>,

    /// Return date (YYYY-MM-DD)
    #[arg(long)]
    pub return_date: Option<NaiveDate>,

    /// Number of adult travellers
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=9))]
    pub adults: Option<u32>,

    /// Cabin class
    #[arg(long, value_enum)]
    pub travel_class: Option<TravelClass>,

    /// Maximum offers requested from the API
    #[arg(long = "max", value_parser = clap::value_parser!(u32).range(1..=250))]
    pub max_results: Option<u32>,

    /// Preferred airline code; repeat or comma-separate for several
    #[arg(long = "airline", value_delimiter = ',', value_parser = parse_iata)]
    pub airlines: Vec<String>,
}

/// Accept two- or three-letter codes, normalized to upper case.
fn parse_iata(value: &str) -> Result<String, String> {
    let code = value.trim();
    let valid = (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("'{}' is not an IATA code", value))
    }
}

impl From<SearchArgs> for SearchCriteria {
    fn from(args: SearchArgs) -> Self {
        Self {
            origin: args.origin,
            destination: args.destination,
            departure_date: args.departure_date,
            return_date: args.return_date,
            adults: args.adults,
            travel_class: args.travel_class,
            max_results: args.max_results,
            preferred_airlines: args.airlines,
        }
    }
}
