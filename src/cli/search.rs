//! Flight search command

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, SearchArgs};
use crate::client::FlightSearchApi;
use crate::client::models::SearchCriteria;
use crate::error::Result;
use crate::models::{FlightSummary, ResponseNormalizer};
use crate::output;

/// Shown when the API could not produce any flights
pub const UNAVAILABLE_MESSAGE: &str = "No flight data available - using cached prices";

const HEADING: &str = "Top 3 Flight Options:";

/// Search and normalize, degrading to an empty list on any failure.
///
/// An empty result means "unavailable", not "no flights exist": auth,
/// HTTP, and parse failures are logged here and never reach the caller.
pub async fn top_flights<C>(
    client: &C,
    criteria: &SearchCriteria,
    normalizer: &ResponseNormalizer,
) -> Vec<FlightSummary>
where
    C: FlightSearchApi + ?Sized,
{
    let response = match client.search_flights(criteria).await {
        Ok(response) => response,
        Err(e) => {
            error!("Error fetching flight data: {}", e);
            return Vec::new();
        }
    };

    match normalizer.normalize(&response) {
        Ok(flights) => {
            debug!(
                "Normalized {} of {} offers",
                flights.len(),
                response.data.len()
            );
            flights
        }
        Err(e) => {
            error!("Error formatting flight data: {}", e);
            Vec::new()
        }
    }
}

/// Run the search command
pub async fn run(opts: &GlobalOptions, args: SearchArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let criteria = SearchCriteria::from(args);

    let spinner = spinner(ctx.format);
    let flights = top_flights(&ctx.client, &criteria, &ctx.normalizer).await;
    spinner.finish_and_clear();

    if flights.is_empty() {
        eprintln!("{}", UNAVAILABLE_MESSAGE);
        if ctx.format == OutputFormat::Json {
            output::print(&flights, ctx.format, HEADING)?;
        }
        return Ok(());
    }

    output::print(&flights, ctx.format, HEADING)
}

fn spinner(format: OutputFormat) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching for flights...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
