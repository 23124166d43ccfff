//! Flight search API trait

use async_trait::async_trait;

use crate::client::models::{FlightOffersResponse, SearchCriteria};
use crate::error::Result;

/// Flight-offers search operations
#[async_trait]
pub trait FlightSearchApi: Send + Sync {
    /// Search flight offers, filling absent criteria from the client's defaults.
    ///
    /// Fails with [`ApiError::Search`](crate::error::ApiError::Search) when the
    /// endpoint answers with a non-2xx status.
    async fn search_flights(&self, criteria: &SearchCriteria) -> Result<FlightOffersResponse>;
}
