//! Mock flight-search client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, FlightSearchApi};
use super::models::{AccessToken, FlightOffer, FlightOffersResponse, SearchCriteria};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFlightClient::new()
///     .with_offers(vec![OfferBuilder::new("1").build()])
///     .await;
///
/// let response = mock.search_flights(&SearchCriteria::default()).await?;
/// assert_eq!(response.data.len(), 1);
/// ```
#[derive(Default)]
pub struct MockFlightClient {
    /// Offers to return from search_flights
    offers: Arc<Mutex<Vec<FlightOffer>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Criteria passed to each search, in call order
    captured_criteria: Arc<Mutex<Vec<SearchCriteria>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub search_flights: usize,
}

impl MockFlightClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure offers to return from search_flights.
    pub async fn with_offers(self, offers: Vec<FlightOffer>) -> Self {
        *self.offers.lock().await = offers;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_criteria(&self) -> Vec<SearchCriteria> {
        self.captured_criteria.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthApi for MockFlightClient {
    async fn authenticate(&self) -> Result<AccessToken> {
        self.call_count.lock().await.authenticate += 1;
        self.check_error().await?;

        Ok(AccessToken {
            value: "mock-token".to_string(),
            expires_at: Utc::now() + Duration::minutes(30),
        })
    }
}

#[async_trait]
impl FlightSearchApi for MockFlightClient {
    async fn search_flights(&self, criteria: &SearchCriteria) -> Result<FlightOffersResponse> {
        self.call_count.lock().await.search_flights += 1;
        self.captured_criteria.lock().await.push(criteria.clone());
        self.check_error().await?;

        Ok(FlightOffersResponse {
            data: self.offers.lock().await.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::OfferBuilder;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_returns_configured_offers() {
        let mock = MockFlightClient::new()
            .with_offers(vec![OfferBuilder::new("1").build(), OfferBuilder::new("2").build()])
            .await;

        let response = mock
            .search_flights(&SearchCriteria::default())
            .await
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(mock.call_counts().await.search_flights, 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockFlightClient::new()
            .with_error(ApiError::Search {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
            .await;

        let first = mock.search_flights(&SearchCriteria::default()).await;
        assert!(matches!(
            first,
            Err(Error::Api(ApiError::Search { status: 500, .. }))
        ));

        let second = mock.search_flights(&SearchCriteria::default()).await;
        assert!(second.is_ok());
        assert_eq!(mock.call_counts().await.search_flights, 2);
    }

    #[tokio::test]
    async fn test_mock_captures_criteria() {
        let mock = MockFlightClient::new();
        let criteria = SearchCriteria {
            origin: Some("LAX".to_string()),
            ..Default::default()
        };

        mock.search_flights(&criteria).await.unwrap();

        let captured = mock.captured_criteria().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].origin.as_deref(), Some("LAX"));
    }

    #[tokio::test]
    async fn test_mock_authenticate() {
        let mock = MockFlightClient::new();
        let token = mock.authenticate().await.unwrap();

        assert_eq!(token.value, "mock-token");
        assert!(token.is_valid_at(Utc::now()));
        assert_eq!(mock.call_counts().await.authenticate, 1);
    }
}
