//! Amadeus self-service API client implementation

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::Client as HttpClient;

use super::api::{AuthApi, FlightSearchApi};
use super::models::{
    AccessToken, FlightOffersResponse, SearchCriteria, SearchDefaults, TokenResponse,
};
use super::TokenProvider;
use crate::error::{ApiError, Result};

/// Default Amadeus API base URL (test environment)
pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// OAuth2 client credentials
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"********")
            .finish()
    }
}

/// Flight-search API client
pub struct AmadeusClient {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
    defaults: SearchDefaults,
    tokens: TokenProvider,
}

impl AmadeusClient {
    /// Create a client against the default API host
    #[cfg(test)]
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, None)
    }

    /// Create a client with an optional custom API host
    pub fn with_base_url(credentials: Credentials, base_url: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            credentials,
            defaults: SearchDefaults::default(),
            tokens: TokenProvider::new(),
        })
    }

    /// Replace the defaults applied to absent search criteria
    pub fn with_defaults(mut self, defaults: SearchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// API host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seed the token cache
    #[cfg(test)]
    pub async fn set_token(&self, token: AccessToken) {
        self.tokens.set(token).await;
    }

    /// Get the current bearer token, refreshing if necessary
    async fn get_valid_token(&self) -> Result<String> {
        self.tokens.get_or_refresh(|| self.authenticate()).await
    }
}

#[async_trait]
impl AuthApi for AmadeusClient {
    async fn authenticate(&self) -> Result<AccessToken> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        debug!("Requesting access token from {}", url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Auth(format!("token endpoint returned {}", status)).into());
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::Auth(format!("Failed to read token response: {}", e)))?;

        let token: TokenResponse = serde_json::from_str(&response_text)
            .map_err(|e| ApiError::Auth(format!("Failed to parse token response: {}", e)))?;

        let token = AccessToken::from_response(token, Utc::now())?;
        debug!("Obtained access token valid until {}", token.expires_at);
        Ok(token)
    }
}

#[async_trait]
impl FlightSearchApi for AmadeusClient {
    async fn search_flights(&self, criteria: &SearchCriteria) -> Result<FlightOffersResponse> {
        let token = self.get_valid_token().await?;

        let url = format!("{}{}", self.base_url, FLIGHT_OFFERS_PATH);
        let params = criteria.query_params(&self.defaults);
        debug!("Searching flight offers: {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(&params)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Search {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into());
        }

        let offers = response.json::<FlightOffersResponse>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse flight offers: {}", e))
        })?;
        debug!("Received {} flight offers", offers.data.len());

        Ok(offers)
    }
}
