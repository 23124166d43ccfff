//! Authentication models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Body returned by the OAuth2 client-credentials token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token string
    pub access_token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// Token type, normally "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Bearer token with its absolute expiry time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer token string
    pub value: String,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a token from the endpoint response, anchored at `issued_at`.
    ///
    /// An `expires_in` that does not fit a timestamp is an auth error.
    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Result<Self> {
        let expires_at = Duration::try_seconds(response.expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ApiError::Auth(format!("invalid expires_in: {}", response.expires_in))
            })?;

        Ok(Self {
            value: response.access_token,
            expires_at,
        })
    }

    /// A token is usable strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
