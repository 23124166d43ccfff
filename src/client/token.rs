//! Bearer token cache
//!
//! Holds at most one [`AccessToken`] per client. The lock is held across the
//! refresh so concurrent callers sharing a client wait for a single token
//! request instead of racing their own.

use std::future::Future;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::Mutex;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Caches a bearer token and refreshes it once expired.
#[derive(Debug, Default)]
pub struct TokenProvider {
    state: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token.
    #[cfg(test)]
    pub async fn set(&self, token: AccessToken) {
        *self.state.lock().await = Some(token);
    }

    /// Snapshot of the cached token, expired or not.
    #[cfg(test)]
    pub async fn cached(&self) -> Option<AccessToken> {
        self.state.lock().await.clone()
    }

    /// Return the cached token, calling `refresh` only when there is none or
    /// it has expired.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AccessToken>>,
    {
        self.get_or_refresh_at(Utc::now(), refresh).await
    }

    async fn get_or_refresh_at<F, Fut>(&self, now: DateTime<Utc>, refresh: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AccessToken>>,
    {
        let mut state = self.state.lock().await;

        if let Some(token) = state.as_ref()
            && token.is_valid_at(now)
        {
            debug!("Reusing cached access token (expires {})", token.expires_at);
            return Ok(token.value.clone());
        }

        debug!("Access token missing or expired, refreshing");
        let fresh = refresh().await?;
        let value = fresh.value.clone();
        *state = Some(fresh);
        Ok(value)
    }
}
