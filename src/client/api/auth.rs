//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Token operations against the vendor's OAuth2 endpoint
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the configured client credentials for a fresh bearer token.
    ///
    /// Always hits the network; token reuse is handled by
    /// [`TokenProvider`](crate::client::TokenProvider).
    async fn authenticate(&self) -> Result<AccessToken>;
}
