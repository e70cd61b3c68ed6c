//! Unified social publishing service with observability.
//!
//! This module provides [`SocialService`] which wraps social providers
//! and adds structured logging for all operations.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;
use url::Url;

use super::{
    PublishPost, PublishReceipt, Result, SocialAccount, SocialPlatform, SocialProvider,
    SocialSession, TRACING_TARGET,
};
use crate::health::ServiceHealth;

/// Unified social publishing service with observability.
///
/// This service wraps any provider implementing [`SocialProvider`] and
/// adds structured logging for all operations.
#[derive(Clone)]
pub struct SocialService {
    provider: Arc<dyn SocialProvider>,
}

impl fmt::Debug for SocialService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocialService").finish_non_exhaustive()
    }
}

impl SocialService {
    /// Create a new social service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: SocialProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// List the social accounts connected to the user.
    pub async fn accounts(&self) -> Result<Vec<SocialAccount>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            "Listing social accounts"
        );

        let result = self.provider.accounts().await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(accounts) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    count = accounts.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Social accounts listed"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Social account listing failed"
                );
            }
        }

        result
    }

    /// Build the authorization URL for connecting a platform.
    pub async fn authorization_url(&self, platform: SocialPlatform) -> Result<Url> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            platform = %platform,
            "Building platform authorization URL"
        );

        let result = self.provider.authorization_url(platform).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(url) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    platform = %platform,
                    host = url.host_str().unwrap_or_default(),
                    elapsed_ms = elapsed.as_millis(),
                    "Platform authorization URL built"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    platform = %platform,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Platform authorization URL failed"
                );
            }
        }

        result
    }

    /// Exchange a platform OAuth callback code for a session.
    pub async fn exchange_callback(
        &self,
        platform: SocialPlatform,
        code: &str,
    ) -> Result<SocialSession> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            platform = %platform,
            code_length = code.len(),
            "Processing platform callback"
        );

        let result = self.provider.exchange_callback(platform, code).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(session) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    platform = %session.platform,
                    elapsed_ms = elapsed.as_millis(),
                    "Platform callback successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    platform = %platform,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Platform callback failed"
                );
            }
        }

        result
    }

    /// Publish content to a platform on behalf of the user.
    pub async fn publish(&self, request: &PublishPost) -> Result<PublishReceipt> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            platform = %request.platform,
            content_len = request.content.len(),
            "Publishing post"
        );

        let result = self.provider.publish(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(receipt) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    platform = %request.platform,
                    post_id = %receipt.post_id,
                    shared = receipt.share_url.is_some(),
                    elapsed_ms = elapsed.as_millis(),
                    "Post published"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    platform = %request.platform,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Post publishing failed"
                );
            }
        }

        result
    }

    /// Perform a health check on the social service.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}
