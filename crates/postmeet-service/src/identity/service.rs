//! Unified identity service with observability.
//!
//! This module provides [`IdentityService`] which wraps identity providers
//! and adds structured logging for all operations.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{
    AccountSync, AuthorizationRedirect, AuthorizedSession, CodeExchange, IdentityProvider,
    LinkedAccount, Result, TRACING_TARGET, UserProfile,
};
use crate::health::ServiceHealth;

/// Unified identity service with observability.
///
/// This service wraps any provider implementing [`IdentityProvider`] and adds
/// structured logging for all operations.
#[derive(Clone)]
pub struct IdentityService {
    provider: Arc<dyn IdentityProvider>,
}

impl fmt::Debug for IdentityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityService").finish_non_exhaustive()
    }
}

impl IdentityService {
    /// Create a new identity service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: IdentityProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Build the authorization redirect for starting an OAuth flow.
    pub async fn authorization_url(&self) -> Result<AuthorizationRedirect> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            "Building authorization redirect"
        );

        let result = self.provider.authorization_url().await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(redirect) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    state = %redirect.state,
                    elapsed_ms = elapsed.as_millis(),
                    "Authorization redirect built"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Authorization redirect failed"
                );
            }
        }

        result
    }

    /// Exchange an authorization code for a session.
    pub async fn exchange_code(&self, request: &CodeExchange) -> Result<AuthorizedSession> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            code_length = request.code.len(),
            "Processing code exchange"
        );

        let result = self.provider.exchange_code(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(session) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    user_id = %session.user_id,
                    user_email = %session.user_email,
                    elapsed_ms = elapsed.as_millis(),
                    "Code exchange successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Code exchange failed"
                );
            }
        }

        result
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            "Fetching user profile"
        );

        let result = self.provider.profile().await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(profile) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    user_id = %profile.id,
                    elapsed_ms = elapsed.as_millis(),
                    "Profile fetch successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Profile fetch failed"
                );
            }
        }

        result
    }

    /// List the linked Google accounts.
    pub async fn linked_accounts(&self) -> Result<Vec<LinkedAccount>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            "Listing linked accounts"
        );

        let result = self.provider.linked_accounts().await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(accounts) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    count = accounts.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Linked accounts listed"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Linked account listing failed"
                );
            }
        }

        result
    }

    /// Unlink a Google account by its identifier.
    pub async fn unlink_account(&self, account_id: i64) -> Result<()> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            account_id,
            "Unlinking account"
        );

        let result = self.provider.unlink_account(account_id).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    account_id,
                    elapsed_ms = elapsed.as_millis(),
                    "Account unlinked"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    account_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Account unlink failed"
                );
            }
        }

        result
    }

    /// Trigger a calendar sync for a linked account.
    pub async fn sync_account(&self, account_id: i64) -> Result<AccountSync> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            account_id,
            "Syncing account"
        );

        let result = self.provider.sync_account(account_id).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(sync) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    account_id,
                    events_synced = sync.events_synced,
                    elapsed_ms = elapsed.as_millis(),
                    "Account sync successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    account_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Account sync failed"
                );
            }
        }

        result
    }

    /// Perform a health check on the identity service.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::super::SampleProvider;

    #[tokio::test]
    async fn service_delegates_to_provider() {
        let service = SampleProvider::default().into_service();

        let accounts = service.linked_accounts().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert!(accounts[0].is_primary);

        let health = service.health_check().await.unwrap();
        assert!(health.is_available());
    }
}
