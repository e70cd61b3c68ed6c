//! Sample identity provider with deterministic account data.

use jiff::Timestamp;
use url::Url;

use super::{
    AccountSync, AuthorizationRedirect, AuthorizedSession, CodeExchange, Error, IdentityProvider,
    IdentityService, LinkedAccount, Result, UserProfile,
};
use crate::config::GoogleConfig;
use crate::health::ServiceHealth;

/// OAuth scopes requested for calendar access.
const OAUTH_SCOPE: &str = "openid email profile https://www.googleapis.com/auth/calendar.readonly";

/// State echoed through the sample authorization flow.
const SAMPLE_STATE: &str = "test_state";

/// Sample identity provider.
///
/// Serves a fixed pair of linked Google accounts and accepts any
/// non-empty authorization code. Used whenever Google OAuth credentials
/// are not configured.
#[derive(Debug, Clone, Default)]
pub struct SampleProvider {
    config: GoogleConfig,
}

impl SampleProvider {
    /// Create a new sample provider with the given Google config.
    ///
    /// The redirect URI from the config is embedded in generated
    /// authorization URLs so the flow round-trips locally.
    pub fn new(config: GoogleConfig) -> Self {
        Self { config }
    }

    /// Wrap this provider in an [`IdentityService`].
    pub fn into_service(self) -> IdentityService {
        IdentityService::from_provider(self)
    }

    fn accounts(&self) -> Vec<LinkedAccount> {
        let last_sync: Timestamp = "2024-01-20T10:00:00Z".parse().unwrap();

        vec![
            LinkedAccount {
                id: 1,
                email: "test@example.com".to_owned(),
                name: "Test User".to_owned(),
                picture: String::new(),
                is_active: true,
                is_primary: true,
                status: "active".to_owned(),
                events_count: 3,
                last_sync,
                error_message: None,
            },
            LinkedAccount {
                id: 2,
                email: "work@example.com".to_owned(),
                name: "Work Account".to_owned(),
                picture: String::new(),
                is_active: true,
                is_primary: false,
                status: "active".to_owned(),
                events_count: 2,
                last_sync,
                error_message: None,
            },
        ]
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SampleProvider {
    async fn authorization_url(&self) -> Result<AuthorizationRedirect> {
        let client_id = self.config.client_id.as_deref().unwrap_or("mock_client_id");

        let mut auth_url = Url::parse("https://accounts.google.com/o/oauth2/auth")
            .map_err(|err| Error::internal().with_source(err))?;
        auth_url
            .query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("redirect_uri", self.config.redirect_uri.as_str())
            .append_pair("response_type", "code")
            .append_pair("scope", OAUTH_SCOPE)
            .append_pair("state", SAMPLE_STATE);

        Ok(AuthorizationRedirect {
            auth_url,
            state: SAMPLE_STATE.to_owned(),
        })
    }

    async fn exchange_code(&self, request: &CodeExchange) -> Result<AuthorizedSession> {
        if request.code.is_empty() {
            return Err(Error::invalid_input().with_message("authorization code must not be empty"));
        }

        Ok(AuthorizedSession {
            access_token: "mock_access_token".to_owned(),
            token_type: "bearer".to_owned(),
            user_id: "1".to_owned(),
            user_email: "test@example.com".to_owned(),
            user_name: "Test User".to_owned(),
            user_picture: String::new(),
            google_account_id: "1".to_owned(),
            google_account_email: "test@example.com".to_owned(),
            google_account_active: "true".to_owned(),
        })
    }

    async fn profile(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            id: "1".to_owned(),
            email: "test@example.com".to_owned(),
            name: "Test User".to_owned(),
            picture: String::new(),
        })
    }

    async fn linked_accounts(&self) -> Result<Vec<LinkedAccount>> {
        Ok(self.accounts())
    }

    async fn unlink_account(&self, account_id: i64) -> Result<()> {
        if self.accounts().iter().any(|account| account.id == account_id) {
            Ok(())
        } else {
            Err(Error::not_found()
                .with_message(format!("no linked account with id {account_id}")))
        }
    }

    async fn sync_account(&self, account_id: i64) -> Result<AccountSync> {
        let account = self
            .accounts()
            .into_iter()
            .find(|account| account.id == account_id)
            .ok_or_else(|| {
                Error::not_found().with_message(format!("no linked account with id {account_id}"))
            })?;

        Ok(AccountSync {
            account_id,
            events_synced: account.events_count,
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy()
            .with_metric("accounts", serde_json::Value::from(self.accounts().len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn exchange_accepts_any_nonempty_code() {
        let provider = SampleProvider::default();
        let session = provider
            .exchange_code(&CodeExchange::new("4/0AXcode"))
            .await
            .unwrap();

        assert_eq!(session.access_token, "mock_access_token");
        assert_eq!(session.user_email, "test@example.com");
        assert_eq!(session.google_account_active, "true");
    }

    #[tokio::test]
    async fn exchange_rejects_empty_code() {
        let provider = SampleProvider::default();
        let error = provider
            .exchange_code(&CodeExchange::new(""))
            .await
            .unwrap_err();

        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn authorization_url_embeds_redirect_uri() {
        let provider = SampleProvider::default();
        let redirect = provider.authorization_url().await.unwrap();

        assert_eq!(redirect.state, "test_state");
        assert!(
            redirect
                .auth_url
                .query()
                .is_some_and(|query| query.contains("redirect_uri"))
        );
    }

    #[tokio::test]
    async fn unlink_unknown_account_is_not_found() {
        let provider = SampleProvider::default();

        provider.unlink_account(1).await.unwrap();
        let error = provider.unlink_account(99).await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn sync_reports_event_counts() {
        let provider = SampleProvider::default();

        let sync = provider.sync_account(1).await.unwrap();
        assert_eq!(sync.events_synced, 3);

        let sync = provider.sync_account(2).await.unwrap();
        assert_eq!(sync.events_synced, 2);
    }
}
