//! Sample social provider with fabricated accounts and receipts.

use std::hash::{DefaultHasher, Hash, Hasher};

use url::Url;
use uuid::Uuid;

use super::{
    Error, PublishPost, PublishReceipt, Result, SocialAccount, SocialPlatform, SocialProvider,
    SocialService, SocialSession,
};
use crate::config::SocialConfig;
use crate::health::ServiceHealth;

/// Context attached to share-dialog receipts.
const FACEBOOK_SHARE_NOTE: &str = "Due to Facebook's API restrictions, this opens a share dialog \
for you to manually post the content. To enable direct posting, the app would need to be \
submitted for Facebook review with publish_to_groups or pages_manage_posts permissions.";

/// Sample social provider.
///
/// Serves a fixed connected account, accepts any non-empty callback
/// code, and acknowledges publishes without calling any platform API.
/// Used whenever no platform app credentials are configured.
#[derive(Debug, Clone, Default)]
pub struct SampleProvider {
    config: SocialConfig,
}

impl SampleProvider {
    /// Create a new sample provider with the given social config.
    ///
    /// The redirect base from the config is embedded in generated
    /// authorization URLs so callbacks land on this server.
    pub fn new(config: SocialConfig) -> Self {
        Self { config }
    }

    /// Wrap this provider in a [`SocialService`].
    pub fn into_service(self) -> SocialService {
        SocialService::from_provider(self)
    }
}

#[async_trait::async_trait]
impl SocialProvider for SampleProvider {
    async fn accounts(&self) -> Result<Vec<SocialAccount>> {
        Ok(vec![SocialAccount {
            id: 1,
            platform: SocialPlatform::Linkedin,
            account_name: "John Doe".to_owned(),
            is_active: true,
        }])
    }

    async fn authorization_url(&self, platform: SocialPlatform) -> Result<Url> {
        let callback = self.config.callback_url(platform);

        let url = match platform {
            SocialPlatform::Linkedin => {
                let client_id = self
                    .config
                    .linkedin_client_id
                    .as_deref()
                    .unwrap_or("mock_client_id");
                Url::parse_with_params(
                    "https://www.linkedin.com/oauth/v2/authorization",
                    [
                        ("response_type", "code"),
                        ("client_id", client_id),
                        ("redirect_uri", &callback),
                        ("state", "state"),
                        ("scope", "w_member_social,openid,profile,email"),
                    ],
                )
            }
            SocialPlatform::Facebook => {
                let app_id = self
                    .config
                    .facebook_app_id
                    .as_deref()
                    .unwrap_or("mock_app_id");
                Url::parse_with_params(
                    "https://www.facebook.com/v22.0/dialog/oauth",
                    [
                        ("client_id", app_id),
                        ("redirect_uri", &callback),
                        ("scope", "public_profile,pages_show_list"),
                        ("response_type", "code"),
                        ("state", "state"),
                    ],
                )
            }
            SocialPlatform::Twitter => {
                let api_key = self
                    .config
                    .twitter_api_key
                    .as_deref()
                    .unwrap_or("mock_client_id");
                Url::parse_with_params(
                    "https://twitter.com/oauth/authorize",
                    [("client_id", api_key), ("redirect_uri", &callback)],
                )
            }
        };

        url.map_err(|err| Error::internal().with_source(err))
    }

    async fn exchange_callback(
        &self,
        platform: SocialPlatform,
        code: &str,
    ) -> Result<SocialSession> {
        if code.is_empty() {
            return Err(Error::invalid_input().with_message("authorization code must not be empty"));
        }

        Ok(SocialSession {
            access_token: format!("mock_{platform}_access_token"),
            platform,
            expires_in: Some(3600),
        })
    }

    async fn publish(&self, request: &PublishPost) -> Result<PublishReceipt> {
        if request.access_token.is_empty() {
            return Err(Error::invalid_input().with_message("Access token is required"));
        }
        if request.content.is_empty() {
            return Err(Error::invalid_input().with_message("Content is required"));
        }

        let receipt = match request.platform {
            SocialPlatform::Facebook => {
                let mut hasher = DefaultHasher::new();
                request.content.hash(&mut hasher);

                let share_url = Url::parse_with_params(
                    "https://www.facebook.com/sharer/sharer.php",
                    [("u", ""), ("quote", request.content.as_str())],
                )
                .map_err(|err| Error::internal().with_source(err))?;

                PublishReceipt {
                    message: "Facebook share URL generated (direct posting requires additional \
                              permissions)"
                        .to_owned(),
                    post_id: format!("share_url_{}", hasher.finish() % 10_000),
                    share_url: Some(share_url),
                    user_name: Some("Test User".to_owned()),
                    note: Some(FACEBOOK_SHARE_NOTE.to_owned()),
                }
            }
            platform => PublishReceipt {
                message: format!("Successfully posted to {platform}"),
                post_id: Uuid::new_v4().to_string(),
                share_url: None,
                user_name: None,
                note: None,
            },
        };

        Ok(receipt)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy()
            .with_metric("accounts", serde_json::Value::from(1))
            .with_metric(
                "platforms",
                serde_json::Value::from(SocialPlatform::ALL.len()),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn accounts_contain_the_connected_profile() {
        let provider = SampleProvider::default();
        let accounts = provider.accounts().await.unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].platform, SocialPlatform::Linkedin);
        assert_eq!(accounts[0].account_name, "John Doe");
        assert!(accounts[0].is_active);
    }

    #[tokio::test]
    async fn authorization_urls_target_the_platform() {
        let provider = SampleProvider::default();

        let linkedin = provider
            .authorization_url(SocialPlatform::Linkedin)
            .await
            .unwrap();
        assert_eq!(linkedin.host_str(), Some("www.linkedin.com"));
        assert!(
            linkedin
                .query()
                .is_some_and(|query| query.contains("redirect_uri"))
        );

        let facebook = provider
            .authorization_url(SocialPlatform::Facebook)
            .await
            .unwrap();
        assert_eq!(facebook.host_str(), Some("www.facebook.com"));

        let twitter = provider
            .authorization_url(SocialPlatform::Twitter)
            .await
            .unwrap();
        assert_eq!(twitter.host_str(), Some("twitter.com"));
    }

    #[tokio::test]
    async fn callback_produces_platform_session() {
        let provider = SampleProvider::default();
        let session = provider
            .exchange_callback(SocialPlatform::Linkedin, "abc123")
            .await
            .unwrap();

        assert_eq!(session.platform, SocialPlatform::Linkedin);
        assert_eq!(session.access_token, "mock_linkedin_access_token");

        let error = provider
            .exchange_callback(SocialPlatform::Linkedin, "")
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn publish_requires_token_and_content() {
        let provider = SampleProvider::default();

        let error = provider
            .publish(&PublishPost::new(SocialPlatform::Linkedin, "", "hello"))
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);

        let error = provider
            .publish(&PublishPost::new(SocialPlatform::Linkedin, "token", ""))
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn facebook_publish_falls_back_to_share_url() {
        let provider = SampleProvider::default();
        let receipt = provider
            .publish(&PublishPost::new(
                SocialPlatform::Facebook,
                "token",
                "Great meeting today!",
            ))
            .await
            .unwrap();

        assert!(receipt.post_id.starts_with("share_url_"));
        let share_url = receipt.share_url.expect("share url");
        assert_eq!(share_url.host_str(), Some("www.facebook.com"));
        assert!(receipt.note.is_some());
    }

    #[tokio::test]
    async fn linkedin_publish_returns_direct_receipt() {
        let provider = SampleProvider::default();
        let receipt = provider
            .publish(&PublishPost::new(
                SocialPlatform::Linkedin,
                "token",
                "Great meeting today!",
            ))
            .await
            .unwrap();

        assert_eq!(receipt.message, "Successfully posted to linkedin");
        assert!(receipt.share_url.is_none());
    }
}
