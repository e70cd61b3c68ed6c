//! Credential configuration for upstream providers.
//!
//! Each capability has its own config type read from the environment.
//! A capability is backed by a live adapter only when every required
//! credential is present; otherwise the platform falls back to the
//! sample provider for that capability. The decision is made once at
//! startup.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::social::SocialPlatform;

/// Google OAuth and Calendar API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct GoogleConfig {
    /// OAuth client identifier issued by the Google Cloud console.
    #[cfg_attr(
        feature = "config",
        arg(long = "google-client-id", env = "GOOGLE_CLIENT_ID")
    )]
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret paired with the client identifier.
    #[cfg_attr(
        feature = "config",
        arg(long = "google-client-secret", env = "GOOGLE_CLIENT_SECRET")
    )]
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Redirect URI registered for the OAuth flow.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "google-redirect-uri",
            env = "GOOGLE_REDIRECT_URI",
            default_value = "http://localhost:8000/auth/google/callback"
        )
    )]
    #[serde(default = "default_google_redirect_uri")]
    pub redirect_uri: Url,
}

fn default_google_redirect_uri() -> Url {
    "http://localhost:8000/auth/google/callback".parse().unwrap()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: default_google_redirect_uri(),
        }
    }
}

impl GoogleConfig {
    /// Returns true when both OAuth credentials are present.
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// OpenAI API credentials for content generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenAiConfig {
    /// API key for the OpenAI completion endpoints.
    #[cfg_attr(
        feature = "config",
        arg(id = "openai_api_key", long = "openai-api-key", env = "OPENAI_API_KEY")
    )]
    #[serde(default)]
    pub api_key: Option<String>,
}

impl OpenAiConfig {
    /// Returns true when the API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Recall.ai API credentials for meeting notetaker bots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecallConfig {
    /// API key for the Recall.ai bot endpoints.
    #[cfg_attr(
        feature = "config",
        arg(id = "recall_api_key", long = "recall-api-key", env = "RECALL_API_KEY")
    )]
    #[serde(default)]
    pub api_key: Option<String>,

    /// Recall.ai region the account is provisioned in.
    #[cfg_attr(
        feature = "config",
        arg(long = "recall-region", env = "RECALL_REGION", default_value = "us-west-2")
    )]
    #[serde(default = "default_recall_region")]
    pub region: String,
}

fn default_recall_region() -> String {
    "us-west-2".to_owned()
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: default_recall_region(),
        }
    }
}

impl RecallConfig {
    /// Returns true when the API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the regional API base URL.
    pub fn base_url(&self) -> String {
        format!("https://{}.recall.ai/api/v1", self.region)
    }
}

/// Social platform OAuth credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct SocialConfig {
    /// LinkedIn OAuth client identifier.
    #[cfg_attr(feature = "config", arg(long, env = "LINKEDIN_CLIENT_ID"))]
    #[serde(default)]
    pub linkedin_client_id: Option<String>,

    /// LinkedIn OAuth client secret.
    #[cfg_attr(feature = "config", arg(long, env = "LINKEDIN_CLIENT_SECRET"))]
    #[serde(default)]
    pub linkedin_client_secret: Option<String>,

    /// Facebook application identifier.
    #[cfg_attr(feature = "config", arg(long, env = "FACEBOOK_APP_ID"))]
    #[serde(default)]
    pub facebook_app_id: Option<String>,

    /// Facebook application secret.
    #[cfg_attr(feature = "config", arg(long, env = "FACEBOOK_APP_SECRET"))]
    #[serde(default)]
    pub facebook_app_secret: Option<String>,

    /// Twitter API key.
    #[cfg_attr(feature = "config", arg(long, env = "TWITTER_API_KEY"))]
    #[serde(default)]
    pub twitter_api_key: Option<String>,

    /// Twitter API secret.
    #[cfg_attr(feature = "config", arg(long, env = "TWITTER_API_SECRET"))]
    #[serde(default)]
    pub twitter_api_secret: Option<String>,

    /// Base URL the OAuth callbacks are registered under.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "social-redirect-base",
            env = "SOCIAL_REDIRECT_BASE",
            default_value = "http://localhost:8000"
        )
    )]
    #[serde(default = "default_social_redirect_base")]
    pub redirect_base: Url,
}

fn default_social_redirect_base() -> Url {
    "http://localhost:8000".parse().unwrap()
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            linkedin_client_id: None,
            linkedin_client_secret: None,
            facebook_app_id: None,
            facebook_app_secret: None,
            twitter_api_key: None,
            twitter_api_secret: None,
            redirect_base: default_social_redirect_base(),
        }
    }
}

impl SocialConfig {
    /// Returns true when at least one platform has complete credentials.
    pub fn is_configured(&self) -> bool {
        SocialPlatform::ALL
            .iter()
            .any(|platform| self.is_platform_configured(*platform))
    }

    /// Returns true when the given platform has complete credentials.
    pub fn is_platform_configured(&self, platform: SocialPlatform) -> bool {
        match platform {
            SocialPlatform::Linkedin => {
                self.linkedin_client_id.is_some() && self.linkedin_client_secret.is_some()
            }
            SocialPlatform::Facebook => {
                self.facebook_app_id.is_some() && self.facebook_app_secret.is_some()
            }
            SocialPlatform::Twitter => {
                self.twitter_api_key.is_some() && self.twitter_api_secret.is_some()
            }
        }
    }

    /// Returns the callback URL registered for the given platform.
    pub fn callback_url(&self, platform: SocialPlatform) -> String {
        format!("{}auth/{}/callback", ensure_trailing_slash(&self.redirect_base), platform)
    }
}

fn ensure_trailing_slash(url: &Url) -> String {
    let rendered = url.to_string();
    if rendered.ends_with('/') {
        rendered
    } else {
        format!("{rendered}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_requires_both_credentials() {
        let mut config = GoogleConfig::default();
        assert!(!config.is_configured());

        config.client_id = Some("client".to_owned());
        assert!(!config.is_configured());

        config.client_secret = Some("secret".to_owned());
        assert!(config.is_configured());
    }

    #[test]
    fn recall_base_url_uses_region() {
        let config = RecallConfig {
            api_key: Some("key".to_owned()),
            region: "eu-central-1".to_owned(),
        };
        assert_eq!(config.base_url(), "https://eu-central-1.recall.ai/api/v1");
    }

    #[test]
    fn social_platform_gates_are_independent() {
        let mut config = SocialConfig::default();
        assert!(!config.is_configured());

        config.linkedin_client_id = Some("id".to_owned());
        config.linkedin_client_secret = Some("secret".to_owned());
        assert!(config.is_platform_configured(SocialPlatform::Linkedin));
        assert!(!config.is_platform_configured(SocialPlatform::Facebook));
        assert!(config.is_configured());
    }

    #[test]
    fn callback_url_appends_platform_path() {
        let config = SocialConfig::default();
        assert_eq!(
            config.callback_url(SocialPlatform::Linkedin),
            "http://localhost:8000/auth/linkedin/callback"
        );
    }
}
