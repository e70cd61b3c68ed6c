//! Social publishing abstractions for connected platforms.
//!
//! This module provides the trait and types for connecting social
//! accounts, exchanging OAuth callbacks, and publishing generated
//! content to a platform.
//!
//! # Example
//!
//! ```rust,ignore
//! use postmeet_service::social::{PublishPost, SampleProvider, SocialPlatform};
//!
//! let service = SampleProvider::default().into_service();
//! let request = PublishPost::new(SocialPlatform::Linkedin, token, content);
//! let receipt = service.publish(&request).await?;
//! ```

mod sample;
mod service;

pub mod request;
pub mod response;

use serde::{Deserialize, Serialize};

pub use request::PublishPost;
pub use response::{PublishReceipt, SocialAccount, SocialSession};
pub use sample::SampleProvider;
pub use service::SocialService;

use crate::health::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for social publishing operations.
pub const TRACING_TARGET: &str = "postmeet_service::social";

/// Social platform posts can be published to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SocialPlatform {
    /// LinkedIn member posts.
    Linkedin,
    /// Facebook feed posts.
    Facebook,
    /// X/Twitter posts.
    Twitter,
}

impl SocialPlatform {
    /// Every supported platform.
    pub const ALL: [SocialPlatform; 3] = [Self::Linkedin, Self::Facebook, Self::Twitter];
}

/// Trait for social account and publishing operations.
///
/// Implementations cover the per-platform OAuth flows and content
/// publishing. The sample provider fabricates accounts and receipts; a
/// live adapter talks to the platform APIs with the configured app
/// credentials.
#[async_trait::async_trait]
pub trait SocialProvider: Send + Sync {
    /// List the social accounts connected to the user.
    async fn accounts(&self) -> Result<Vec<SocialAccount>>;

    /// Build the URL the user is sent to for authorizing a platform.
    async fn authorization_url(&self, platform: SocialPlatform) -> Result<url::Url>;

    /// Exchange a platform OAuth callback code for a session.
    async fn exchange_callback(
        &self,
        platform: SocialPlatform,
        code: &str,
    ) -> Result<SocialSession>;

    /// Publish content to a platform on behalf of the user.
    ///
    /// Returns an invalid input error when the access token or content
    /// is missing.
    async fn publish(&self, request: &PublishPost) -> Result<PublishReceipt>;

    /// Check the health of the social provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_lowercase_names() {
        assert_eq!("linkedin".parse::<SocialPlatform>().unwrap(), SocialPlatform::Linkedin);
        assert_eq!("facebook".parse::<SocialPlatform>().unwrap(), SocialPlatform::Facebook);
        assert_eq!("twitter".parse::<SocialPlatform>().unwrap(), SocialPlatform::Twitter);
        assert!("myspace".parse::<SocialPlatform>().is_err());
    }

    #[test]
    fn platform_display_round_trips_serde() {
        for platform in SocialPlatform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }
}
