//! Request types for social publishing.

use serde::{Deserialize, Serialize};

use super::SocialPlatform;

/// Request to publish content to a social platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PublishPost {
    /// Platform the content is published to.
    pub platform: SocialPlatform,
    /// OAuth access token obtained from the platform callback.
    pub access_token: String,
    /// Full post text, hashtags included.
    pub content: String,
}

impl PublishPost {
    /// Create a publish request.
    pub fn new(
        platform: SocialPlatform,
        access_token: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            access_token: access_token.into(),
            content: content.into(),
        }
    }
}
