//! Response types for social publishing.

use serde::{Deserialize, Serialize};
use url::Url;

use super::SocialPlatform;

/// A social account connected to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SocialAccount {
    /// Account identifier.
    pub id: i64,
    /// Platform the account belongs to.
    pub platform: SocialPlatform,
    /// Display name on the platform.
    pub account_name: String,
    /// Whether the account connection is usable.
    pub is_active: bool,
}

/// Session obtained from a platform OAuth callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SocialSession {
    /// OAuth access token for publishing.
    pub access_token: String,
    /// Platform the session belongs to.
    pub platform: SocialPlatform,
    /// Token lifetime in seconds, when the platform reports one.
    pub expires_in: Option<u64>,
}

/// Receipt for a published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PublishReceipt {
    /// Human-readable result summary.
    pub message: String,
    /// Platform-assigned post identifier.
    pub post_id: String,
    /// Share dialog URL, for platforms that cannot post directly.
    pub share_url: Option<Url>,
    /// Display name of the publishing user, when known.
    pub user_name: Option<String>,
    /// Extra context about how the post was delivered.
    pub note: Option<String>,
}
