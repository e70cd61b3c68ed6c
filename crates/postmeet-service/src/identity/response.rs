//! Response types for identity operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// Authorization URL and state for starting an OAuth flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AuthorizationRedirect {
    /// URL of the consent screen the user is redirected to.
    pub auth_url: Url,
    /// Opaque state echoed back on the callback.
    pub state: String,
}

/// An authorized Google session produced by a code exchange.
///
/// Field values are strings end to end because the session is forwarded
/// to the frontend as URL query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AuthorizedSession {
    /// Bearer token for subsequent API calls.
    pub access_token: String,
    /// Token type, always `bearer`.
    pub token_type: String,
    /// Identifier of the authorized user.
    pub user_id: String,
    /// Email address of the authorized user.
    pub user_email: String,
    /// Display name of the authorized user.
    pub user_name: String,
    /// Avatar URL, empty when the profile has none.
    pub user_picture: String,
    /// Identifier of the linked Google account.
    pub google_account_id: String,
    /// Email address of the linked Google account.
    pub google_account_email: String,
    /// Whether the linked Google account is active, as a string flag.
    pub google_account_active: String,
}

/// Profile details of the authorized user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct UserProfile {
    /// Identifier of the user.
    pub id: String,
    /// Email address of the user.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Avatar URL, empty when the profile has none.
    pub picture: String,
}

/// A Google account linked to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LinkedAccount {
    /// Numeric identifier of the linked account.
    pub id: i64,
    /// Email address of the account.
    pub email: String,
    /// Display name of the account.
    pub name: String,
    /// Avatar URL, empty when the profile has none.
    pub picture: String,
    /// Whether the account connection is usable.
    pub is_active: bool,
    /// Whether this is the primary account of the user.
    pub is_primary: bool,
    /// Connection status label.
    pub status: String,
    /// Number of calendar events seen on the last sync.
    pub events_count: u32,
    /// Timestamp of the last successful sync.
    pub last_sync: Timestamp,
    /// Error from the last sync attempt, if any.
    pub error_message: Option<String>,
}

/// Result of re-syncing a linked account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AccountSync {
    /// Identifier of the synced account.
    pub account_id: i64,
    /// Number of calendar events pulled during the sync.
    pub events_synced: u32,
}
