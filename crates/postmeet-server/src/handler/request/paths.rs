//! Path parameter types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters for meeting-level operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingPathParams {
    /// Calendar identifier of the meeting.
    pub meeting_id: String,
}

/// Path parameters for publishing meeting content to a platform.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingPlatformPathParams {
    /// Calendar identifier of the meeting.
    pub meeting_id: String,
    /// Social platform to publish to.
    pub platform: String,
}

/// Path parameters for linked Google account operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AccountPathParams {
    /// Identifier of the linked account.
    pub account_id: i64,
}

/// Path parameters for notetaker bot operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BotPathParams {
    /// Provider-assigned bot identifier.
    pub bot_id: String,
}

/// Path parameters for social platform operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PlatformPathParams {
    /// Social platform name.
    pub platform: String,
}
