//! Linked account response types.

use postmeet_service::identity::{AccountSync, LinkedAccount};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response for listing linked Google accounts.
pub type LinkedAccounts = Vec<LinkedAccount>;

/// Confirmation that a Google account was disconnected.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AccountDisconnected {
    /// Human-readable result summary.
    pub message: String,
    /// Identifier of the removed account.
    pub account_id: i64,
}

impl AccountDisconnected {
    /// Creates a new instance of [`AccountDisconnected`].
    pub fn new(account_id: i64) -> Self {
        Self {
            message: "Google account disconnected successfully".to_owned(),
            account_id,
        }
    }
}

/// Confirmation that a linked account was synced.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AccountSynced {
    /// Human-readable result summary.
    pub message: String,
    /// Identifier of the synced account.
    pub account_id: i64,
    /// Number of calendar events pulled during the sync.
    pub events_synced: u32,
}

impl AccountSynced {
    /// Creates a new instance of [`AccountSynced`].
    pub fn from_sync(sync: AccountSync) -> Self {
        Self {
            message: "Account synced successfully".to_owned(),
            account_id: sync.account_id,
            events_synced: sync.events_synced,
        }
    }
}
