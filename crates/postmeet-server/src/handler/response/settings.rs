//! User settings response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::UserSettings;

/// Confirmation that settings were merged and stored.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SettingsUpdated {
    /// Human-readable result summary.
    pub message: String,
    /// The settings document after the merge.
    pub settings: UserSettings,
}

impl SettingsUpdated {
    /// Creates a new instance of [`SettingsUpdated`].
    pub fn new(settings: UserSettings) -> Self {
        Self {
            message: "Settings updated successfully".to_owned(),
            settings,
        }
    }
}
