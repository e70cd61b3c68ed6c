//! Request types for user settings handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::UserSettings;

/// Partial update of user settings.
///
/// Absent fields keep their stored values.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    /// Minutes before the meeting start to join the bot.
    pub recall_join_before_minutes: Option<u32>,
    /// Whether to send notifications when content is ready.
    pub enable_notifications: Option<bool>,
    /// Whether to generate content as soon as a transcript arrives.
    pub auto_generate_content: Option<bool>,
    /// Preferred platform for generated content.
    pub default_platform: Option<String>,
    /// Prompt template for LinkedIn posts.
    pub linkedin_prompt: Option<String>,
    /// Prompt template for Facebook posts.
    pub facebook_prompt: Option<String>,
}

impl UpdateSettings {
    /// Merges the provided fields into the stored settings.
    pub fn apply(self, settings: &mut UserSettings) {
        if let Some(minutes) = self.recall_join_before_minutes {
            settings.recall_join_before_minutes = minutes;
        }
        if let Some(enabled) = self.enable_notifications {
            settings.enable_notifications = enabled;
        }
        if let Some(enabled) = self.auto_generate_content {
            settings.auto_generate_content = enabled;
        }
        if let Some(platform) = self.default_platform {
            settings.default_platform = platform;
        }
        if let Some(prompt) = self.linkedin_prompt {
            settings.linkedin_prompt = prompt;
        }
        if let Some(prompt) = self.facebook_prompt {
            settings.facebook_prompt = prompt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut settings = UserSettings::default();
        let update = UpdateSettings {
            recall_join_before_minutes: Some(10),
            default_platform: Some("facebook".to_owned()),
            ..UpdateSettings::default()
        };

        update.apply(&mut settings);

        assert_eq!(settings.recall_join_before_minutes, 10);
        assert_eq!(settings.default_platform, "facebook");
        assert!(settings.enable_notifications);
    }

    #[test]
    fn update_accepts_camel_case_keys() {
        let update: UpdateSettings =
            serde_json::from_str(r#"{"recallJoinBeforeMinutes": 2, "enableNotifications": false}"#)
                .unwrap();
        assert_eq!(update.recall_join_before_minutes, Some(2));
        assert_eq!(update.enable_notifications, Some(false));
    }
}
