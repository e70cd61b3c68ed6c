//! Request types for meeting handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to toggle the notetaker bot for a meeting.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ToggleNotetaker {
    /// Whether a bot should attend the meeting. Defaults to disabled.
    #[serde(default)]
    pub notetaker_enabled: bool,
}

/// Request to attach a transcript to a meeting.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct SubmitTranscript {
    /// Raw transcript text.
    #[validate(length(min = 1))]
    pub transcript: String,
}

/// Request to generate social media content for a meeting.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GenerateContent {
    /// Single platform to generate for. Used when `platforms` is absent.
    pub platform: Option<String>,
    /// Platforms to generate for. Takes precedence over `platform`.
    pub platforms: Option<Vec<String>>,
}

impl GenerateContent {
    /// Returns the platforms to generate content for.
    pub fn requested_platforms(&self) -> Vec<String> {
        match &self.platforms {
            Some(platforms) => platforms.clone(),
            None => {
                let platform = self.platform.as_deref().unwrap_or("linkedin");
                vec![platform.to_owned()]
            }
        }
    }
}

/// Request to publish generated content to a social platform.
///
/// Fields default to empty so that presence checks produce the same
/// error messages as emptiness checks.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PublishContent {
    /// OAuth access token for the target platform.
    #[serde(default)]
    pub access_token: String,
    /// Post text to publish.
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_platforms_defaults_to_linkedin() {
        let request = GenerateContent::default();
        assert_eq!(request.requested_platforms(), vec!["linkedin".to_owned()]);
    }

    #[test]
    fn requested_platforms_prefers_explicit_list() {
        let request = GenerateContent {
            platform: Some("twitter".to_owned()),
            platforms: Some(vec!["linkedin".to_owned(), "facebook".to_owned()]),
        };
        assert_eq!(
            request.requested_platforms(),
            vec!["linkedin".to_owned(), "facebook".to_owned()],
        );
    }

    #[test]
    fn toggle_defaults_to_disabled() {
        let request: ToggleNotetaker = serde_json::from_str("{}").unwrap();
        assert!(!request.notetaker_enabled);
    }
}
