//! Request types for content generation.

use serde::{Deserialize, Serialize};

/// Platform used when a prompt does not name one.
const DEFAULT_PLATFORM: &str = "linkedin";

/// Prompt for generating a social post from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PostPrompt {
    /// Speaker-attributed meeting transcript.
    pub transcript: String,
    /// Title of the meeting the transcript came from.
    pub meeting_title: String,
    /// Target platform, free-form (e.g. `linkedin`, `facebook`).
    pub platform: String,
    /// User-supplied prompt overriding the platform default.
    pub custom_prompt: Option<String>,
}

impl PostPrompt {
    /// Create a prompt targeting the default platform.
    pub fn new(transcript: impl Into<String>, meeting_title: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            meeting_title: meeting_title.into(),
            platform: DEFAULT_PLATFORM.to_owned(),
            custom_prompt: None,
        }
    }

    /// Set the target platform.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Override the platform's default generation prompt.
    #[must_use]
    pub fn with_custom_prompt(mut self, custom_prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(custom_prompt.into());
        self
    }
}

/// Prompt for generating a follow-up email from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EmailPrompt {
    /// Speaker-attributed meeting transcript.
    pub transcript: String,
    /// Title of the meeting the transcript came from.
    pub meeting_title: String,
    /// Attendee emails for addressing the email.
    pub attendees: Vec<String>,
}

impl EmailPrompt {
    /// Create an email prompt without attendees.
    pub fn new(transcript: impl Into<String>, meeting_title: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            meeting_title: meeting_title.into(),
            attendees: Vec::new(),
        }
    }

    /// Set the attendee list.
    #[must_use]
    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }
}
