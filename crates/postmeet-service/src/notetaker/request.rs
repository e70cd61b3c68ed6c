//! Request types for notetaker operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default lead time before the meeting start, in minutes.
const DEFAULT_JOIN_BEFORE_MINUTES: u32 = 5;

/// Request to schedule a recording bot for a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ScheduleBot {
    /// Identifier of the calendar event the bot records.
    pub meeting_id: String,
    /// Video conference URL the bot joins.
    pub meeting_url: Url,
    /// Meeting title, used for the bot display name.
    pub title: String,
    /// When the meeting starts.
    pub meeting_start: Timestamp,
    /// When the meeting ends.
    pub meeting_end: Timestamp,
    /// How many minutes before the start the bot joins.
    #[serde(default = "default_join_before_minutes")]
    pub join_before_minutes: u32,
}

impl ScheduleBot {
    /// Create a schedule request with the default lead time.
    pub fn new(
        meeting_id: impl Into<String>,
        meeting_url: Url,
        meeting_start: Timestamp,
        meeting_end: Timestamp,
    ) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            meeting_url,
            title: "Untitled Meeting".to_owned(),
            meeting_start,
            meeting_end,
            join_before_minutes: DEFAULT_JOIN_BEFORE_MINUTES,
        }
    }

    /// Set the meeting title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set how many minutes before the start the bot joins.
    #[must_use]
    pub fn with_join_before_minutes(mut self, minutes: u32) -> Self {
        self.join_before_minutes = minutes;
        self
    }

    /// Meeting length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.meeting_end.duration_since(self.meeting_start).as_mins()
    }
}

fn default_join_before_minutes() -> u32 {
    DEFAULT_JOIN_BEFORE_MINUTES
}
