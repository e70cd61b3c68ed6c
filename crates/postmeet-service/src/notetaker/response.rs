//! Response types for notetaker operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// Lifecycle state of a scheduled bot.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum BotStatus {
    /// Bot is waiting to join its meeting.
    #[default]
    Scheduled,
    /// Bot finished recording and produced a transcript.
    Completed,
    /// Bot could not complete its recording.
    Failed,
}

/// A bot scheduled to record a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ScheduledBot {
    /// Provider-assigned bot identifier.
    pub bot_id: String,
    /// Identifier of the calendar event being recorded.
    pub meeting_id: String,
    /// Video conference URL the bot joins.
    pub meeting_url: Url,
    /// Display name the bot announces itself with.
    pub bot_name: String,
    /// When the bot joins the call.
    pub join_at: Timestamp,
    /// When the meeting starts.
    pub meeting_start: Timestamp,
    /// When the meeting ends.
    pub meeting_end: Timestamp,
    /// Current lifecycle state.
    pub status: BotStatus,
}

impl ScheduledBot {
    /// Whether the bot is still waiting for its meeting to end.
    pub fn is_pending(&self) -> bool {
        self.status == BotStatus::Scheduled
    }
}

/// Recording produced by a bot after its meeting ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BotRecording {
    /// Identifier of the bot that produced the recording.
    pub bot_id: String,
    /// Speaker-attributed transcript text.
    pub transcript: String,
    /// Where the session recording can be downloaded.
    pub media_url: Option<Url>,
    /// Recorded meeting length in whole minutes.
    pub duration_minutes: i64,
    /// When the recording finished.
    pub completed_at: Timestamp,
}
