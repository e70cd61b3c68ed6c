//! Notetaker bot response types.

use std::collections::HashMap;

use jiff::Timestamp;
use postmeet_service::notetaker::{BotRecording, BotStatus, ScheduledBot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::service::TrackedBot;

/// Status summary for a managed bot.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BotEntry {
    /// Provider-assigned bot identifier.
    pub bot_id: String,
    /// Current bot status.
    pub status: BotStatus,
    /// Meeting URL the bot joins.
    pub meeting_url: Url,
    /// Scheduled start of the meeting.
    pub start_time: Timestamp,
    /// Scheduled end of the meeting.
    pub end_time: Timestamp,
}

impl BotEntry {
    /// Creates a new instance of [`BotEntry`].
    pub fn from_tracked(tracked: &TrackedBot) -> Self {
        Self {
            bot_id: tracked.bot.bot_id.clone(),
            status: tracked.bot.status,
            meeting_url: tracked.bot.meeting_url.clone(),
            start_time: tracked.bot.meeting_start,
            end_time: tracked.bot.meeting_end,
        }
    }
}

/// Response for listing managed bots.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BotList {
    /// Status summaries for all tracked bots.
    pub managed_bots: Vec<BotEntry>,
    /// Number of tracked bots.
    pub total_bots: usize,
}

impl BotList {
    /// Creates a new instance of [`BotList`].
    pub fn from_tracked(tracked: &[TrackedBot]) -> Self {
        let managed_bots: Vec<BotEntry> = tracked.iter().map(BotEntry::from_tracked).collect();
        let total_bots = managed_bots.len();
        Self {
            managed_bots,
            total_bots,
        }
    }
}

/// Transcript captured by a completed bot.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BotTranscript {
    /// Raw transcript text.
    pub transcript: String,
}

/// Outcome of a manual poll cycle.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PollOutcome {
    /// Human-readable result summary.
    pub message: String,
    /// Recordings collected during the cycle.
    pub completed_bots: Vec<BotRecording>,
}

impl PollOutcome {
    /// Creates a new instance of [`PollOutcome`].
    pub fn from_recordings(recordings: Vec<BotRecording>) -> Self {
        Self {
            message: format!("Polled {} completed bots", recordings.len()),
            completed_bots: recordings,
        }
    }
}

/// Snapshot of the bot scheduler.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SchedulerStatus {
    /// Identifiers of all tracked bots.
    pub managed_bots: Vec<String>,
    /// Scheduled bots keyed by meeting identifier.
    pub scheduled_bots: HashMap<String, ScheduledBot>,
    /// Number of meetings with a stored transcript.
    pub completed_meetings: usize,
    /// Number of meetings with a tracked bot.
    pub total_meetings: usize,
}

impl SchedulerStatus {
    /// Creates a new instance of [`SchedulerStatus`].
    pub fn new(tracked: Vec<TrackedBot>, completed_meetings: usize) -> Self {
        let managed_bots = tracked
            .iter()
            .map(|entry| entry.bot.bot_id.clone())
            .collect();
        let scheduled_bots: HashMap<String, ScheduledBot> = tracked
            .into_iter()
            .map(|entry| (entry.bot.meeting_id.clone(), entry.bot))
            .collect();
        let total_meetings = scheduled_bots.len();

        Self {
            managed_bots,
            scheduled_bots,
            completed_meetings,
            total_meetings,
        }
    }
}
