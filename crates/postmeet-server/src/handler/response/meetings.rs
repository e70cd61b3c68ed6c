//! Meeting response types.

use std::collections::HashMap;

use jiff::Timestamp;
use postmeet_service::calendar::MeetingPlatform;
use postmeet_service::content::GeneratedPost;
use postmeet_service::notetaker::BotStatus;
use postmeet_service::social::PublishReceipt;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::service::CompletedMeeting;

/// Confirmation that the notetaker flag was updated.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NotetakerToggled {
    /// Human-readable result summary.
    pub message: String,
    /// Meeting the flag applies to.
    pub meeting_id: String,
    /// The new flag value.
    pub notetaker_enabled: bool,
    /// Whether a bot is tracked for the meeting after the update.
    pub bot_scheduled: bool,
}

impl NotetakerToggled {
    /// Creates a new instance of [`NotetakerToggled`].
    pub fn new(meeting_id: String, notetaker_enabled: bool, bot_scheduled: bool) -> Self {
        Self {
            message: "Notetaker setting updated".to_owned(),
            meeting_id,
            notetaker_enabled,
            bot_scheduled,
        }
    }
}

/// Confirmation that a transcript was stored.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptUpdated {
    /// Human-readable result summary.
    pub message: String,
    /// Meeting the transcript belongs to.
    pub meeting_id: String,
}

impl TranscriptUpdated {
    /// Creates a new instance of [`TranscriptUpdated`].
    pub fn new(meeting_id: String) -> Self {
        Self {
            message: "Transcript updated".to_owned(),
            meeting_id,
        }
    }
}

/// Transcript and recording details for a completed meeting.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingTranscript {
    /// Meeting the transcript belongs to.
    pub meeting_id: String,
    /// Raw transcript text.
    pub transcript: String,
    /// Recording status.
    pub status: BotStatus,
    /// When the recording finished.
    pub completed_at: Timestamp,
    /// Recording length in minutes.
    pub duration: i64,
    /// Recording media URL, when the provider exposes one.
    pub media_url: Option<Url>,
}

impl MeetingTranscript {
    /// Creates a new instance of [`MeetingTranscript`].
    pub fn from_completed(meeting: CompletedMeeting) -> Self {
        Self {
            meeting_id: meeting.meeting_id,
            transcript: meeting.transcript,
            status: meeting.status,
            completed_at: meeting.completed_at,
            duration: meeting.duration_minutes,
            media_url: meeting.media_url,
        }
    }
}

/// Freshly generated posts for a meeting.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ContentGenerated {
    /// Meeting the posts belong to.
    pub meeting_id: String,
    /// Generated posts keyed by platform.
    pub content: HashMap<String, GeneratedPost>,
}

/// Stored posts and transcript for a meeting.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingContent {
    /// Meeting the posts belong to.
    pub meeting_id: String,
    /// Transcript the posts were generated from.
    pub transcript: String,
    /// Stored posts keyed by platform.
    pub content: HashMap<String, GeneratedPost>,
}

/// A past meeting with its recording details.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PastMeeting {
    /// Calendar identifier of the meeting.
    pub id: String,
    /// Meeting title.
    pub title: String,
    /// Scheduled start of the meeting.
    pub start_time: Timestamp,
    /// Scheduled end of the meeting.
    pub end_time: Timestamp,
    /// Attendee emails.
    pub attendees: Vec<String>,
    /// Conferencing platform the meeting ran on.
    pub platform: MeetingPlatform,
    /// Raw transcript text.
    pub transcript: String,
    /// Recording status.
    pub status: BotStatus,
    /// When the recording finished.
    pub completed_at: Timestamp,
    /// Recording length in minutes.
    pub duration: i64,
    /// Recording media URL, when the provider exposes one.
    pub media_url: Option<Url>,
    /// Email of the Google account the meeting was discovered from.
    pub google_account_email: String,
    /// Display name of the Google account the meeting was discovered from.
    pub google_account_name: String,
}

impl PastMeeting {
    /// Creates a new instance of [`PastMeeting`].
    pub fn from_completed(meeting: CompletedMeeting) -> Self {
        Self {
            id: meeting.meeting_id,
            title: meeting.title,
            start_time: meeting.start_time,
            end_time: meeting.end_time,
            attendees: meeting.attendees,
            platform: meeting.platform,
            transcript: meeting.transcript,
            status: meeting.status,
            completed_at: meeting.completed_at,
            duration: meeting.duration_minutes,
            media_url: meeting.media_url,
            google_account_email: meeting.google_account_email,
            google_account_name: meeting.google_account_name,
        }
    }
}

/// Response for listing past meetings.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PastMeetings {
    /// Past meetings, most recent first.
    pub meetings: Vec<PastMeeting>,
}

impl PastMeetings {
    /// Creates a list sorted by start time, most recent first.
    pub fn from_completed(completed: Vec<CompletedMeeting>) -> Self {
        let mut meetings: Vec<PastMeeting> = completed
            .into_iter()
            .map(PastMeeting::from_completed)
            .collect();
        meetings.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Self { meetings }
    }
}

/// A drafted follow-up email for a meeting.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmailDraft {
    /// Meeting the email follows up on.
    pub meeting_id: String,
    /// Full email text including the subject line.
    pub email_content: String,
    /// Title of the meeting.
    pub meeting_title: String,
}

/// Receipt for a post published to a social platform.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PostPublished {
    /// Human-readable result summary.
    pub message: String,
    /// Platform-assigned post identifier.
    pub post_id: String,
    /// Share dialog URL, for platforms that cannot post directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<Url>,
    /// Display name of the publishing user, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Extra context about how the post was delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PostPublished {
    /// Creates a new instance of [`PostPublished`].
    pub fn from_receipt(receipt: PublishReceipt) -> Self {
        Self {
            message: receipt.message,
            post_id: receipt.post_id,
            share_url: receipt.share_url,
            user_name: receipt.user_name,
            note: receipt.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn completed(meeting_id: &str, start_offset_hours: i64) -> CompletedMeeting {
        let start = Timestamp::now() + SignedDuration::from_hours(start_offset_hours);
        CompletedMeeting {
            meeting_id: meeting_id.to_owned(),
            bot_id: format!("bot-{meeting_id}"),
            title: "Team Standup".to_owned(),
            transcript: "We discussed the roadmap.".to_owned(),
            media_url: None,
            status: BotStatus::Completed,
            completed_at: Timestamp::now(),
            duration_minutes: 30,
            attendees: vec!["alice@example.com".to_owned()],
            platform: MeetingPlatform::Zoom,
            meeting_url: None,
            start_time: start,
            end_time: start + SignedDuration::from_mins(30),
            google_account_email: "test@example.com".to_owned(),
            google_account_name: "Test User".to_owned(),
        }
    }

    #[test]
    fn past_meetings_sort_most_recent_first() {
        let meetings =
            PastMeetings::from_completed(vec![completed("1_0", -48), completed("1_1", -2)]);
        assert_eq!(meetings.meetings[0].id, "1_1");
        assert_eq!(meetings.meetings[1].id, "1_0");
    }

    #[test]
    fn publish_receipt_omits_absent_fields() {
        let response = PostPublished::from_receipt(PublishReceipt {
            message: "Posted successfully to LinkedIn".to_owned(),
            post_id: "linkedin_post_1".to_owned(),
            share_url: None,
            user_name: None,
            note: None,
        });

        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("share_url").is_none());
        assert!(body.get("note").is_none());
    }
}
