//! In-memory store for meeting state shared across handlers and the
//! poll worker.
//!
//! Every section is process-scoped and lost on restart. Each section
//! sits behind its own lock; concurrent writes to the same key resolve
//! to the last write, and there are no transactions across sections.

use std::collections::HashMap;
use std::sync::Arc;

use jiff::Timestamp;
use postmeet_service::calendar::MeetingPlatform;
use postmeet_service::content::GeneratedPost;
use postmeet_service::notetaker::{BotRecording, BotStatus, ScheduledBot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use url::Url;

/// Tracing target for store operations.
const TRACING_TARGET: &str = "postmeet_server::service::store";

/// Default LinkedIn generation prompt.
const DEFAULT_LINKEDIN_PROMPT: &str = "Draft a LinkedIn post (120-180 words) that \
summarizes the meeting value in first person. Use a warm, conversational tone \
consistent with an experienced financial advisor. End with up to three hashtags. \
Return only the post text.";

/// Default Facebook generation prompt.
const DEFAULT_FACEBOOK_PROMPT: &str = "Write a Facebook post (100-150 words) that \
summarizes the meeting value in first person. Use a friendly, conversational tone \
that's engaging for Facebook. Include 2-3 relevant hashtags at the end. Make it \
shareable and engaging for Facebook audience. Return only the post text.";

/// Calendar event details captured when a bot is scheduled.
///
/// Recordings surface long after the event list was served, so the
/// event details needed for the completed-meeting record are
/// snapshotted at schedule time.
#[derive(Debug, Clone)]
pub struct MeetingSnapshot {
    /// Event title.
    pub title: String,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
    /// Conference platform hosting the meeting.
    pub platform: MeetingPlatform,
    /// Email of the Google account the event came from.
    pub google_account_email: String,
    /// Display name of the Google account the event came from.
    pub google_account_name: String,
}

/// A scheduled bot paired with the event it records.
#[derive(Debug, Clone)]
pub struct TrackedBot {
    /// The bot as returned by the notetaker service.
    pub bot: ScheduledBot,
    /// Event details snapshotted when the bot was scheduled.
    pub meeting: MeetingSnapshot,
}

/// A finished meeting with its transcript and recording metadata.
#[derive(Debug, Clone)]
pub struct CompletedMeeting {
    /// Calendar event identifier.
    pub meeting_id: String,
    /// Bot that recorded the meeting, empty for manual transcripts.
    pub bot_id: String,
    /// Event title.
    pub title: String,
    /// Speaker-attributed transcript text.
    pub transcript: String,
    /// Where the session recording can be downloaded.
    pub media_url: Option<Url>,
    /// Recording lifecycle state.
    pub status: BotStatus,
    /// When the recording finished.
    pub completed_at: Timestamp,
    /// Meeting length in whole minutes.
    pub duration_minutes: i64,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
    /// Conference platform the meeting ran on.
    pub platform: MeetingPlatform,
    /// Video conference URL, if the event had one.
    pub meeting_url: Option<Url>,
    /// When the meeting started.
    pub start_time: Timestamp,
    /// When the meeting ended.
    pub end_time: Timestamp,
    /// Email of the Google account the event came from.
    pub google_account_email: String,
    /// Display name of the Google account the event came from.
    pub google_account_name: String,
}

impl CompletedMeeting {
    /// Builds the completed-meeting record for a recording produced by
    /// a tracked bot.
    pub fn from_recording(tracked: &TrackedBot, recording: &BotRecording) -> Self {
        Self {
            meeting_id: tracked.bot.meeting_id.clone(),
            bot_id: recording.bot_id.clone(),
            title: tracked.meeting.title.clone(),
            transcript: recording.transcript.clone(),
            media_url: recording.media_url.clone(),
            status: BotStatus::Completed,
            completed_at: recording.completed_at,
            duration_minutes: recording.duration_minutes,
            attendees: tracked.meeting.attendees.clone(),
            platform: tracked.meeting.platform,
            meeting_url: Some(tracked.bot.meeting_url.clone()),
            start_time: tracked.bot.meeting_start,
            end_time: tracked.bot.meeting_end,
            google_account_email: tracked.meeting.google_account_email.clone(),
            google_account_name: tracked.meeting.google_account_name.clone(),
        }
    }
}

/// User-tunable preferences served by the settings endpoints.
///
/// Wire casing is camelCase to match the frontend settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Minutes before the meeting start that a bot joins.
    pub recall_join_before_minutes: u32,
    /// Whether completion notifications are enabled.
    pub enable_notifications: bool,
    /// Whether content is generated without an explicit request.
    pub auto_generate_content: bool,
    /// Platform preselected in the meeting list.
    pub default_platform: String,
    /// Prompt used for LinkedIn post generation.
    pub linkedin_prompt: String,
    /// Prompt used for Facebook post generation.
    pub facebook_prompt: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            recall_join_before_minutes: 5,
            enable_notifications: true,
            auto_generate_content: true,
            default_platform: "zoom".to_owned(),
            linkedin_prompt: DEFAULT_LINKEDIN_PROMPT.to_owned(),
            facebook_prompt: DEFAULT_FACEBOOK_PROMPT.to_owned(),
        }
    }
}

/// Process-scoped store for notetaker flags, scheduled bots, completed
/// meetings, generated content, and user settings.
///
/// Cloning is cheap; clones share the same sections.
#[derive(Clone, Default)]
pub struct MeetingStore {
    notetaker_flags: Arc<RwLock<HashMap<String, bool>>>,
    scheduled_bots: Arc<RwLock<HashMap<String, TrackedBot>>>,
    completed_meetings: Arc<RwLock<HashMap<String, CompletedMeeting>>>,
    generated_content: Arc<RwLock<HashMap<String, HashMap<String, GeneratedPost>>>>,
    settings: Arc<RwLock<UserSettings>>,
}

impl MeetingStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the notetaker is enabled for a meeting. Unset meetings
    /// report disabled.
    pub async fn notetaker_enabled(&self, meeting_id: &str) -> bool {
        let flags = self.notetaker_flags.read().await;
        flags.get(meeting_id).copied().unwrap_or(false)
    }

    /// Sets the notetaker flag for a meeting.
    pub async fn set_notetaker(&self, meeting_id: &str, enabled: bool) {
        let mut flags = self.notetaker_flags.write().await;
        flags.insert(meeting_id.to_owned(), enabled);
        tracing::debug!(
            target: TRACING_TARGET,
            meeting_id = %meeting_id,
            enabled = enabled,
            "Notetaker flag updated"
        );
    }

    /// Tracks a newly scheduled bot, replacing any previous bot for the
    /// same meeting.
    pub async fn insert_bot(&self, tracked: TrackedBot) {
        let mut bots = self.scheduled_bots.write().await;
        tracing::debug!(
            target: TRACING_TARGET,
            meeting_id = %tracked.bot.meeting_id,
            bot_id = %tracked.bot.bot_id,
            "Bot tracked"
        );
        bots.insert(tracked.bot.meeting_id.clone(), tracked);
    }

    /// Looks up the tracked bot for a meeting.
    pub async fn bot(&self, meeting_id: &str) -> Option<TrackedBot> {
        let bots = self.scheduled_bots.read().await;
        bots.get(meeting_id).cloned()
    }

    /// Looks up a tracked bot by its provider-assigned identifier.
    pub async fn bot_by_id(&self, bot_id: &str) -> Option<TrackedBot> {
        let bots = self.scheduled_bots.read().await;
        bots.values().find(|t| t.bot.bot_id == bot_id).cloned()
    }

    /// Stops tracking the bot for a meeting, returning it if present.
    pub async fn remove_bot(&self, meeting_id: &str) -> Option<TrackedBot> {
        let mut bots = self.scheduled_bots.write().await;
        let removed = bots.remove(meeting_id);
        if let Some(tracked) = &removed {
            tracing::debug!(
                target: TRACING_TARGET,
                meeting_id = %meeting_id,
                bot_id = %tracked.bot.bot_id,
                "Bot untracked"
            );
        }
        removed
    }

    /// All tracked bots, in no particular order.
    pub async fn bots(&self) -> Vec<TrackedBot> {
        let bots = self.scheduled_bots.read().await;
        bots.values().cloned().collect()
    }

    /// Marks the bot for a meeting as completed. Unknown meetings are
    /// ignored.
    pub async fn mark_bot_completed(&self, meeting_id: &str) {
        let mut bots = self.scheduled_bots.write().await;
        if let Some(tracked) = bots.get_mut(meeting_id) {
            tracked.bot.status = BotStatus::Completed;
        }
    }

    /// Number of tracked bots, regardless of lifecycle state.
    pub async fn scheduled_bot_count(&self) -> usize {
        let bots = self.scheduled_bots.read().await;
        bots.len()
    }

    /// Inserts or replaces the completed-meeting record.
    pub async fn upsert_completed(&self, meeting: CompletedMeeting) {
        let mut meetings = self.completed_meetings.write().await;
        tracing::debug!(
            target: TRACING_TARGET,
            meeting_id = %meeting.meeting_id,
            bot_id = %meeting.bot_id,
            "Completed meeting stored"
        );
        meetings.insert(meeting.meeting_id.clone(), meeting);
    }

    /// Looks up the completed meeting for a calendar event.
    pub async fn completed(&self, meeting_id: &str) -> Option<CompletedMeeting> {
        let meetings = self.completed_meetings.read().await;
        meetings.get(meeting_id).cloned()
    }

    /// Looks up a completed meeting by the bot that recorded it.
    pub async fn completed_by_bot(&self, bot_id: &str) -> Option<CompletedMeeting> {
        let meetings = self.completed_meetings.read().await;
        meetings.values().find(|m| m.bot_id == bot_id).cloned()
    }

    /// All completed meetings, in no particular order.
    pub async fn completed_meetings(&self) -> Vec<CompletedMeeting> {
        let meetings = self.completed_meetings.read().await;
        meetings.values().cloned().collect()
    }

    /// Number of completed meetings.
    pub async fn completed_count(&self) -> usize {
        let meetings = self.completed_meetings.read().await;
        meetings.len()
    }

    /// Stores generated posts for a meeting, keyed by platform.
    /// Platforms already present are replaced; others are kept.
    pub async fn save_posts(&self, meeting_id: &str, posts: Vec<GeneratedPost>) {
        let mut content = self.generated_content.write().await;
        let entry = content.entry(meeting_id.to_owned()).or_default();
        for post in posts {
            entry.insert(post.platform.clone(), post);
        }
        tracing::debug!(
            target: TRACING_TARGET,
            meeting_id = %meeting_id,
            platforms = entry.len(),
            "Generated content stored"
        );
    }

    /// Generated posts for a meeting, keyed by platform.
    pub async fn posts(&self, meeting_id: &str) -> Option<HashMap<String, GeneratedPost>> {
        let content = self.generated_content.read().await;
        content.get(meeting_id).cloned()
    }

    /// Current user settings.
    pub async fn settings(&self) -> UserSettings {
        let settings = self.settings.read().await;
        settings.clone()
    }

    /// Applies a partial update to the settings under the section lock
    /// and returns the merged document.
    pub async fn update_settings<F>(&self, apply: F) -> UserSettings
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut settings = self.settings.write().await;
        apply(&mut settings);
        tracing::debug!(target: TRACING_TARGET, "Settings updated");
        settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn sample_tracked(meeting_id: &str, bot_id: &str) -> TrackedBot {
        let meeting_url: Url = "https://zoom.us/j/123456".parse().unwrap();
        let start = Timestamp::now() + SignedDuration::from_hours(1);
        TrackedBot {
            bot: ScheduledBot {
                bot_id: bot_id.to_owned(),
                meeting_id: meeting_id.to_owned(),
                meeting_url,
                bot_name: "PostMeeting Bot".to_owned(),
                join_at: start - SignedDuration::from_mins(5),
                meeting_start: start,
                meeting_end: start + SignedDuration::from_mins(30),
                status: BotStatus::Scheduled,
            },
            meeting: MeetingSnapshot {
                title: "Team Standup".to_owned(),
                attendees: vec!["test@example.com".to_owned()],
                platform: MeetingPlatform::Zoom,
                google_account_email: "test@example.com".to_owned(),
                google_account_name: "Test User".to_owned(),
            },
        }
    }

    #[tokio::test]
    async fn notetaker_flag_defaults_to_disabled() {
        let store = MeetingStore::new();
        assert!(!store.notetaker_enabled("1_0").await);

        store.set_notetaker("1_0", true).await;
        assert!(store.notetaker_enabled("1_0").await);

        store.set_notetaker("1_0", false).await;
        assert!(!store.notetaker_enabled("1_0").await);
    }

    #[tokio::test]
    async fn bot_lifecycle_round_trips() {
        let store = MeetingStore::new();
        store.insert_bot(sample_tracked("1_0", "bot-1")).await;

        let tracked = store.bot("1_0").await.unwrap();
        assert_eq!(tracked.bot.bot_id, "bot-1");
        assert!(store.bot_by_id("bot-1").await.is_some());
        assert_eq!(store.scheduled_bot_count().await, 1);

        store.mark_bot_completed("1_0").await;
        let tracked = store.bot("1_0").await.unwrap();
        assert_eq!(tracked.bot.status, BotStatus::Completed);

        assert!(store.remove_bot("1_0").await.is_some());
        assert!(store.bot("1_0").await.is_none());
        assert!(store.remove_bot("1_0").await.is_none());
    }

    #[tokio::test]
    async fn completed_meetings_follow_last_write() {
        let store = MeetingStore::new();
        let tracked = sample_tracked("1_0", "bot-1");
        let recording = BotRecording {
            bot_id: "bot-1".to_owned(),
            transcript: "First pass.".to_owned(),
            media_url: None,
            duration_minutes: 30,
            completed_at: Timestamp::now(),
        };

        store
            .upsert_completed(CompletedMeeting::from_recording(&tracked, &recording))
            .await;
        let mut meeting = store.completed("1_0").await.unwrap();
        assert_eq!(meeting.transcript, "First pass.");
        assert_eq!(meeting.title, "Team Standup");

        meeting.transcript = "Second pass.".to_owned();
        store.upsert_completed(meeting).await;
        let meeting = store.completed("1_0").await.unwrap();
        assert_eq!(meeting.transcript, "Second pass.");
        assert_eq!(store.completed_count().await, 1);
        assert!(store.completed_by_bot("bot-1").await.is_some());
        assert!(store.completed_by_bot("bot-2").await.is_none());
    }

    #[tokio::test]
    async fn posts_replace_per_platform() {
        let store = MeetingStore::new();
        let post = |platform: &str, content: &str| GeneratedPost {
            content: content.to_owned(),
            hashtags: String::new(),
            disclaimer: String::new(),
            platform: platform.to_owned(),
        };

        store.save_posts("1_0", vec![post("linkedin", "v1")]).await;
        store
            .save_posts("1_0", vec![post("linkedin", "v2"), post("facebook", "fb")])
            .await;

        let posts = store.posts("1_0").await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts["linkedin"].content, "v2");
        assert_eq!(posts["facebook"].content, "fb");
        assert!(store.posts("2_0").await.is_none());
    }

    #[tokio::test]
    async fn settings_merge_keeps_unset_fields() {
        let store = MeetingStore::new();
        let defaults = store.settings().await;
        assert_eq!(defaults.recall_join_before_minutes, 5);
        assert_eq!(defaults.default_platform, "zoom");

        let merged = store
            .update_settings(|s| s.recall_join_before_minutes = 10)
            .await;
        assert_eq!(merged.recall_join_before_minutes, 10);
        assert_eq!(merged.enable_notifications, defaults.enable_notifications);
        assert_eq!(merged.linkedin_prompt, defaults.linkedin_prompt);
    }

    #[test]
    fn settings_serialize_camel_case() {
        let json = serde_json::to_value(UserSettings::default()).unwrap();
        assert_eq!(json["recallJoinBeforeMinutes"], 5);
        assert_eq!(json["enableNotifications"], true);
        assert_eq!(json["autoGenerateContent"], true);
        assert_eq!(json["defaultPlatform"], "zoom");
        assert!(json["linkedinPrompt"].as_str().unwrap().contains("LinkedIn"));
        assert!(json["facebookPrompt"].as_str().unwrap().contains("Facebook"));
    }
}
