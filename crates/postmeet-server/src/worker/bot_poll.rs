//! Bot polling worker.
//!
//! Periodically asks the notetaker service for completed recordings and
//! folds them into the meeting store.

use std::time::Duration;

use postmeet_service::NotetakerService;
use postmeet_service::notetaker::{BotRecording, ScheduledBot};
use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::service::{CompletedMeeting, MeetingStore};

/// Tracing target for bot poll worker operations.
const TRACING_TARGET: &str = "postmeet_server::worker::bot_poll";

/// Default pause between poll cycles.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);

/// Pause after a failed cycle before polling again.
const ERROR_BACKOFF: Duration = Duration::from_secs(60);

/// Polls pending bots once and stores any completed recordings.
///
/// Shared between the worker loop and the manual poll endpoint. Bots
/// already marked completed are skipped, so repeated polls only report
/// new recordings.
pub async fn poll_once(
    notetaker: &NotetakerService,
    store: &MeetingStore,
) -> Result<Vec<BotRecording>> {
    let pending: Vec<ScheduledBot> = store
        .bots()
        .await
        .into_iter()
        .filter(|tracked| tracked.bot.is_pending())
        .map(|tracked| tracked.bot)
        .collect();

    if pending.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(
        target: TRACING_TARGET,
        pending = pending.len(),
        "Polling pending bots"
    );

    let recordings = notetaker.poll_completed(&pending).await?;

    for recording in &recordings {
        let Some(tracked) = store.bot_by_id(&recording.bot_id).await else {
            tracing::warn!(
                target: TRACING_TARGET,
                bot_id = %recording.bot_id,
                "Recording for untracked bot dropped"
            );
            continue;
        };

        store
            .upsert_completed(CompletedMeeting::from_recording(&tracked, recording))
            .await;
        store.mark_bot_completed(&tracked.bot.meeting_id).await;

        tracing::info!(
            target: TRACING_TARGET,
            meeting_id = %tracked.bot.meeting_id,
            bot_id = %recording.bot_id,
            "Recording stored"
        );
    }

    Ok(recordings)
}

/// Bot polling worker.
///
/// Drives [`poll_once`] on a fixed interval so completed recordings
/// surface without a manual poll request.
pub struct BotPollWorker {
    notetaker: NotetakerService,
    store: MeetingStore,
    poll_interval: Duration,
}

impl BotPollWorker {
    /// Create a worker with the default poll interval.
    pub fn new(notetaker: NotetakerService, store: MeetingStore) -> Self {
        Self {
            notetaker,
            store,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the pause between poll cycles.
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Run the bot poll worker until cancelled.
    ///
    /// Logs lifecycle events (start, stop, errors) internally.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        tracing::info!(
            target: TRACING_TARGET,
            interval_secs = self.poll_interval.as_secs(),
            "Starting bot poll worker"
        );

        let result = self.run_inner(cancel).await;

        match &result {
            Ok(()) => {
                tracing::info!(
                    target: TRACING_TARGET,
                    "Bot poll worker stopped"
                );
            }
            Err(err) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %err,
                    "Bot poll worker failed"
                );
            }
        }

        result
    }

    /// Internal run loop.
    async fn run_inner(&self, cancel: CancellationToken) -> Result<()> {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!(
                        target: TRACING_TARGET,
                        "Bot poll worker shutdown requested"
                    );
                    break;
                }
                _ = tokio::time::sleep(self.poll_interval) => {
                    match poll_once(&self.notetaker, &self.store).await {
                        Ok(recordings) if recordings.is_empty() => {
                            tracing::debug!(
                                target: TRACING_TARGET,
                                "Poll cycle found no completed bots"
                            );
                        }
                        Ok(recordings) => {
                            tracing::info!(
                                target: TRACING_TARGET,
                                completed = recordings.len(),
                                "Poll cycle stored recordings"
                            );
                        }
                        Err(err) => {
                            tracing::error!(
                                target: TRACING_TARGET,
                                error = %err,
                                "Poll cycle failed"
                            );
                            // Brief pause before retrying
                            tokio::time::sleep(ERROR_BACKOFF).await;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use postmeet_service::calendar::MeetingPlatform;
    use postmeet_service::notetaker::{BotStatus, SampleProvider};

    use super::*;
    use crate::service::{MeetingSnapshot, TrackedBot};

    fn ended_tracked(meeting_id: &str, bot_id: &str) -> TrackedBot {
        let end = Timestamp::now() - SignedDuration::from_mins(30);
        TrackedBot {
            bot: ScheduledBot {
                bot_id: bot_id.to_owned(),
                meeting_id: meeting_id.to_owned(),
                meeting_url: "https://zoom.us/j/123456789".parse().unwrap(),
                bot_name: "PostMeeting Bot".to_owned(),
                join_at: end - SignedDuration::from_mins(35),
                meeting_start: end - SignedDuration::from_mins(30),
                meeting_end: end,
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
    async fn poll_stores_recordings_for_ended_meetings() -> anyhow::Result<()> {
        let notetaker = SampleProvider::new().into_service();
        let store = MeetingStore::new();
        store.insert_bot(ended_tracked("1_0", "bot-1")).await;

        let recordings = poll_once(&notetaker, &store).await?;
        assert_eq!(recordings.len(), 1);
        assert_eq!(recordings[0].bot_id, "bot-1");

        let meeting = store.completed("1_0").await.unwrap();
        assert_eq!(meeting.title, "Team Standup");
        assert!(meeting.transcript.contains("Test User:"));
        assert_eq!(meeting.duration_minutes, 30);

        let tracked = store.bot("1_0").await.unwrap();
        assert_eq!(tracked.bot.status, BotStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn completed_bots_are_not_reported_twice() -> anyhow::Result<()> {
        let notetaker = SampleProvider::new().into_service();
        let store = MeetingStore::new();
        store.insert_bot(ended_tracked("1_0", "bot-1")).await;

        let first = poll_once(&notetaker, &store).await?;
        assert_eq!(first.len(), 1);

        let second = poll_once(&notetaker, &store).await?;
        assert!(second.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn future_meetings_stay_pending() -> anyhow::Result<()> {
        let notetaker = SampleProvider::new().into_service();
        let store = MeetingStore::new();

        let mut tracked = ended_tracked("1_0", "bot-1");
        tracked.bot.meeting_start = Timestamp::now() + SignedDuration::from_hours(1);
        tracked.bot.meeting_end = Timestamp::now() + SignedDuration::from_hours(2);
        store.insert_bot(tracked).await;

        let recordings = poll_once(&notetaker, &store).await?;
        assert!(recordings.is_empty());
        assert!(store.completed("1_0").await.is_none());

        Ok(())
    }
}
