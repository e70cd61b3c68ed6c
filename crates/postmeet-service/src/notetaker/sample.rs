//! Sample notetaker provider with fabricated recordings.

use jiff::{SignedDuration, Timestamp};
use url::Url;
use uuid::Uuid;

use super::{
    BotRecording, BotStatus, Error, NotetakerProvider, NotetakerService, Result, ScheduleBot,
    ScheduledBot,
};
use crate::health::ServiceHealth;

/// Transcript text attributed to sample speakers.
const SAMPLE_TRANSCRIPT: &str = "Test User: Thanks everyone for joining, let's get started.\n\n\
Colleague: Happy to. I reviewed the proposal and left a few comments this morning.\n\n\
Test User: Great. Let's walk through the action items and agree on owners before we wrap up.";

/// Sample notetaker provider.
///
/// Accepts any future meeting and fabricates a transcript once the
/// meeting end time has passed. Used whenever a Recall.ai API key is
/// not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl SampleProvider {
    /// Create a new sample provider.
    pub fn new() -> Self {
        Self
    }

    /// Wrap this provider in a [`NotetakerService`].
    pub fn into_service(self) -> NotetakerService {
        NotetakerService::from_provider(self)
    }
}

#[async_trait::async_trait]
impl NotetakerProvider for SampleProvider {
    async fn schedule_bot(&self, request: &ScheduleBot) -> Result<ScheduledBot> {
        let join_at = request.meeting_start
            - SignedDuration::from_mins(i64::from(request.join_before_minutes));

        if join_at <= Timestamp::now() {
            return Err(Error::invalid_input()
                .with_message(format!("join time {join_at} has already passed")));
        }

        Ok(ScheduledBot {
            bot_id: Uuid::new_v4().to_string(),
            meeting_id: request.meeting_id.clone(),
            meeting_url: request.meeting_url.clone(),
            bot_name: format!(
                "PostMeeting Bot - {}",
                request.meeting_start.strftime("%Y-%m-%d %H:%M")
            ),
            join_at,
            meeting_start: request.meeting_start,
            meeting_end: request.meeting_end,
            status: BotStatus::Scheduled,
        })
    }

    async fn cancel_bot(&self, _bot_id: &str) -> Result<()> {
        Ok(())
    }

    async fn poll_completed(&self, bots: &[ScheduledBot]) -> Result<Vec<BotRecording>> {
        let now = Timestamp::now();
        let mut recordings = Vec::new();

        for bot in bots {
            if !bot.is_pending() || bot.meeting_end > now {
                continue;
            }

            let media_url =
                Url::parse(&format!("https://recordings.example.com/{}.mp4", bot.bot_id))
                    .map_err(|err| Error::internal().with_source(err))?;

            recordings.push(BotRecording {
                bot_id: bot.bot_id.clone(),
                transcript: SAMPLE_TRANSCRIPT.to_owned(),
                media_url: Some(media_url),
                duration_minutes: bot.meeting_end.duration_since(bot.meeting_start).as_mins(),
                completed_at: bot.meeting_end,
            });
        }

        Ok(recordings)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn schedule_request(start_in: SignedDuration) -> ScheduleBot {
        let start = Timestamp::now() + start_in;
        ScheduleBot::new(
            "1_0",
            "https://zoom.us/j/123456789".parse().unwrap(),
            start,
            start + SignedDuration::from_mins(30),
        )
        .with_title("Team Standup")
    }

    #[tokio::test]
    async fn schedules_future_meetings() {
        let provider = SampleProvider::new();
        let bot = provider
            .schedule_bot(&schedule_request(SignedDuration::from_hours(1)))
            .await
            .unwrap();

        assert_eq!(bot.meeting_id, "1_0");
        assert_eq!(bot.status, BotStatus::Scheduled);
        assert!(bot.bot_name.starts_with("PostMeeting Bot - "));
        assert!(bot.join_at < bot.meeting_start);
    }

    #[tokio::test]
    async fn rejects_meetings_about_to_start() {
        let provider = SampleProvider::new();
        let error = provider
            .schedule_bot(&schedule_request(SignedDuration::from_mins(1)))
            .await
            .unwrap_err();

        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn polling_completes_only_ended_meetings() {
        let provider = SampleProvider::new();

        let mut ended = provider
            .schedule_bot(&schedule_request(SignedDuration::from_hours(1)))
            .await
            .unwrap();
        ended.meeting_start = Timestamp::now() - SignedDuration::from_hours(2);
        ended.meeting_end = Timestamp::now() - SignedDuration::from_mins(90);

        let pending = provider
            .schedule_bot(&schedule_request(SignedDuration::from_hours(3)))
            .await
            .unwrap();

        let recordings = provider
            .poll_completed(&[ended.clone(), pending])
            .await
            .unwrap();

        assert_eq!(recordings.len(), 1);
        assert_eq!(recordings[0].bot_id, ended.bot_id);
        assert_eq!(recordings[0].duration_minutes, 30);
        assert!(recordings[0].transcript.contains("Test User:"));
        assert!(recordings[0].media_url.is_some());
    }

    #[tokio::test]
    async fn completed_bots_are_not_polled_again() {
        let provider = SampleProvider::new();

        let mut bot = provider
            .schedule_bot(&schedule_request(SignedDuration::from_hours(1)))
            .await
            .unwrap();
        bot.meeting_end = Timestamp::now() - SignedDuration::from_mins(5);
        bot.status = BotStatus::Completed;

        let recordings = provider.poll_completed(&[bot]).await.unwrap();
        assert!(recordings.is_empty());
    }
}
