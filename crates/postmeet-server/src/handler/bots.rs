//! Notetaker bot inspection handlers.
//!
//! Read-only views over the tracked bots plus the manual poll trigger.
//! Bots are created and cancelled through the meeting notetaker toggle,
//! not here.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::{Json, Path};
use crate::handler::request::BotPathParams;
use crate::handler::response::{
    BotEntry, BotList, BotTranscript, ErrorResponse, PollOutcome, SchedulerStatus,
};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;
use crate::worker;

/// Tracing target for bot operations.
const TRACING_TARGET: &str = "postmeet_server::handler::bots";

/// Lists the tracked bots.
#[tracing::instrument(skip_all)]
async fn list_bots(State(state): State<ServiceState>) -> Result<(StatusCode, Json<BotList>)> {
    let bots = state.store.bots().await;
    let response = BotList::from_tracked(&bots);

    tracing::info!(
        target: TRACING_TARGET,
        bot_count = response.total_bots,
        "Bots listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_bots_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List bots")
        .description("Returns the bots currently tracked by the scheduler.")
        .response::<200, Json<BotList>>()
}

/// Reports the scheduler state.
#[tracing::instrument(skip_all)]
async fn scheduler_status(
    State(state): State<ServiceState>,
) -> Result<(StatusCode, Json<SchedulerStatus>)> {
    let bots = state.store.bots().await;
    let completed = state.store.completed_count().await;
    let response = SchedulerStatus::new(bots, completed);

    tracing::info!(
        target: TRACING_TARGET,
        bot_count = response.managed_bots.len(),
        completed_meetings = completed,
        "Scheduler status reported",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn scheduler_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Scheduler status")
        .description("Returns the tracked bots and completed meeting counts.")
        .response::<200, Json<SchedulerStatus>>()
}

/// Reports the state of one bot.
#[tracing::instrument(skip_all, fields(bot_id = %path_params.bot_id))]
async fn bot_status(
    State(state): State<ServiceState>,
    Path(path_params): Path<BotPathParams>,
) -> Result<(StatusCode, Json<BotEntry>)> {
    let tracked = state
        .store
        .bot_by_id(&path_params.bot_id)
        .await
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Bot not found")
                .with_resource("bot")
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        status = %tracked.bot.status,
        "Bot status reported",
    );

    Ok((StatusCode::OK, Json(BotEntry::from_tracked(&tracked))))
}

fn bot_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Bot status")
        .description("Returns the lifecycle state of one bot.")
        .response::<200, Json<BotEntry>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns the transcript recorded by a bot.
#[tracing::instrument(skip_all, fields(bot_id = %path_params.bot_id))]
async fn bot_transcript(
    State(state): State<ServiceState>,
    Path(path_params): Path<BotPathParams>,
) -> Result<(StatusCode, Json<BotTranscript>)> {
    let meeting = state
        .store
        .completed_by_bot(&path_params.bot_id)
        .await
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Transcript not available")
                .with_resource("bot")
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        transcript_length = meeting.transcript.len(),
        "Bot transcript read",
    );

    let response = BotTranscript {
        transcript: meeting.transcript,
    };
    Ok((StatusCode::OK, Json(response)))
}

fn bot_transcript_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Bot transcript")
        .description("Returns the transcript recorded by a bot.")
        .response::<200, Json<BotTranscript>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Polls pending bots for completed recordings.
#[tracing::instrument(skip_all)]
async fn poll_bots(State(state): State<ServiceState>) -> Result<(StatusCode, Json<PollOutcome>)> {
    tracing::debug!(target: TRACING_TARGET, "Polling pending bots");

    let recordings = worker::poll_once(&state.notetaker, &state.store).await?;
    let response = PollOutcome::from_recordings(recordings);

    tracing::info!(
        target: TRACING_TARGET,
        completed = response.completed_bots.len(),
        "Poll finished",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn poll_bots_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Poll bots")
        .description("Polls pending bots and stores any completed recordings.")
        .response::<200, Json<PollOutcome>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/bots", get_with(list_bots, list_bots_docs))
        .api_route("/bots/status", get_with(scheduler_status, scheduler_status_docs))
        .api_route("/bots/poll", post_with(poll_bots, poll_bots_docs))
        .api_route("/bots/{bot_id}/status", get_with(bot_status, bot_status_docs))
        .api_route(
            "/bots/{bot_id}/transcript",
            get_with(bot_transcript, bot_transcript_docs),
        )
        .with_path_items(|item| item.tag("Bots"))
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use postmeet_service::calendar::MeetingPlatform;
    use postmeet_service::notetaker::{BotStatus, ScheduledBot};

    use super::*;
    use crate::handler::test::{
        create_test_server_with_router, create_test_server_with_state, create_test_state,
    };
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
    async fn empty_scheduler_reports_zero_counts() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/bots").await;
        response.assert_status_ok();
        let bots = response.json::<BotList>();
        assert_eq!(bots.total_bots, 0);

        let response = server.get("/bots/status").await;
        response.assert_status_ok();
        let status = response.json::<SchedulerStatus>();
        assert!(status.managed_bots.is_empty());
        assert_eq!(status.completed_meetings, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_bot_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/bots/bot-1/status").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/bots/bot-1/transcript").await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn poll_surfaces_recording_and_transcript() -> anyhow::Result<()> {
        let state = create_test_state();
        state.store.insert_bot(ended_tracked("1_0", "bot-1")).await;
        let server = create_test_server_with_state(routes(), state).await?;

        let response = server.post("/bots/poll").await;
        response.assert_status_ok();
        let outcome = response.json::<PollOutcome>();
        assert_eq!(outcome.completed_bots.len(), 1);
        assert_eq!(outcome.message, "Polled 1 completed bots");

        let response = server.get("/bots/bot-1/status").await;
        response.assert_status_ok();
        let entry = response.json::<BotEntry>();
        assert_eq!(entry.status, BotStatus::Completed);

        let response = server.get("/bots/bot-1/transcript").await;
        response.assert_status_ok();
        let transcript = response.json::<BotTranscript>();
        assert!(transcript.transcript.contains("Test User:"));

        Ok(())
    }

    #[tokio::test]
    async fn repeated_polls_report_nothing_new() -> anyhow::Result<()> {
        let state = create_test_state();
        state.store.insert_bot(ended_tracked("1_0", "bot-1")).await;
        let server = create_test_server_with_state(routes(), state).await?;

        server.post("/bots/poll").await.assert_status_ok();

        let response = server.post("/bots/poll").await;
        response.assert_status_ok();
        let outcome = response.json::<PollOutcome>();
        assert!(outcome.completed_bots.is_empty());
        assert_eq!(outcome.message, "Polled 0 completed bots");

        Ok(())
    }
}
