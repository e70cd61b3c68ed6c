//! Meeting lifecycle handlers.
//!
//! Covers the notetaker toggle, transcript storage, content generation, and
//! publishing for a single meeting. Meeting ids are calendar event ids; they
//! are validated for shape, not existence, so toggling an unknown meeting
//! still records the flag.

use std::collections::HashMap;

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use postmeet_service::calendar::{CalendarEvent, EventsQuery, MeetingPlatform};
use postmeet_service::content::{EmailPrompt, GeneratedPost, PostPrompt};
use postmeet_service::notetaker::{BotStatus, ScheduleBot};
use postmeet_service::social::{PublishPost, SocialPlatform};

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::request::{
    GenerateContent, MeetingPathParams, MeetingPlatformPathParams, PublishContent, SubmitTranscript,
    ToggleNotetaker,
};
use crate::handler::response::{
    ContentGenerated, EmailDraft, ErrorResponse, MeetingContent, MeetingTranscript,
    NotetakerToggled, PastMeetings, PostPublished, TranscriptUpdated,
};
use crate::handler::{ErrorKind, Result};
use crate::service::{CompletedMeeting, MeetingSnapshot, ServiceState, TrackedBot};

/// Tracing target for meeting operations.
const TRACING_TARGET: &str = "postmeet_server::handler::meetings";

/// Transcript served when a meeting has no stored recording.
const SAMPLE_TRANSCRIPT: &str = "Mock meeting transcript...";

/// Post body served when content was never generated for a meeting.
const SAMPLE_POST: &str = "Just had an amazing meeting! Key insights: \
1) Great discussion on project goals \
2) Clear next steps identified \
3) Excited about the collaboration!";

/// Canned posts for meetings without generated content.
fn sample_posts() -> HashMap<String, GeneratedPost> {
    let post = GeneratedPost {
        content: SAMPLE_POST.to_owned(),
        hashtags: "#linkedin #meeting #collaboration".to_owned(),
        disclaimer: String::new(),
        platform: "linkedin".to_owned(),
    };
    HashMap::from([("linkedin".to_owned(), post)])
}

/// Captures the event details a completed meeting will need later.
fn snapshot_event(event: &CalendarEvent) -> MeetingSnapshot {
    MeetingSnapshot {
        title: event.title.clone(),
        attendees: event
            .attendees
            .iter()
            .map(|attendee| attendee.email.clone())
            .collect(),
        platform: event.platform,
        google_account_email: event.google_account_email.clone(),
        google_account_name: event.google_account_name.clone(),
    }
}

/// Toggles the notetaker bot for a meeting.
///
/// Enabling schedules a bot for the matching calendar event when it has a
/// meeting URL; disabling cancels and forgets any tracked bot. Scheduling
/// problems are reported through `bot_scheduled` rather than a failure
/// status, matching the flag-first contract of the endpoint.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn toggle_notetaker(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
    request: Option<Json<ToggleNotetaker>>,
) -> Result<(StatusCode, Json<NotetakerToggled>)> {
    let Json(request) = request.unwrap_or_default();
    let meeting_id = path_params.meeting_id;
    let enabled = request.notetaker_enabled;

    tracing::debug!(target: TRACING_TARGET, enabled, "Updating notetaker setting");

    state.store.set_notetaker(&meeting_id, enabled).await;

    if enabled {
        if state.store.bot(&meeting_id).await.is_none() {
            schedule_bot_for_meeting(&state, &meeting_id).await;
        }
    } else if let Some(tracked) = state.store.remove_bot(&meeting_id).await {
        if let Err(error) = state.notetaker.cancel_bot(&tracked.bot.bot_id).await {
            tracing::warn!(
                target: TRACING_TARGET,
                bot_id = %tracked.bot.bot_id,
                error = %error,
                "Bot cancellation failed",
            );
        }
    }

    let bot_scheduled = enabled && state.store.bot(&meeting_id).await.is_some();

    tracing::info!(
        target: TRACING_TARGET,
        enabled,
        bot_scheduled,
        "Notetaker setting updated",
    );

    let response = NotetakerToggled::new(meeting_id, enabled, bot_scheduled);
    Ok((StatusCode::OK, Json(response)))
}

/// Schedules a bot for the event matching `meeting_id`, if any.
async fn schedule_bot_for_meeting(state: &ServiceState, meeting_id: &str) {
    let events = match state.calendar.upcoming_events(&EventsQuery::default()).await {
        Ok(events) => events,
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Event discovery failed, bot not scheduled",
            );
            return;
        }
    };

    let Some(event) = events.into_iter().find(|event| event.id == meeting_id) else {
        tracing::warn!(target: TRACING_TARGET, "Event not found, bot not scheduled");
        return;
    };
    let Some(meeting_url) = event.meeting_url.clone() else {
        tracing::warn!(
            target: TRACING_TARGET,
            "Event has no meeting URL, bot not scheduled",
        );
        return;
    };

    let settings = state.store.settings().await;
    let request = ScheduleBot::new(meeting_id, meeting_url, event.start_time, event.end_time)
        .with_title(event.title.as_str())
        .with_join_before_minutes(settings.recall_join_before_minutes);

    match state.notetaker.schedule_bot(&request).await {
        Ok(bot) => {
            let tracked = TrackedBot {
                bot,
                meeting: snapshot_event(&event),
            };
            state.store.insert_bot(tracked).await;
        }
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Bot scheduling failed",
            );
        }
    }
}

fn toggle_notetaker_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Toggle notetaker")
        .description(
            "Updates the notetaker flag for a meeting. Enabling schedules a \
             recording bot for the matching calendar event.",
        )
        .response::<200, Json<NotetakerToggled>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Stores a transcript for a meeting.
///
/// Creates the completed-meeting record when none exists, seeding it from
/// the tracked bot when one is known.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn submit_transcript(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
    ValidateJson(request): ValidateJson<SubmitTranscript>,
) -> Result<(StatusCode, Json<TranscriptUpdated>)> {
    let meeting_id = path_params.meeting_id;

    tracing::debug!(
        target: TRACING_TARGET,
        transcript_length = request.transcript.len(),
        "Storing transcript",
    );

    let meeting = match state.store.completed(&meeting_id).await {
        Some(mut existing) => {
            existing.transcript = request.transcript;
            existing
        }
        None => new_completed_meeting(&state, &meeting_id, request.transcript).await,
    };
    state.store.upsert_completed(meeting).await;

    tracing::info!(target: TRACING_TARGET, "Transcript stored");

    let response = TranscriptUpdated::new(meeting_id);
    Ok((StatusCode::OK, Json(response)))
}

/// Builds a completed-meeting record for a manually submitted transcript.
async fn new_completed_meeting(
    state: &ServiceState,
    meeting_id: &str,
    transcript: String,
) -> CompletedMeeting {
    let now = Timestamp::now();
    let tracked = state.store.bot(meeting_id).await;

    match tracked {
        Some(tracked) => CompletedMeeting {
            meeting_id: meeting_id.to_owned(),
            bot_id: tracked.bot.bot_id.clone(),
            title: tracked.meeting.title.clone(),
            transcript,
            media_url: None,
            status: BotStatus::Completed,
            completed_at: now,
            duration_minutes: tracked
                .bot
                .meeting_end
                .duration_since(tracked.bot.meeting_start)
                .as_mins(),
            attendees: tracked.meeting.attendees.clone(),
            platform: tracked.meeting.platform,
            meeting_url: Some(tracked.bot.meeting_url.clone()),
            start_time: tracked.bot.meeting_start,
            end_time: tracked.bot.meeting_end,
            google_account_email: tracked.meeting.google_account_email.clone(),
            google_account_name: tracked.meeting.google_account_name.clone(),
        },
        None => CompletedMeeting {
            meeting_id: meeting_id.to_owned(),
            bot_id: String::new(),
            title: "Meeting".to_owned(),
            transcript,
            media_url: None,
            status: BotStatus::Completed,
            completed_at: now,
            duration_minutes: 0,
            attendees: Vec::new(),
            platform: MeetingPlatform::Unknown,
            meeting_url: None,
            start_time: now,
            end_time: now,
            google_account_email: String::new(),
            google_account_name: String::new(),
        },
    }
}

fn submit_transcript_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Submit transcript")
        .description("Stores a transcript, creating the completed-meeting record if needed.")
        .response::<200, Json<TranscriptUpdated>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Returns the transcript for a completed meeting.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn read_transcript(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
) -> Result<(StatusCode, Json<MeetingTranscript>)> {
    let meeting = state
        .store
        .completed(&path_params.meeting_id)
        .await
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Meeting not found or not completed")
                .with_resource("meeting")
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        transcript_length = meeting.transcript.len(),
        "Transcript read",
    );

    Ok((StatusCode::OK, Json(MeetingTranscript::from_completed(meeting))))
}

fn read_transcript_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Fetch transcript")
        .description("Returns the stored transcript and recording details for a meeting.")
        .response::<200, Json<MeetingTranscript>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists completed meetings, most recent first.
#[tracing::instrument(skip_all)]
async fn past_meetings(
    State(state): State<ServiceState>,
) -> Result<(StatusCode, Json<PastMeetings>)> {
    let completed = state.store.completed_meetings().await;
    let response = PastMeetings::from_completed(completed);

    tracing::info!(
        target: TRACING_TARGET,
        meeting_count = response.meetings.len(),
        "Past meetings listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn past_meetings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List past meetings")
        .description("Returns completed meetings sorted by start time, most recent first.")
        .response::<200, Json<PastMeetings>>()
}

/// Generates social media posts for a meeting.
///
/// Uses the stored transcript when one exists, falling back to sample text
/// so content generation works before any bot has reported. Results are
/// stored per platform; repeated calls replace only the requested
/// platforms.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn generate_content(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
    request: Option<Json<GenerateContent>>,
) -> Result<(StatusCode, Json<ContentGenerated>)> {
    let Json(request) = request.unwrap_or_default();
    let meeting_id = path_params.meeting_id;
    let platforms = request.requested_platforms();

    tracing::debug!(
        target: TRACING_TARGET,
        platform_count = platforms.len(),
        "Generating content",
    );

    let completed = state.store.completed(&meeting_id).await;
    let (transcript, title) = match &completed {
        Some(meeting) => (meeting.transcript.clone(), meeting.title.clone()),
        None => (SAMPLE_TRANSCRIPT.to_owned(), "Meeting".to_owned()),
    };

    let settings = state.store.settings().await;
    let mut posts = Vec::with_capacity(platforms.len());
    for platform in &platforms {
        let custom_prompt = match platform.as_str() {
            "linkedin" => Some(settings.linkedin_prompt.clone()),
            "facebook" => Some(settings.facebook_prompt.clone()),
            _ => None,
        };

        let mut prompt =
            PostPrompt::new(transcript.as_str(), title.as_str()).with_platform(platform.as_str());
        if let Some(custom_prompt) = custom_prompt {
            prompt = prompt.with_custom_prompt(custom_prompt);
        }

        posts.push(state.content.social_post(&prompt).await?);
    }

    state.store.save_posts(&meeting_id, posts.clone()).await;

    let content: HashMap<String, GeneratedPost> = posts
        .into_iter()
        .map(|post| (post.platform.clone(), post))
        .collect();

    tracing::info!(
        target: TRACING_TARGET,
        post_count = content.len(),
        "Content generated",
    );

    let response = ContentGenerated { meeting_id, content };
    Ok((StatusCode::OK, Json(response)))
}

fn generate_content_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Generate content")
        .description(
            "Generates social media posts for the requested platforms and \
             stores them for later retrieval.",
        )
        .response::<200, Json<ContentGenerated>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Returns stored posts and the transcript for a meeting.
///
/// Meetings without generated content get a canned sample so the frontend
/// always has something to render.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn read_content(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
) -> Result<(StatusCode, Json<MeetingContent>)> {
    let meeting_id = path_params.meeting_id;

    let transcript = match state.store.completed(&meeting_id).await {
        Some(meeting) => meeting.transcript,
        None => SAMPLE_TRANSCRIPT.to_owned(),
    };
    let content = match state.store.posts(&meeting_id).await {
        Some(posts) => posts,
        None => sample_posts(),
    };

    tracing::info!(
        target: TRACING_TARGET,
        post_count = content.len(),
        "Content read",
    );

    let response = MeetingContent {
        meeting_id,
        transcript,
        content,
    };
    Ok((StatusCode::OK, Json(response)))
}

fn read_content_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Fetch content")
        .description("Returns the stored posts and transcript for a meeting.")
        .response::<200, Json<MeetingContent>>()
}

/// Drafts a follow-up email for a completed meeting.
#[tracing::instrument(skip_all, fields(meeting_id = %path_params.meeting_id))]
async fn draft_follow_up(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPathParams>,
) -> Result<(StatusCode, Json<EmailDraft>)> {
    let meeting_id = path_params.meeting_id;

    let meeting = state.store.completed(&meeting_id).await.ok_or_else(|| {
        ErrorKind::NotFound
            .with_message("Meeting not found or not completed")
            .with_resource("meeting")
    })?;
    if meeting.transcript.is_empty() {
        return Err(
            ErrorKind::BadRequest.with_message("No transcript available for this meeting")
        );
    }

    let prompt = EmailPrompt::new(meeting.transcript.as_str(), meeting.title.as_str())
        .with_attendees(meeting.attendees.clone());
    let email = state.content.follow_up_email(&prompt).await?;

    tracing::info!(
        target: TRACING_TARGET,
        subject = %email.subject,
        "Follow-up email drafted",
    );

    let response = EmailDraft {
        meeting_id,
        email_content: email.formatted(),
        meeting_title: meeting.title,
    };
    Ok((StatusCode::OK, Json(response)))
}

fn draft_follow_up_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Draft follow-up email")
        .description("Generates a follow-up email from the stored transcript.")
        .response::<200, Json<EmailDraft>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Publishes content for a meeting to a social platform.
#[tracing::instrument(
    skip_all,
    fields(
        meeting_id = %path_params.meeting_id,
        platform = %path_params.platform,
    )
)]
async fn publish_post(
    State(state): State<ServiceState>,
    Path(path_params): Path<MeetingPlatformPathParams>,
    request: Option<Json<PublishContent>>,
) -> Result<(StatusCode, Json<PostPublished>)> {
    let Json(request) = request.unwrap_or_default();

    let platform: SocialPlatform = path_params.platform.parse().map_err(|_| {
        ErrorKind::BadRequest
            .with_message(format!("Unsupported platform: {}", path_params.platform))
    })?;

    tracing::debug!(
        target: TRACING_TARGET,
        content_length = request.content.len(),
        "Publishing post",
    );

    let publish = PublishPost::new(platform, request.access_token, request.content);
    let receipt = state.social.publish(&publish).await?;
    let response = PostPublished::from_receipt(receipt);

    tracing::info!(
        target: TRACING_TARGET,
        post_id = %response.post_id,
        "Post published",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn publish_post_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Publish post")
        .description("Publishes the given content to a social platform.")
        .response::<200, Json<PostPublished>>()
        .response::<400, Json<ErrorResponse>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/meetings/past", get_with(past_meetings, past_meetings_docs))
        .api_route(
            "/meetings/{meeting_id}/notetaker",
            patch_with(toggle_notetaker, toggle_notetaker_docs),
        )
        .api_route(
            "/meetings/{meeting_id}/transcript",
            post_with(submit_transcript, submit_transcript_docs)
                .get_with(read_transcript, read_transcript_docs),
        )
        .api_route(
            "/meetings/{meeting_id}/generate-content",
            post_with(generate_content, generate_content_docs),
        )
        .api_route(
            "/meetings/{meeting_id}/content",
            get_with(read_content, read_content_docs),
        )
        .api_route(
            "/meetings/{meeting_id}/follow-up-email",
            post_with(draft_follow_up, draft_follow_up_docs),
        )
        .api_route(
            "/meetings/{meeting_id}/post/{platform}",
            post_with(publish_post, publish_post_docs),
        )
        .with_path_items(|item| item.tag("Meetings"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn toggle_schedules_bot_for_known_event() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .patch("/meetings/1_0/notetaker")
            .json(&json!({ "notetaker_enabled": true }))
            .await;
        response.assert_status_ok();

        let toggled = response.json::<NotetakerToggled>();
        assert!(toggled.notetaker_enabled);
        assert!(toggled.bot_scheduled);

        Ok(())
    }

    #[tokio::test]
    async fn toggle_off_cancels_the_bot() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        server
            .patch("/meetings/1_0/notetaker")
            .json(&json!({ "notetaker_enabled": true }))
            .await
            .assert_status_ok();

        let response = server
            .patch("/meetings/1_0/notetaker")
            .json(&json!({ "notetaker_enabled": false }))
            .await;
        response.assert_status_ok();

        let toggled = response.json::<NotetakerToggled>();
        assert!(!toggled.notetaker_enabled);
        assert!(!toggled.bot_scheduled);

        Ok(())
    }

    #[tokio::test]
    async fn toggle_without_body_disables() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.patch("/meetings/1_0/notetaker").await;
        response.assert_status_ok();

        let toggled = response.json::<NotetakerToggled>();
        assert!(!toggled.notetaker_enabled);
        assert!(!toggled.bot_scheduled);

        Ok(())
    }

    #[tokio::test]
    async fn toggle_without_meeting_url_records_flag_only() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .patch("/meetings/2_1/notetaker")
            .json(&json!({ "notetaker_enabled": true }))
            .await;
        response.assert_status_ok();

        let toggled = response.json::<NotetakerToggled>();
        assert!(toggled.notetaker_enabled);
        assert!(!toggled.bot_scheduled);

        Ok(())
    }

    #[tokio::test]
    async fn transcript_round_trips_through_the_store() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        server
            .post("/meetings/1_0/transcript")
            .json(&json!({ "transcript": "Alice: shipping next week." }))
            .await
            .assert_status_ok();

        let response = server.get("/meetings/1_0/transcript").await;
        response.assert_status_ok();

        let transcript = response.json::<MeetingTranscript>();
        assert_eq!(transcript.transcript, "Alice: shipping next week.");
        assert_eq!(transcript.status, BotStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn transcript_for_unknown_meeting_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/meetings/9_9/transcript").await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn empty_transcript_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .post("/meetings/1_0/transcript")
            .json(&json!({ "transcript": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn generated_content_matches_later_reads() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        server
            .post("/meetings/1_0/transcript")
            .json(&json!({ "transcript": "Alice: shipping next week." }))
            .await
            .assert_status_ok();

        let generated = server
            .post("/meetings/1_0/generate-content")
            .json(&json!({ "platforms": ["linkedin", "facebook"] }))
            .await;
        generated.assert_status_ok();
        let generated = generated.json::<serde_json::Value>();

        let fetched = server.get("/meetings/1_0/content").await;
        fetched.assert_status_ok();
        let fetched = fetched.json::<serde_json::Value>();

        assert_eq!(generated["content"], fetched["content"]);
        assert!(generated["content"]["linkedin"].is_object());
        assert!(generated["content"]["facebook"].is_object());

        Ok(())
    }

    #[tokio::test]
    async fn content_defaults_to_linkedin() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/meetings/1_0/generate-content").await;
        response.assert_status_ok();

        let generated = response.json::<ContentGenerated>();
        assert!(generated.content.contains_key("linkedin"));
        assert_eq!(generated.content.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn content_without_generation_serves_samples() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/meetings/1_0/content").await;
        response.assert_status_ok();

        let content = response.json::<MeetingContent>();
        assert_eq!(content.transcript, SAMPLE_TRANSCRIPT);
        assert!(content.content.contains_key("linkedin"));

        Ok(())
    }

    #[tokio::test]
    async fn follow_up_requires_a_completed_meeting() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/meetings/1_0/follow-up-email").await;
        response.assert_status(StatusCode::NOT_FOUND);

        server
            .post("/meetings/1_0/transcript")
            .json(&json!({ "transcript": "Alice: shipping next week." }))
            .await
            .assert_status_ok();

        let response = server.post("/meetings/1_0/follow-up-email").await;
        response.assert_status_ok();

        let draft = response.json::<EmailDraft>();
        assert!(draft.email_content.starts_with("Subject: "));
        assert_eq!(draft.meeting_id, "1_0");

        Ok(())
    }

    #[tokio::test]
    async fn publish_requires_token_and_content() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/meetings/1_0/post/linkedin").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/meetings/1_0/post/linkedin")
            .json(&json!({ "access_token": "token", "content": "Hello network!" }))
            .await;
        response.assert_status_ok();

        let published = response.json::<PostPublished>();
        assert!(!published.post_id.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn publish_rejects_unknown_platform() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .post("/meetings/1_0/post/myspace")
            .json(&json!({ "access_token": "token", "content": "Hello!" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }
}
