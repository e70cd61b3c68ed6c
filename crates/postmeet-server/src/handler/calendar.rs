//! Calendar event discovery handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use postmeet_service::calendar::EventsQuery;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{EventEntry, EventsPage};
use crate::service::ServiceState;

/// Tracing target for calendar operations.
const TRACING_TARGET: &str = "postmeet_server::handler::calendar";

/// Lists upcoming events across all linked accounts.
///
/// Each event carries the stored notetaker flag so the frontend can render
/// the toggle without a second round trip.
#[tracing::instrument(skip_all)]
async fn list_events(State(state): State<ServiceState>) -> Result<(StatusCode, Json<EventsPage>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing upcoming events");

    let events = state
        .calendar
        .upcoming_events(&EventsQuery::default())
        .await?;

    let mut entries = Vec::with_capacity(events.len());
    for event in events {
        let notetaker_enabled = state.store.notetaker_enabled(&event.id).await;
        entries.push(EventEntry::new(event, notetaker_enabled));
    }
    let response = EventsPage::new(entries);

    tracing::info!(
        target: TRACING_TARGET,
        event_count = response.events.len(),
        account_count = response.accounts.len(),
        "Upcoming events listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_events_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List upcoming events")
        .description(
            "Returns upcoming calendar events across all linked Google accounts, \
             annotated with the notetaker flag and per-account counts.",
        )
        .response::<200, Json<EventsPage>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/calendar/events", get_with(list_events, list_events_docs))
        .with_path_items(|item| item.tag("Calendar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn events_are_never_empty() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/calendar/events").await;
        response.assert_status_ok();

        let page = response.json::<serde_json::Value>();
        let events = page["events"].as_array().unwrap();
        assert!(!events.is_empty());

        let accounts = page["accounts"].as_array().unwrap();
        assert!(!accounts.is_empty());
        assert!(accounts[0]["events_count"].as_u64().unwrap() > 0);

        Ok(())
    }

    #[tokio::test]
    async fn events_carry_the_notetaker_flag() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/calendar/events").await;
        response.assert_status_ok();

        let page = response.json::<serde_json::Value>();
        for event in page["events"].as_array().unwrap() {
            assert_eq!(event["notetaker_enabled"], serde_json::json!(false));
        }

        Ok(())
    }
}
