//! Service banner and health reporting handlers.
//!
//! The health report aggregates provider health checks with store counts so
//! the frontend can tell which capabilities run against real credentials.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use postmeet_service::ServiceHealth;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{AiServiceDetails, HealthReport, ServiceAvailability, ServiceBanner};
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "postmeet_server::handler::monitors";

/// Returns the service banner.
async fn service_banner() -> Result<(StatusCode, Json<ServiceBanner>)> {
    Ok((StatusCode::OK, Json(ServiceBanner::running())))
}

fn service_banner_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Service banner")
        .description("Returns the service name and run state.")
        .response::<200, Json<ServiceBanner>>()
}

/// Reports backend health across all capabilities.
///
/// A capability counts as available when its provider answers the health
/// check without reporting an unhealthy status. Failed checks degrade the
/// report instead of failing the request.
#[tracing::instrument(skip_all)]
async fn health_report(
    State(state): State<ServiceState>,
) -> Result<(StatusCode, Json<HealthReport>)> {
    tracing::debug!(target: TRACING_TARGET, "Checking backend health");

    let (calendar, notetaker, content, social) = tokio::join!(
        state.calendar.health_check(),
        state.notetaker.health_check(),
        state.content.health_check(),
        state.social.health_check(),
    );

    let available = |health: postmeet_service::Result<ServiceHealth>| {
        health.is_ok_and(|health| health.is_available())
    };
    let ai_available = available(content);

    let services = ServiceAvailability {
        google_calendar: available(calendar),
        recall: available(notetaker),
        ai: ai_available,
        social_media: available(social),
    };
    let ai_service_details = AiServiceDetails {
        initialized: true,
        available: ai_available,
        has_api_key: state.settings.openai_key_present,
    };

    let completed_meetings = state.store.completed_count().await;
    let scheduled_bots = state.store.scheduled_bot_count().await;

    let response = HealthReport::healthy(
        services,
        completed_meetings,
        scheduled_bots,
        ai_service_details,
    );

    tracing::info!(
        target: TRACING_TARGET,
        completed_meetings,
        scheduled_bots,
        "Health report prepared",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn health_report_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health report")
        .description("Reports per-capability availability and store counts.")
        .response::<200, Json<HealthReport>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/", get_with(service_banner, service_banner_docs))
        .api_route("/health", get_with(health_report, health_report_docs))
        .with_path_items(|item| item.tag("Monitoring"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn banner_reports_running() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/").await;
        response.assert_status_ok();

        let banner = response.json::<ServiceBanner>();
        assert_eq!(banner.message, "Post-Meeting Social Media Generator API");
        assert_eq!(banner.status, "running");

        Ok(())
    }

    #[tokio::test]
    async fn health_reports_sample_capabilities() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let report = response.json::<HealthReport>();
        assert_eq!(report.status, "healthy");
        assert!(report.services.google_calendar);
        assert!(report.services.recall);
        assert!(report.services.ai);
        assert!(report.services.social_media);
        assert_eq!(report.completed_meetings, 0);
        assert_eq!(report.scheduled_bots, 0);
        assert!(report.ai_service_details.initialized);
        assert!(!report.ai_service_details.has_api_key);

        Ok(())
    }
}
