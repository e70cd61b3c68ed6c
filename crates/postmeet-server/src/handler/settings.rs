//! User settings handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::request::UpdateSettings;
use crate::handler::response::{ErrorResponse, SettingsUpdated};
use crate::service::{ServiceState, UserSettings};

/// Tracing target for settings operations.
const TRACING_TARGET: &str = "postmeet_server::handler::settings";

/// Returns the current user settings.
#[tracing::instrument(skip_all)]
async fn read_settings(
    State(state): State<ServiceState>,
) -> Result<(StatusCode, Json<UserSettings>)> {
    let settings = state.store.settings().await;

    tracing::info!(target: TRACING_TARGET, "Settings read");

    Ok((StatusCode::OK, Json(settings)))
}

fn read_settings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Fetch settings")
        .description("Returns the current user settings.")
        .response::<200, Json<UserSettings>>()
}

/// Applies a partial settings update.
///
/// Absent fields keep their stored values.
#[tracing::instrument(skip_all)]
async fn update_settings(
    State(state): State<ServiceState>,
    Json(request): Json<UpdateSettings>,
) -> Result<(StatusCode, Json<SettingsUpdated>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating settings");

    let settings = state
        .store
        .update_settings(|settings| request.apply(settings))
        .await;

    tracing::info!(target: TRACING_TARGET, "Settings updated");

    Ok((StatusCode::OK, Json(SettingsUpdated::new(settings))))
}

fn update_settings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update settings")
        .description("Applies a partial settings update and returns the merged document.")
        .response::<200, Json<SettingsUpdated>>()
        .response::<400, Json<ErrorResponse>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/settings",
            get_with(read_settings, read_settings_docs)
                .put_with(update_settings, update_settings_docs),
        )
        .with_path_items(|item| item.tag("Settings"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn settings_start_from_defaults() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/settings").await;
        response.assert_status_ok();

        let settings = response.json::<UserSettings>();
        assert_eq!(settings, UserSettings::default());

        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .put("/settings")
            .json(&json!({ "recallJoinBeforeMinutes": 10, "defaultPlatform": "meet" }))
            .await;
        response.assert_status_ok();

        let updated = response.json::<SettingsUpdated>();
        assert_eq!(updated.settings.recall_join_before_minutes, 10);
        assert_eq!(updated.settings.default_platform, "meet");
        assert!(updated.settings.enable_notifications);

        let response = server.get("/settings").await;
        response.assert_status_ok();
        let settings = response.json::<UserSettings>();
        assert_eq!(settings, updated.settings);

        Ok(())
    }

    #[tokio::test]
    async fn prompts_can_be_replaced() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .put("/settings")
            .json(&json!({ "linkedinPrompt": "Write a short recap." }))
            .await;
        response.assert_status_ok();

        let updated = response.json::<SettingsUpdated>();
        assert_eq!(updated.settings.linkedin_prompt, "Write a short recap.");
        assert_eq!(
            updated.settings.facebook_prompt,
            UserSettings::default().facebook_prompt
        );

        Ok(())
    }
}
