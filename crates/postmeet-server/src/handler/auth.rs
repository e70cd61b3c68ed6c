//! OAuth handlers for Google and social platform sign-in.
//!
//! Callbacks exchange the authorization code and hand the session back to
//! the frontend as query parameters on its success page, so the browser
//! flow works without any backend session storage.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use postmeet_service::identity::CodeExchange;
use postmeet_service::social::SocialPlatform;

use crate::extract::{Json, Path, Query};
use crate::handler::request::{CallbackQuery, PlatformPathParams};
use crate::handler::response::{AuthorizationUrl, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for OAuth operations.
const TRACING_TARGET: &str = "postmeet_server::handler::auth";

/// Starts the Google OAuth flow.
#[tracing::instrument(skip_all)]
async fn begin_google_auth(
    State(state): State<ServiceState>,
) -> Result<(StatusCode, Json<AuthorizationUrl>)> {
    tracing::debug!(target: TRACING_TARGET, "Building Google authorization URL");

    let redirect = state.identity.authorization_url().await?;
    let response = AuthorizationUrl::from_redirect(redirect);

    tracing::info!(
        target: TRACING_TARGET,
        state = %response.state,
        "Google authorization URL built",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn begin_google_auth_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Begin Google OAuth")
        .description("Returns the Google consent URL and an opaque state value.")
        .response::<200, Json<AuthorizationUrl>>()
        .response::<503, Json<ErrorResponse>>()
}

/// Completes the Google OAuth flow.
///
/// Exchanges the authorization code and redirects to the frontend success
/// page with the session encoded as query parameters.
#[tracing::instrument(skip_all)]
async fn google_callback(
    State(state): State<ServiceState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response> {
    tracing::debug!(target: TRACING_TARGET, "Handling Google OAuth callback");

    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        return Err(ErrorKind::BadRequest.with_message("No authorization code provided"));
    };

    let mut exchange = CodeExchange::new(code);
    if let Some(callback_state) = query.state {
        exchange = exchange.with_state(callback_state);
    }
    let session = state.identity.exchange_code(&exchange).await?;

    let mut success_url = state.settings.auth_success_url();
    success_url
        .query_pairs_mut()
        .append_pair("access_token", &session.access_token)
        .append_pair("token_type", &session.token_type)
        .append_pair("user_id", &session.user_id)
        .append_pair("user_email", &session.user_email)
        .append_pair("user_name", &session.user_name)
        .append_pair("user_picture", &session.user_picture)
        .append_pair("google_account_id", &session.google_account_id)
        .append_pair("google_account_email", &session.google_account_email)
        .append_pair("google_account_active", &session.google_account_active);

    tracing::info!(
        target: TRACING_TARGET,
        user_email = %session.user_email,
        "Google OAuth completed",
    );

    Ok(Redirect::temporary(success_url.as_str()).into_response())
}

fn google_callback_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Google OAuth callback")
        .description(
            "Exchanges the authorization code and redirects to the frontend \
             success page with the session in the query string.",
        )
        .response::<307, ()>()
        .response::<400, Json<ErrorResponse>>()
}

/// Completes a social platform OAuth flow.
///
/// Accepts LinkedIn and Facebook callbacks on a single route.
#[tracing::instrument(skip_all, fields(platform = %path_params.platform))]
async fn social_callback(
    State(state): State<ServiceState>,
    Path(path_params): Path<PlatformPathParams>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response> {
    tracing::debug!(target: TRACING_TARGET, "Handling social OAuth callback");

    let platform: SocialPlatform = path_params.platform.parse().map_err(|_| {
        ErrorKind::BadRequest
            .with_message(format!("Unsupported platform: {}", path_params.platform))
    })?;
    if !matches!(platform, SocialPlatform::Linkedin | SocialPlatform::Facebook) {
        return Err(ErrorKind::BadRequest.with_message(format!("Unsupported platform: {platform}")));
    }

    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        return Err(ErrorKind::BadRequest.with_message("No authorization code provided"));
    };

    let session = state.social.exchange_callback(platform, &code).await?;

    let mut success_url = state.settings.auth_success_url();
    success_url
        .query_pairs_mut()
        .append_pair("access_token", &session.access_token)
        .append_pair("platform", &session.platform.to_string())
        .append_pair("status", "success");

    tracing::info!(
        target: TRACING_TARGET,
        platform = %platform,
        "Social OAuth completed",
    );

    Ok(Redirect::temporary(success_url.as_str()).into_response())
}

fn social_callback_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Social platform OAuth callback")
        .description(
            "Exchanges a LinkedIn or Facebook authorization code and redirects \
             to the frontend success page.",
        )
        .response::<307, ()>()
        .response::<400, Json<ErrorResponse>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/auth/google",
            get_with(begin_google_auth, begin_google_auth_docs),
        )
        .api_route(
            "/auth/google/callback",
            get_with(google_callback, google_callback_docs),
        )
        .api_route(
            "/auth/{platform}/callback",
            get_with(social_callback, social_callback_docs),
        )
        .with_path_items(|item| item.tag("Authentication"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn begin_google_auth_returns_consent_url() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/auth/google").await;
        response.assert_status_ok();

        let authorization = response.json::<AuthorizationUrl>();
        assert_eq!(authorization.state, "test_state");
        assert_eq!(
            authorization.auth_url.host_str(),
            Some("accounts.google.com"),
        );

        Ok(())
    }

    #[tokio::test]
    async fn google_callback_redirects_with_session() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .get("/auth/google/callback")
            .add_query_param("code", "4/test_code")
            .await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);

        let location = response.header("location");
        let location = location.to_str()?;
        assert!(location.starts_with("http://localhost:3000/auth/success?"));
        assert!(location.contains("access_token="));
        assert!(location.contains("google_account_email=test%40example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn google_callback_without_code_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/auth/google/callback").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn social_callback_redirects_with_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .get("/auth/linkedin/callback")
            .add_query_param("code", "linkedin_code")
            .await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);

        let location = response.header("location");
        let location = location.to_str()?;
        assert!(location.contains("platform=linkedin"));
        assert!(location.contains("status=success"));

        Ok(())
    }

    #[tokio::test]
    async fn social_callback_rejects_unknown_platform() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .get("/auth/myspace/callback")
            .add_query_param("code", "code")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }
}
