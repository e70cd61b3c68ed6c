//! Social media account handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use postmeet_service::SocialService;
use postmeet_service::social::SocialPlatform;

use crate::extract::{Json, Path};
use crate::handler::request::PlatformPathParams;
use crate::handler::response::{ConnectUrl, ErrorResponse, SocialAccounts};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for social media operations.
const TRACING_TARGET: &str = "postmeet_server::handler::social";

/// Lists connected social media accounts.
#[tracing::instrument(skip_all)]
async fn list_accounts(
    State(social): State<SocialService>,
) -> Result<(StatusCode, Json<SocialAccounts>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing social accounts");

    let accounts = social.accounts().await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_count = accounts.len(),
        "Social accounts listed",
    );

    Ok((StatusCode::OK, Json(accounts)))
}

fn list_accounts_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List social accounts")
        .description("Returns the connected social media accounts.")
        .response::<200, Json<SocialAccounts>>()
}

/// Starts the OAuth flow for a social platform.
#[tracing::instrument(skip_all, fields(platform = %path_params.platform))]
async fn connect_account(
    State(social): State<SocialService>,
    Path(path_params): Path<PlatformPathParams>,
) -> Result<(StatusCode, Json<ConnectUrl>)> {
    let platform: SocialPlatform = path_params.platform.parse().map_err(|_| {
        ErrorKind::BadRequest
            .with_message(format!("Unsupported platform: {}", path_params.platform))
    })?;

    tracing::debug!(target: TRACING_TARGET, "Building authorization URL");

    let auth_url = social.authorization_url(platform).await?;

    tracing::info!(target: TRACING_TARGET, "Authorization URL built");

    Ok((StatusCode::OK, Json(ConnectUrl::new(auth_url))))
}

fn connect_account_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Connect social account")
        .description("Returns the OAuth consent URL for a social platform.")
        .response::<200, Json<ConnectUrl>>()
        .response::<400, Json<ErrorResponse>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/social-media/accounts",
            get_with(list_accounts, list_accounts_docs),
        )
        .api_route(
            "/social-media/connect/{platform}",
            post_with(connect_account, connect_account_docs),
        )
        .with_path_items(|item| item.tag("SocialMedia"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn accounts_include_each_platform() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/social-media/accounts").await;
        response.assert_status_ok();

        let accounts = response.json::<SocialAccounts>();
        assert!(!accounts.is_empty());
        assert!(
            accounts
                .iter()
                .any(|account| account.platform == SocialPlatform::Linkedin)
        );

        Ok(())
    }

    #[tokio::test]
    async fn connect_returns_consent_url() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/social-media/connect/linkedin").await;
        response.assert_status_ok();

        let connect = response.json::<ConnectUrl>();
        assert!(connect.auth_url.host_str().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn connect_rejects_unknown_platform() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/social-media/connect/myspace").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }
}
