//! Linked Google account handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use postmeet_service::identity::{IdentityService, UserProfile};

use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::handler::request::AccountPathParams;
use crate::handler::response::{AccountDisconnected, AccountSynced, ErrorResponse, LinkedAccounts};
use crate::service::ServiceState;

/// Tracing target for account operations.
const TRACING_TARGET: &str = "postmeet_server::handler::users";

/// Returns the current user profile.
#[tracing::instrument(skip_all)]
async fn read_profile(
    State(identity): State<IdentityService>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    let profile = identity.profile().await?;

    tracing::info!(
        target: TRACING_TARGET,
        email = %profile.email,
        "Profile read",
    );

    Ok((StatusCode::OK, Json(profile)))
}

fn read_profile_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Read profile")
        .description("Returns the signed-in user profile.")
        .response::<200, Json<UserProfile>>()
}

/// Lists all linked Google accounts.
#[tracing::instrument(skip_all)]
async fn list_accounts(
    State(identity): State<IdentityService>,
) -> Result<(StatusCode, Json<LinkedAccounts>)> {
    let accounts = identity.linked_accounts().await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_count = accounts.len(),
        "Linked accounts listed",
    );

    Ok((StatusCode::OK, Json(accounts)))
}

fn list_accounts_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List linked accounts")
        .description("Returns all linked Google accounts with their sync state.")
        .response::<200, Json<LinkedAccounts>>()
}

/// Disconnects a linked Google account.
#[tracing::instrument(skip_all, fields(account_id = path_params.account_id))]
async fn disconnect_account(
    State(identity): State<IdentityService>,
    Path(path_params): Path<AccountPathParams>,
) -> Result<(StatusCode, Json<AccountDisconnected>)> {
    tracing::debug!(target: TRACING_TARGET, "Disconnecting Google account");

    identity.unlink_account(path_params.account_id).await?;
    let response = AccountDisconnected::new(path_params.account_id);

    tracing::info!(
        target: TRACING_TARGET,
        account_id = path_params.account_id,
        "Google account disconnected",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn disconnect_account_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Disconnect account")
        .description("Removes a linked Google account.")
        .response::<200, Json<AccountDisconnected>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Resyncs calendar events for a linked Google account.
#[tracing::instrument(skip_all, fields(account_id = path_params.account_id))]
async fn sync_account(
    State(identity): State<IdentityService>,
    Path(path_params): Path<AccountPathParams>,
) -> Result<(StatusCode, Json<AccountSynced>)> {
    tracing::debug!(target: TRACING_TARGET, "Syncing Google account");

    let sync = identity.sync_account(path_params.account_id).await?;
    let response = AccountSynced::from_sync(sync);

    tracing::info!(
        target: TRACING_TARGET,
        account_id = response.account_id,
        events_synced = response.events_synced,
        "Google account synced",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn sync_account_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Sync account")
        .description("Pulls calendar events for a linked Google account.")
        .response::<200, Json<AccountSynced>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/user/profile", get_with(read_profile, read_profile_docs))
        .api_route(
            "/user/google-accounts",
            get_with(list_accounts, list_accounts_docs),
        )
        .api_route(
            "/user/google-accounts/{account_id}",
            delete_with(disconnect_account, disconnect_account_docs),
        )
        .api_route(
            "/user/google-accounts/{account_id}/sync",
            post_with(sync_account, sync_account_docs),
        )
        .with_path_items(|item| item.tag("UserManagement"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn profile_returns_sample_user() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/user/profile").await;
        response.assert_status_ok();

        let profile = response.json::<UserProfile>();
        assert_eq!(profile.email, "test@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn accounts_list_marks_primary_first() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/user/google-accounts").await;
        response.assert_status_ok();

        let accounts = response.json::<LinkedAccounts>();
        assert!(!accounts.is_empty());
        assert!(accounts[0].is_primary);

        Ok(())
    }

    #[tokio::test]
    async fn disconnect_unknown_account_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.delete("/user/google-accounts/999").await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_account_id_is_a_client_error() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.delete("/user/google-accounts/abc").await;
        assert!(response.status_code().is_client_error());

        Ok(())
    }

    #[tokio::test]
    async fn sync_reports_event_count() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.post("/user/google-accounts/1/sync").await;
        response.assert_status_ok();

        let synced = response.json::<AccountSynced>();
        assert_eq!(synced.account_id, 1);
        assert!(synced.events_synced > 0);

        Ok(())
    }
}
