#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use axum::Router;
use postmeet_server::handler::routes;
use postmeet_server::middleware::{
    RecoveryConfig, RouterObservabilityExt, RouterOpenApiExt, RouterRecoveryExt, RouterSecurityExt,
    SecurityHeadersConfig,
};
use postmeet_server::service::{ServerSettings, ServiceState};
use postmeet_server::worker::BotPollWorker;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::{
    Cli, create_calendar_service, create_content_service, create_identity_service,
    create_notetaker_service, create_social_service,
};
use crate::server::ServerError;

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "postmeet_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "postmeet_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "postmeet_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "Application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        let server_error = error.downcast_ref::<ServerError>();
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            error_code = server_error.map(ServerError::error_code),
            recoverable = server_error.map(ServerError::is_recoverable),
            suggestion = server_error.and_then(ServerError::suggestion),
            "Application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate()?;
    cli.log();

    let state = create_service_state(&cli);
    let router = create_router(state.clone(), &cli);

    let cancel = CancellationToken::new();
    let worker = spawn_bot_poll_worker(&cli, &state, cancel.clone());

    let shutdown_timeout = cli.server.shutdown_timeout();
    server::serve(router, cli.server).await?;

    cancel.cancel();
    match tokio::time::timeout(shutdown_timeout, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(join_error)) => tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %join_error,
            "Bot poll worker task failed"
        ),
        Err(_) => tracing::warn!(
            target: TRACING_TARGET_SHUTDOWN,
            "Bot poll worker did not stop within the shutdown window"
        ),
    }

    Ok(())
}

/// Builds the application state from sample-backed capability services.
fn create_service_state(cli: &Cli) -> ServiceState {
    let settings = ServerSettings {
        frontend_url: cli.server.frontend_url.clone(),
        openai_key_present: cli.openai.is_configured(),
    };

    ServiceState::new(
        create_identity_service(cli),
        create_calendar_service(cli),
        create_notetaker_service(cli),
        create_content_service(cli),
        create_social_service(cli),
        settings,
    )
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, security headers, compression
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    let recovery = RecoveryConfig::with_timeout_secs(cli.server.request_timeout);

    routes()
        .with_open_api(cli.middleware.openapi.clone())
        .with_state(state)
        .with_security(&cli.middleware.cors, &SecurityHeadersConfig::default())
        .with_observability()
        .with_recovery(&recovery)
}

/// Spawns the background bot poller tied to the given cancellation token.
fn spawn_bot_poll_worker(
    cli: &Cli,
    state: &ServiceState,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let worker = BotPollWorker::new(state.notetaker.clone(), state.store.clone())
        .with_poll_interval(cli.worker.poll_interval());

    tokio::spawn(async move {
        if let Err(error) = worker.run(cancel).await {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %error,
                "Bot poll worker exited with error"
            );
        }
    })
}
