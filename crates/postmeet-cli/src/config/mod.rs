//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, timeouts, frontend URL
//! ├── middleware: MiddlewareConfig # CORS and OpenAPI documentation
//! ├── worker: WorkerConfig         # Bot poll cadence
//! ├── google: GoogleConfig         # Google OAuth and Calendar credentials
//! ├── openai: OpenAiConfig         # OpenAI content generation credentials
//! ├── recall: RecallConfig         # Recall.ai notetaker credentials
//! └── social: SocialConfig         # LinkedIn/Facebook/Twitter credentials
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure the listen port and poll cadence
//! postmeet-cli --port 8000 --poll-interval 60
//!
//! # Or via environment variables
//! PORT=8000 BOT_POLL_INTERVAL=60 postmeet-cli
//! ```

mod middleware;
mod provider;
mod server;
mod worker;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use middleware::MiddlewareConfig;
use postmeet_service::{GoogleConfig, OpenAiConfig, RecallConfig, SocialConfig};
pub use provider::{
    create_calendar_service, create_content_service, create_identity_service,
    create_notetaker_service, create_social_service,
};
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
pub use worker::WorkerConfig;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
///
/// Combines all configuration groups for the Postmeet server:
/// - [`ServerConfig`]: Network binding, timeouts, and the frontend URL
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, OpenAPI)
/// - [`WorkerConfig`]: Background bot poll cadence
/// - Credential configs for Google, OpenAI, Recall.ai, and social platforms
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "postmeet")]
#[command(about = "Postmeet post-meeting content server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Background worker configuration.
    #[clap(flatten)]
    pub worker: WorkerConfig,

    /// Google OAuth and Calendar API credentials.
    #[clap(flatten)]
    pub google: GoogleConfig,

    /// OpenAI content generation credentials.
    #[clap(flatten)]
    pub openai: OpenAiConfig,

    /// Recall.ai notetaker credentials.
    #[clap(flatten)]
    pub recall: RecallConfig,

    /// Social platform OAuth credentials.
    #[clap(flatten)]
    pub social: SocialConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// This is the preferred way to initialize the CLI configuration as it ensures
    /// .env files are loaded before clap parses arguments, allowing environment
    /// variables from .env to be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    ///
    /// This should be called before parsing CLI arguments so that clap's `env`
    /// feature can pick up values from .env files.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.worker
            .validate()
            .context("invalid worker configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive values).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();
        self.worker.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            google = self.google.is_configured(),
            openai = self.openai.is_configured(),
            recall = self.recall.is_configured(),
            social = self.social.is_configured(),
            "Credential configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "tls").then_some("tls"),
            cfg!(feature = "otel").then_some("otel"),
            cfg!(feature = "dotenv").then_some("dotenv"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
