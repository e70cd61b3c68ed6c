//! Middleware configuration for the HTTP server.
//!
//! Groups the CLI-configurable middleware settings: CORS origins and the
//! OpenAPI documentation paths. The request timeout lives on
//! [`ServerConfig`](super::ServerConfig) and is applied by the recovery
//! layer when the router is assembled.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins and the Scalar UI path
//! postmeet-cli --allowed-origins "https://example.com" --scalar-ui "/docs"
//! ```

use clap::Args;
use postmeet_server::middleware::{CorsConfig, OpenApiConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS and OpenAPI settings.
///
/// This struct groups the HTTP middleware configurations that can be
/// customized via CLI arguments or environment variables.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    ///
    /// Controls which origins can access the API and what credentials
    /// are allowed in cross-origin requests.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI documentation configuration.
    ///
    /// Configures the paths where the OpenAPI JSON specification
    /// and Scalar UI are served.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );
    }
}
