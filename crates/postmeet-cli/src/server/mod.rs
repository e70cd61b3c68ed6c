//! HTTP/HTTPS server startup and lifecycle management.
//!
//! Protocol selection is a compile-time decision: the `tls` feature swaps
//! the plain HTTP listener for an HTTPS listener backed by rustls.

mod error;
#[cfg(not(feature = "tls"))]
mod http_server;
#[cfg(feature = "tls")]
mod https_server;
mod shutdown;

use axum::Router;
pub use error::{ServerError, ServerResult};
#[cfg(not(feature = "tls"))]
use http_server::serve_http;
#[cfg(feature = "tls")]
use https_server::serve_https;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts a server with automatic protocol selection based on build features.
///
/// # Errors
///
/// Returns an error if:
/// - The server configuration is invalid
/// - TLS certificates cannot be loaded (HTTPS mode)
/// - The listen address cannot be bound
/// - The server encounters a fatal error while running
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    #[cfg(feature = "tls")]
    {
        serve_https(app, config).await
    }

    #[cfg(not(feature = "tls"))]
    {
        serve_http(app, config).await
    }
}
