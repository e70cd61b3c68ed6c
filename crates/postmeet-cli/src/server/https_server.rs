//! HTTPS server startup backed by rustls.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;

use crate::config::ServerConfig;
use crate::server::{ServerError, ServerResult, shutdown_signal};
use crate::{TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};

/// Starts an HTTPS server with graceful shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The server configuration is invalid
/// - The certificate or key files are missing or unreadable
/// - The server encounters a fatal error while running
pub async fn serve_https(app: Router, config: ServerConfig) -> ServerResult<()> {
    if let Err(validation_error) = config.validate() {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %validation_error,
            "Invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    let (Some(cert_path), Some(key_path)) = (&config.tls_cert_path, &config.tls_key_path) else {
        return Err(ServerError::TlsCertificate(
            "TLS is enabled but certificate and key paths are not configured".to_owned(),
        ));
    };

    validate_tls_files(cert_path, key_path)?;

    let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|err| {
            ServerError::TlsCertificate(format!("Failed to load TLS certificates: {err}"))
        })?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "TLS certificates loaded successfully"
    );

    let server_addr = config.server_addr();

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_addr,
        "Server is ready and listening for connections"
    );

    if config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    let shutdown_timeout = config.shutdown_timeout();

    tokio::spawn(async move {
        shutdown_signal(shutdown_timeout).await;
        shutdown_handle.graceful_shutdown(Some(shutdown_timeout));
    });

    axum_server::bind_rustls(server_addr, tls_config)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %err,
                "Server encountered an error"
            );
            ServerError::Runtime(err)
        })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");
    Ok(())
}

fn validate_tls_files(cert_path: &Path, key_path: &Path) -> ServerResult<()> {
    validate_tls_file(cert_path, "Certificate")?;
    validate_tls_file(key_path, "Private key")?;

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "TLS files validated successfully"
    );

    Ok(())
}

fn validate_tls_file(path: &Path, file_type: &str) -> ServerResult<()> {
    if !path.is_file() {
        return Err(ServerError::TlsCertificate(format!(
            "{} file does not exist or is not a regular file: {}",
            file_type,
            path.display()
        )));
    }

    let metadata = std::fs::metadata(path).map_err(|err| {
        ServerError::TlsCertificate(format!(
            "Cannot read {} file {}: {}",
            file_type,
            path.display(),
            err
        ))
    })?;

    if metadata.len() == 0 {
        return Err(ServerError::TlsCertificate(format!(
            "{} file is empty: {}",
            file_type,
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tls_files_are_rejected() {
        let result =
            validate_tls_files(Path::new("missing_cert.pem"), Path::new("missing_key.pem"));

        match result {
            Err(ServerError::TlsCertificate(message)) => {
                assert!(message.contains("Certificate file does not exist"));
            }
            other => panic!("expected TLS certificate error, got {other:?}"),
        }
    }
}
