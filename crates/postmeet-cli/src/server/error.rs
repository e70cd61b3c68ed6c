//! Server error types with recovery suggestions.

use std::io;

use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = std::result::Result<T, ServerError>;

/// Error type for server startup and runtime failures.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind to the specified address.
    #[error("Failed to bind to {address}: {source}")]
    #[allow(dead_code)]
    BindError {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Runtime server error.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),

    /// TLS configuration error.
    #[error("TLS certificate error: {0}")]
    #[allow(dead_code)]
    TlsCertificate(String),
}

impl ServerError {
    /// Returns a stable code for this error kind.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E001",
            Self::BindError { .. } => "E002",
            Self::Runtime(_) => "E003",
            Self::TlsCertificate(_) => "E004",
        }
    }

    /// Returns whether a retry could succeed without a configuration change.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::TlsCertificate(_) => false,
            Self::BindError { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::AddrInUse
                    | io::ErrorKind::AddrNotAvailable
            ),
            Self::Runtime(err) => matches!(
                err.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::Interrupted
                    | io::ErrorKind::TimedOut
                    | io::ErrorKind::ConnectionRefused
            ),
        }
    }

    /// Provides a human-readable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig(_) => {
                Some("Check the CLI arguments and environment variables for out-of-range values")
            }
            Self::BindError { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    Some("Try using a port above 1024 or run with appropriate privileges")
                }
                io::ErrorKind::AddrInUse => Some(
                    "The port is already in use. Try a different port or stop the conflicting service",
                ),
                io::ErrorKind::AddrNotAvailable => {
                    Some("The address is not available. Check network interface configuration")
                }
                _ => Some("Check network configuration and firewall settings"),
            },
            Self::Runtime(err) => match err.kind() {
                io::ErrorKind::PermissionDenied => Some("Check file and network permissions"),
                io::ErrorKind::Interrupted => Some("The operation was interrupted, you may retry"),
                io::ErrorKind::TimedOut => {
                    Some("The operation timed out, consider increasing timeout values")
                }
                io::ErrorKind::ConnectionRefused => {
                    Some("Connection was refused, check if the service is running")
                }
                _ => None,
            },
            Self::TlsCertificate(_) => {
                Some("Verify certificate and key files exist and are in correct PEM format")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind_error(kind: io::ErrorKind) -> ServerError {
        ServerError::BindError {
            address: "127.0.0.1:8000".to_owned(),
            source: io::Error::new(kind, "test"),
        }
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = [
            ServerError::InvalidConfig("test".to_owned()),
            bind_error(io::ErrorKind::AddrInUse),
            ServerError::Runtime(io::Error::other("test")),
            ServerError::TlsCertificate("test".to_owned()),
        ];

        for (i, left) in errors.iter().enumerate() {
            for right in errors.iter().skip(i + 1) {
                assert_ne!(left.error_code(), right.error_code());
            }
        }
    }

    #[test]
    fn recoverable_errors_have_suggestions() {
        let error = bind_error(io::ErrorKind::PermissionDenied);
        assert!(error.is_recoverable());
        assert!(error.suggestion().is_some());

        let error = ServerError::Runtime(io::Error::new(io::ErrorKind::ConnectionRefused, "test"));
        assert!(error.is_recoverable());
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn config_errors_need_manual_intervention() {
        let error = ServerError::InvalidConfig("port out of range".to_owned());
        assert!(!error.is_recoverable());
        assert!(error.suggestion().is_some());
    }
}
