//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware stacks for:
//! - Security (CORS, headers, body limits, compression)
//! - Observability (metrics, tracing, request IDs)
//! - Error recovery (panics, timeouts, service errors)
//! - OpenAPI documentation with Scalar UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use postmeet_server::middleware::{
//!     RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//! };
//!
//! let app: Router<()> = Router::new()
//!     .with_recovery(&RecoveryConfig::default())
//!     .with_observability()
//!     .with_default_security()
//!     .with_metrics();
//! ```

mod observability;
mod recovery;
mod security;
mod specification;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt, SecurityHeadersConfig};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
