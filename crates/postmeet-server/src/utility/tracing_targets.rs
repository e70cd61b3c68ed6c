//! Centralized tracing target constants for structured logging.
//!
//! This module defines tracing target strings shared across the crate,
//! providing a single source of truth for log categorization and
//! filtering via tracing subscriber filters.

/// Request metrics and performance monitoring.
pub const METRICS: &str = "postmeet_server::metrics";
