//! Health reporting for capability providers.
//!
//! This module provides types for reporting provider health status,
//! including operational state, response times, and custom metrics.
//! The HTTP layer aggregates these reports into the backend health
//! endpoint.

use std::collections::HashMap;
use std::time::Duration;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents the operational status of a provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Provider is operating normally
    #[default]
    Healthy,
    /// Provider is operating with some issues but still functional
    Degraded,
    /// Provider is not operational
    Unhealthy,
}

/// Health information for a provider.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Current provider status
    pub status: ServiceStatus,
    /// Response time for the health check
    pub response: Option<Duration>,
    /// Optional message describing the current state
    pub message: Option<String>,
    /// Timestamp when the health check was performed
    pub checked_at: Timestamp,
    /// Additional metrics about the provider
    pub metrics: HashMap<String, Value>,
}

impl ServiceHealth {
    /// Creates a new healthy service health report.
    pub fn healthy() -> Self {
        Self {
            status: ServiceStatus::Healthy,
            checked_at: Timestamp::now(),
            ..Default::default()
        }
    }

    /// Creates a new degraded service health report.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            message: Some(message.into()),
            checked_at: Timestamp::now(),
            ..Default::default()
        }
    }

    /// Creates a new unhealthy service health report.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Unhealthy,
            message: Some(message.into()),
            checked_at: Timestamp::now(),
            ..Default::default()
        }
    }

    /// Sets the response time for this health check.
    pub fn with_response_time(mut self, response_time: Duration) -> Self {
        self.response = Some(response_time);
        self
    }

    /// Adds a metric to the health report.
    pub fn with_metric(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Returns true if the provider can still serve requests.
    pub fn is_available(&self) -> bool {
        !matches!(self.status, ServiceStatus::Unhealthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_follows_status() {
        assert!(ServiceHealth::healthy().is_available());
        assert!(ServiceHealth::degraded("slow responses").is_available());
        assert!(!ServiceHealth::unhealthy("connection refused").is_available());
    }

    #[test]
    fn builders_attach_details() {
        let health = ServiceHealth::healthy()
            .with_response_time(Duration::from_millis(12))
            .with_metric("accounts", Value::from(2));

        assert_eq!(health.response, Some(Duration::from_millis(12)));
        assert_eq!(health.metrics.get("accounts"), Some(&Value::from(2)));
    }
}
