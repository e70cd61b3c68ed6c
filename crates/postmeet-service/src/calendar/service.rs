//! Unified calendar service with observability.
//!
//! This module provides [`CalendarService`] which wraps calendar providers
//! and adds structured logging for all operations.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{CalendarEvent, CalendarProvider, EventsQuery, Result, TRACING_TARGET};
use crate::health::ServiceHealth;

/// Unified calendar service with observability.
///
/// This service wraps any provider implementing [`CalendarProvider`] and
/// adds structured logging for all operations.
#[derive(Clone)]
pub struct CalendarService {
    provider: Arc<dyn CalendarProvider>,
}

impl fmt::Debug for CalendarService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarService").finish_non_exhaustive()
    }
}

impl CalendarService {
    /// Create a new calendar service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: CalendarProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// List upcoming events across all linked accounts.
    pub async fn upcoming_events(&self, query: &EventsQuery) -> Result<Vec<CalendarEvent>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            window_days = query.window_days,
            max_events = query.max_events,
            "Listing upcoming events"
        );

        let result = self.provider.upcoming_events(query).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(events) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    count = events.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Upcoming events listed"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Upcoming event listing failed"
                );
            }
        }

        result
    }

    /// Perform a health check on the calendar service.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}
