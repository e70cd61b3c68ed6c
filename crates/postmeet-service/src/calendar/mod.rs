//! Calendar abstractions for upcoming meeting discovery.
//!
//! This module provides the trait and types for listing upcoming events
//! across the user's linked Google accounts, including meeting URL and
//! platform detection used by the notetaker scheduler.
//!
//! # Example
//!
//! ```rust,ignore
//! use postmeet_service::calendar::{EventsQuery, SampleProvider};
//!
//! let service = SampleProvider::default().into_service();
//! let events = service.upcoming_events(&EventsQuery::default()).await?;
//! ```

mod sample;
mod service;

pub mod request;
pub mod response;

pub use request::EventsQuery;
pub use response::{CalendarEvent, EventAttendee, MeetingPlatform};
pub use sample::SampleProvider;
pub use service::CalendarService;

use crate::health::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for calendar operations.
pub const TRACING_TARGET: &str = "postmeet_service::calendar";

/// Trait for calendar event listing.
///
/// Implementations return upcoming events ordered by start time. The
/// sample provider fabricates a deterministic schedule relative to the
/// current time; a live adapter queries the Google Calendar API for
/// every linked account.
#[async_trait::async_trait]
pub trait CalendarProvider: Send + Sync {
    /// List upcoming events across all linked accounts.
    ///
    /// Events are ordered by start time ascending and never exceed
    /// the query's `max_events` limit.
    async fn upcoming_events(&self, query: &EventsQuery) -> Result<Vec<CalendarEvent>>;

    /// Check the health of the calendar provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
