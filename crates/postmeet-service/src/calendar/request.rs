//! Request types for calendar operations.

use serde::{Deserialize, Serialize};

/// Default lookahead window for upcoming events, in days.
const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Default cap on the number of events returned per listing.
const DEFAULT_MAX_EVENTS: usize = 50;

/// Query parameters for listing upcoming events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EventsQuery {
    /// How many days ahead to look for events.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Maximum number of events to return.
    #[serde(default = "default_max_events")]
    pub max_events: usize,
}

impl EventsQuery {
    /// Create a query with the default window and limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookahead window in days.
    #[must_use]
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// Set the maximum number of events returned.
    #[must_use]
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_max_events() -> usize {
    DEFAULT_MAX_EVENTS
}
