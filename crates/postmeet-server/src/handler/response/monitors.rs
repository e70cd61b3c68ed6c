//! Health and status response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Banner returned from the API root.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ServiceBanner {
    /// Human-readable service name.
    pub message: String,
    /// Coarse run state.
    pub status: String,
}

impl ServiceBanner {
    /// Creates the banner for a running service.
    pub fn running() -> Self {
        Self {
            message: "Post-Meeting Social Media Generator API".to_owned(),
            status: "running".to_owned(),
        }
    }
}

/// Availability of each backing capability.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ServiceAvailability {
    /// Google Calendar discovery.
    pub google_calendar: bool,
    /// Recall notetaker bots.
    pub recall: bool,
    /// Content generation.
    pub ai: bool,
    /// Social publishing.
    pub social_media: bool,
}

/// Detailed state of the content generation capability.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AiServiceDetails {
    /// Whether the capability was wired at startup.
    pub initialized: bool,
    /// Whether the capability currently answers health checks.
    pub available: bool,
    /// Whether an API key was present at startup.
    pub has_api_key: bool,
}

/// Full health report for the backend.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HealthReport {
    /// Coarse health state.
    pub status: String,
    /// Human-readable summary.
    pub message: String,
    /// Per-capability availability.
    pub services: ServiceAvailability,
    /// Number of meetings with a stored transcript.
    pub completed_meetings: usize,
    /// Number of bots currently tracked.
    pub scheduled_bots: usize,
    /// Content generation details.
    pub ai_service_details: AiServiceDetails,
}

impl HealthReport {
    /// Creates a healthy report from capability availability and store counts.
    pub fn healthy(
        services: ServiceAvailability,
        completed_meetings: usize,
        scheduled_bots: usize,
        ai_service_details: AiServiceDetails,
    ) -> Self {
        Self {
            status: "healthy".to_owned(),
            message: "Backend is running successfully".to_owned(),
            services,
            completed_meetings,
            scheduled_bots,
            ai_service_details,
        }
    }
}
