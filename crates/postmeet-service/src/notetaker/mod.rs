//! Notetaker bot abstractions for meeting recording.
//!
//! This module provides the trait and types for scheduling recording
//! bots into upcoming meetings and collecting their transcripts once
//! the meetings end.
//!
//! # Example
//!
//! ```rust,ignore
//! use postmeet_service::notetaker::{SampleProvider, ScheduleBot};
//!
//! let service = SampleProvider::default().into_service();
//! let bot = service.schedule_bot(&request).await?;
//! let recordings = service.poll_completed(&[bot]).await?;
//! ```

mod sample;
mod service;

pub mod request;
pub mod response;

pub use request::ScheduleBot;
pub use response::{BotRecording, BotStatus, ScheduledBot};
pub use sample::SampleProvider;
pub use service::NotetakerService;

use crate::health::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for notetaker operations.
pub const TRACING_TARGET: &str = "postmeet_service::notetaker";

/// Trait for notetaker bot management.
///
/// Implementations schedule bots into meetings ahead of the start time
/// and report recordings for meetings that have ended. The sample
/// provider fabricates deterministic transcripts; a live adapter drives
/// the Recall.ai bot API.
#[async_trait::async_trait]
pub trait NotetakerProvider: Send + Sync {
    /// Schedule a bot to join a meeting.
    ///
    /// Returns an invalid input error when the computed join time is
    /// already in the past.
    async fn schedule_bot(&self, request: &ScheduleBot) -> Result<ScheduledBot>;

    /// Cancel a previously scheduled bot.
    async fn cancel_bot(&self, bot_id: &str) -> Result<()>;

    /// Collect recordings for scheduled bots whose meetings have ended.
    ///
    /// Bots that are still waiting for their meeting are skipped and
    /// stay eligible for a later poll.
    async fn poll_completed(&self, bots: &[ScheduledBot]) -> Result<Vec<BotRecording>>;

    /// Check the health of the notetaker provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
