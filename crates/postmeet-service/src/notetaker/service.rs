//! Unified notetaker service with observability.
//!
//! This module provides [`NotetakerService`] which wraps notetaker providers
//! and adds structured logging for all operations.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{BotRecording, NotetakerProvider, Result, ScheduleBot, ScheduledBot, TRACING_TARGET};
use crate::health::ServiceHealth;

/// Unified notetaker service with observability.
///
/// This service wraps any provider implementing [`NotetakerProvider`] and
/// adds structured logging for all operations.
#[derive(Clone)]
pub struct NotetakerService {
    provider: Arc<dyn NotetakerProvider>,
}

impl fmt::Debug for NotetakerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotetakerService").finish_non_exhaustive()
    }
}

impl NotetakerService {
    /// Create a new notetaker service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: NotetakerProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Schedule a bot to join a meeting.
    pub async fn schedule_bot(&self, request: &ScheduleBot) -> Result<ScheduledBot> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            meeting_id = %request.meeting_id,
            join_before_minutes = request.join_before_minutes,
            "Scheduling notetaker bot"
        );

        let result = self.provider.schedule_bot(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(bot) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    meeting_id = %request.meeting_id,
                    bot_id = %bot.bot_id,
                    join_at = %bot.join_at,
                    elapsed_ms = elapsed.as_millis(),
                    "Notetaker bot scheduled"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    meeting_id = %request.meeting_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Notetaker bot scheduling failed"
                );
            }
        }

        result
    }

    /// Cancel a previously scheduled bot.
    pub async fn cancel_bot(&self, bot_id: &str) -> Result<()> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            bot_id,
            "Cancelling notetaker bot"
        );

        let result = self.provider.cancel_bot(bot_id).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    bot_id,
                    elapsed_ms = elapsed.as_millis(),
                    "Notetaker bot cancelled"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    bot_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Notetaker bot cancellation failed"
                );
            }
        }

        result
    }

    /// Collect recordings for scheduled bots whose meetings have ended.
    pub async fn poll_completed(&self, bots: &[ScheduledBot]) -> Result<Vec<BotRecording>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            bot_count = bots.len(),
            "Polling scheduled bots"
        );

        let result = self.provider.poll_completed(bots).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(recordings) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    bot_count = bots.len(),
                    completed = recordings.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Bot polling completed"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    bot_count = bots.len(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Bot polling failed"
                );
            }
        }

        result
    }

    /// Perform a health check on the notetaker service.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}
