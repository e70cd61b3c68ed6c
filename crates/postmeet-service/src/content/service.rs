//! Unified content generation service with observability.
//!
//! This module provides [`ContentService`] which wraps content providers
//! and adds structured logging for all operations.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{
    ContentProvider, EmailPrompt, FollowUpEmail, GeneratedPost, PostPrompt, Result, TRACING_TARGET,
};
use crate::health::ServiceHealth;

/// Unified content generation service with observability.
///
/// This service wraps any provider implementing [`ContentProvider`] and
/// adds structured logging for all operations.
#[derive(Clone)]
pub struct ContentService {
    provider: Arc<dyn ContentProvider>,
}

impl fmt::Debug for ContentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentService").finish_non_exhaustive()
    }
}

impl ContentService {
    /// Create a new content service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: ContentProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Generate a social post for the prompt's platform.
    pub async fn social_post(&self, prompt: &PostPrompt) -> Result<GeneratedPost> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            platform = %prompt.platform,
            transcript_len = prompt.transcript.len(),
            custom_prompt = prompt.custom_prompt.is_some(),
            "Generating social post"
        );

        let result = self.provider.social_post(prompt).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(post) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    platform = %post.platform,
                    content_len = post.content.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Social post generated"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    platform = %prompt.platform,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Social post generation failed"
                );
            }
        }

        result
    }

    /// Generate posts for several platforms from the same prompt.
    pub async fn posts_for_platforms(
        &self,
        prompt: &PostPrompt,
        platforms: &[String],
    ) -> Result<Vec<GeneratedPost>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            platform_count = platforms.len(),
            "Generating posts for platforms"
        );

        let result = self.provider.posts_for_platforms(prompt, platforms).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(posts) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    count = posts.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Platform posts generated"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Platform post generation failed"
                );
            }
        }

        result
    }

    /// Generate a follow-up email summarizing the meeting.
    pub async fn follow_up_email(&self, prompt: &EmailPrompt) -> Result<FollowUpEmail> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            meeting_title = %prompt.meeting_title,
            transcript_len = prompt.transcript.len(),
            "Generating follow-up email"
        );

        let result = self.provider.follow_up_email(prompt).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(email) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    subject = %email.subject,
                    body_len = email.body.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Follow-up email generated"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Follow-up email generation failed"
                );
            }
        }

        result
    }

    /// Perform a health check on the content service.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}
