//! Content generation abstractions for social posts and follow-up email.
//!
//! This module provides the trait and types for turning meeting
//! transcripts into platform-tailored social posts and follow-up
//! emails.
//!
//! # Example
//!
//! ```rust,ignore
//! use postmeet_service::content::{PostPrompt, SampleProvider};
//!
//! let service = SampleProvider::default().into_service();
//! let prompt = PostPrompt::new(transcript, "Team Standup").with_platform("linkedin");
//! let post = service.social_post(&prompt).await?;
//! ```

mod sample;
mod service;

pub mod request;
pub mod response;

pub use request::{EmailPrompt, PostPrompt};
pub use response::{FollowUpEmail, GeneratedPost};
pub use sample::SampleProvider;
pub use service::ContentService;

use crate::health::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for content generation operations.
pub const TRACING_TARGET: &str = "postmeet_service::content";

/// Trait for transcript-based content generation.
///
/// Implementations produce social posts and follow-up emails from a
/// meeting transcript. The sample provider answers with fixed
/// templates; a live adapter prompts an LLM with the transcript and
/// the user's configured prompt for the platform.
#[async_trait::async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate a social post for the prompt's platform.
    ///
    /// Returns an invalid input error when the transcript is empty.
    async fn social_post(&self, prompt: &PostPrompt) -> Result<GeneratedPost>;

    /// Generate posts for several platforms from the same prompt.
    ///
    /// Platforms are generated concurrently and returned in input
    /// order.
    async fn posts_for_platforms(
        &self,
        prompt: &PostPrompt,
        platforms: &[String],
    ) -> Result<Vec<GeneratedPost>> {
        let prompts: Vec<PostPrompt> = platforms
            .iter()
            .map(|platform| prompt.clone().with_platform(platform.clone()))
            .collect();

        let futures = prompts.iter().map(|prompt| self.social_post(prompt));
        let results = futures_util::future::join_all(futures).await;

        let mut posts = Vec::with_capacity(results.len());
        for result in results {
            posts.push(result?);
        }

        Ok(posts)
    }

    /// Generate a follow-up email summarizing the meeting.
    ///
    /// Returns an invalid input error when the transcript is empty.
    async fn follow_up_email(&self, prompt: &EmailPrompt) -> Result<FollowUpEmail>;

    /// Check the health of the content provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
