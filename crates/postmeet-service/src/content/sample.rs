//! Sample content provider with fixed generation templates.

use super::{
    ContentProvider, ContentService, EmailPrompt, Error, FollowUpEmail, GeneratedPost, PostPrompt,
    Result,
};
use crate::health::ServiceHealth;

/// Post body shared by every platform template.
const SAMPLE_POST: &str = "Just had an amazing meeting! Key insights: \
1) Great discussion on project goals \
2) Clear next steps identified \
3) Excited about the collaboration!";

/// Sample content provider.
///
/// Answers every prompt with a fixed template, tagged for the
/// requested platform. Used whenever an OpenAI API key is not
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl SampleProvider {
    /// Create a new sample provider.
    pub fn new() -> Self {
        Self
    }

    /// Wrap this provider in a [`ContentService`].
    pub fn into_service(self) -> ContentService {
        ContentService::from_provider(self)
    }
}

#[async_trait::async_trait]
impl ContentProvider for SampleProvider {
    async fn social_post(&self, prompt: &PostPrompt) -> Result<GeneratedPost> {
        if prompt.transcript.is_empty() {
            return Err(Error::invalid_input().with_message("transcript must not be empty"));
        }

        Ok(GeneratedPost {
            content: SAMPLE_POST.to_owned(),
            hashtags: format!("#{} #meeting #collaboration", prompt.platform),
            disclaimer: String::new(),
            platform: prompt.platform.clone(),
        })
    }

    async fn follow_up_email(&self, prompt: &EmailPrompt) -> Result<FollowUpEmail> {
        if prompt.transcript.is_empty() {
            return Err(Error::invalid_input().with_message("transcript must not be empty"));
        }

        let title = &prompt.meeting_title;
        let body = format!(
            "Dear Team,\n\n\
             Thank you for attending today's meeting. Here's a summary of our discussion:\n\n\
             Key Points Discussed:\n\
             - We covered the main agenda items for {title}\n\
             - Important decisions were made regarding our project direction\n\
             - Next steps were identified for moving forward\n\n\
             Action Items:\n\
             - Please review the meeting notes and provide feedback\n\
             - Follow up on assigned tasks by the agreed deadline\n\
             - Schedule the next meeting as discussed\n\n\
             Thank you for your time and valuable input.\n\n\
             Best regards,\n\
             Meeting Organizer"
        );

        Ok(FollowUpEmail {
            subject: format!("Follow-up on {title}"),
            body,
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn posts_are_tagged_for_the_platform() {
        let provider = SampleProvider::new();
        let prompt = PostPrompt::new("Test User: hello.", "Team Standup").with_platform("facebook");

        let post = provider.social_post(&prompt).await.unwrap();
        assert_eq!(post.platform, "facebook");
        assert_eq!(post.hashtags, "#facebook #meeting #collaboration");
        assert!(post.full_text().ends_with("#facebook #meeting #collaboration"));
    }

    #[tokio::test]
    async fn empty_transcript_is_rejected() {
        let provider = SampleProvider::new();

        let error = provider
            .social_post(&PostPrompt::new("", "Team Standup"))
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);

        let error = provider
            .follow_up_email(&EmailPrompt::new("", "Team Standup"))
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn batch_generation_preserves_platform_order() {
        let provider = SampleProvider::new();
        let prompt = PostPrompt::new("Test User: hello.", "Team Standup");
        let platforms = vec!["linkedin".to_owned(), "facebook".to_owned()];

        let posts = provider
            .posts_for_platforms(&prompt, &platforms)
            .await
            .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].platform, "linkedin");
        assert_eq!(posts[1].platform, "facebook");
    }

    #[tokio::test]
    async fn email_references_the_meeting_title() {
        let provider = SampleProvider::new();
        let email = provider
            .follow_up_email(&EmailPrompt::new("Test User: hello.", "Quarterly Planning"))
            .await
            .unwrap();

        assert_eq!(email.subject, "Follow-up on Quarterly Planning");
        assert!(email.body.contains("Quarterly Planning"));
        assert!(email.formatted().starts_with("Subject: Follow-up on Quarterly Planning"));
    }
}
