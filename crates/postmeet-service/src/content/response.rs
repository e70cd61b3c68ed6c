//! Response types for content generation.

use serde::{Deserialize, Serialize};

/// A generated social post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct GeneratedPost {
    /// Post body without trailing hashtags.
    pub content: String,
    /// Space-separated hashtags.
    pub hashtags: String,
    /// Compliance disclaimer, empty when not applicable.
    pub disclaimer: String,
    /// Platform the post was written for.
    pub platform: String,
}

impl GeneratedPost {
    /// Post body with hashtags appended, ready for publishing.
    pub fn full_text(&self) -> String {
        if self.hashtags.is_empty() {
            self.content.clone()
        } else {
            format!("{} {}", self.content, self.hashtags)
        }
    }
}

/// A generated follow-up email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FollowUpEmail {
    /// Email subject line.
    pub subject: String,
    /// Email body text.
    pub body: String,
}

impl FollowUpEmail {
    /// Subject and body joined into a single sendable block.
    pub fn formatted(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_text_appends_hashtags() {
        let post = GeneratedPost {
            content: "Great meeting today!".to_owned(),
            hashtags: "#meeting #collaboration".to_owned(),
            disclaimer: String::new(),
            platform: "linkedin".to_owned(),
        };
        assert_eq!(post.full_text(), "Great meeting today! #meeting #collaboration");

        let bare = GeneratedPost {
            hashtags: String::new(),
            ..post
        };
        assert_eq!(bare.full_text(), "Great meeting today!");
    }

    #[test]
    fn formatted_email_includes_subject_line() {
        let email = FollowUpEmail {
            subject: "Follow-up on Team Standup".to_owned(),
            body: "Dear Team,\n\nThanks for joining.".to_owned(),
        };
        assert!(
            email
                .formatted()
                .starts_with("Subject: Follow-up on Team Standup\n\n")
        );
    }
}
