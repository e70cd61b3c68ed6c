//! Route categorization for metrics and logging.
//!
//! This module provides a categorization system for routes based on their
//! URI path, enabling aggregated metrics and monitoring by functional area.

use axum::http::Uri;

/// Route classification for metrics grouping.
///
/// Categorizes routes based on their URI path for aggregated metrics
/// and monitoring purposes. Each category represents a distinct
/// functional area of the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    Authentication,
    UserManagement,
    Calendar,
    Meetings,
    SocialMedia,
    Bots,
    Settings,
    Monitoring,
    Api,
    Unknown,
}

impl RouteCategory {
    /// Categorizes a route based on its URI path.
    pub fn from_uri(uri: &Uri) -> Self {
        let path = uri.path();

        if path == "/" || path == "/health" {
            Self::Monitoring
        } else if path.starts_with("/auth/") {
            Self::Authentication
        } else if path.starts_with("/user/") {
            Self::UserManagement
        } else if path.starts_with("/calendar/") {
            Self::Calendar
        } else if path.starts_with("/meetings") {
            Self::Meetings
        } else if path.starts_with("/social-media/") {
            Self::SocialMedia
        } else if path.starts_with("/bots") {
            Self::Bots
        } else if path.starts_with("/settings") {
            Self::Settings
        } else if path.starts_with("/api/") {
            Self::Api
        } else {
            Self::Unknown
        }
    }

    /// Returns the string representation for logging and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "auth",
            Self::UserManagement => "users",
            Self::Calendar => "calendar",
            Self::Meetings => "meetings",
            Self::SocialMedia => "social_media",
            Self::Bots => "bots",
            Self::Settings => "settings",
            Self::Monitoring => "monitoring",
            Self::Api => "api",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorization_maps_paths_correctly() {
        assert_eq!(
            RouteCategory::from_uri(&"/".parse().unwrap()),
            RouteCategory::Monitoring
        );
        assert_eq!(
            RouteCategory::from_uri(&"/health".parse().unwrap()),
            RouteCategory::Monitoring
        );
        assert_eq!(
            RouteCategory::from_uri(&"/auth/google/callback".parse().unwrap()),
            RouteCategory::Authentication
        );
        assert_eq!(
            RouteCategory::from_uri(&"/user/google-accounts".parse().unwrap()),
            RouteCategory::UserManagement
        );
        assert_eq!(
            RouteCategory::from_uri(&"/calendar/events".parse().unwrap()),
            RouteCategory::Calendar
        );
        assert_eq!(
            RouteCategory::from_uri(&"/meetings/1_0/transcript".parse().unwrap()),
            RouteCategory::Meetings
        );
        assert_eq!(
            RouteCategory::from_uri(&"/meetings/past".parse().unwrap()),
            RouteCategory::Meetings
        );
        assert_eq!(
            RouteCategory::from_uri(&"/social-media/accounts".parse().unwrap()),
            RouteCategory::SocialMedia
        );
        assert_eq!(
            RouteCategory::from_uri(&"/bots/poll".parse().unwrap()),
            RouteCategory::Bots
        );
        assert_eq!(
            RouteCategory::from_uri(&"/settings".parse().unwrap()),
            RouteCategory::Settings
        );
        assert_eq!(
            RouteCategory::from_uri(&"/api/openapi.json".parse().unwrap()),
            RouteCategory::Api
        );
        assert_eq!(
            RouteCategory::from_uri(&"/unknown/path".parse().unwrap()),
            RouteCategory::Unknown
        );
    }
}
