//! Response types for calendar operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// Video conferencing platform detected from a meeting URL.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum MeetingPlatform {
    /// Zoom meeting.
    Zoom,
    /// Microsoft Teams meeting.
    Teams,
    /// Google Meet meeting.
    GoogleMeet,
    /// Cisco Webex meeting.
    Webex,
    /// Platform could not be determined.
    #[default]
    Unknown,
}

impl MeetingPlatform {
    /// Detect the platform from a meeting URL's host.
    pub fn from_meeting_url(url: &Url) -> Self {
        let Some(host) = url.host_str() else {
            return Self::Unknown;
        };
        let host = host.to_ascii_lowercase();

        if host.ends_with("zoom.us") || host.ends_with("zoom.com") {
            Self::Zoom
        } else if host.ends_with("teams.microsoft.com") || host.ends_with("teams.live.com") {
            Self::Teams
        } else if host.ends_with("meet.google.com") {
            Self::GoogleMeet
        } else if host.ends_with("webex.com") {
            Self::Webex
        } else {
            Self::Unknown
        }
    }
}

/// A single attendee on a calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EventAttendee {
    /// Attendee email address.
    pub email: String,
    /// Display name, when the calendar provides one.
    pub name: Option<String>,
    /// RSVP status as reported by the calendar.
    pub response_status: String,
}

impl EventAttendee {
    /// Create an attendee with the given email and RSVP status.
    pub fn new(email: impl Into<String>, response_status: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            response_status: response_status.into(),
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An upcoming calendar event from a linked Google account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CalendarEvent {
    /// Event identifier, unique across all linked accounts.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Free-form event description.
    pub description: Option<String>,
    /// Start of the event.
    pub start_time: Timestamp,
    /// End of the event.
    pub end_time: Timestamp,
    /// Physical or virtual location text.
    pub location: Option<String>,
    /// Invited attendees.
    pub attendees: Vec<EventAttendee>,
    /// Video conference URL found in the description or location.
    pub meeting_url: Option<Url>,
    /// Platform detected from the meeting URL.
    pub platform: MeetingPlatform,
    /// Email of the Google account the event belongs to.
    pub google_account_email: String,
    /// Display name of the Google account the event belongs to.
    pub google_account_name: String,
    /// Name of the source calendar.
    pub calendar_name: String,
}

impl CalendarEvent {
    /// Whether the event carries a joinable video conference URL.
    pub fn has_meeting_url(&self) -> bool {
        self.meeting_url.is_some()
    }

    /// Event duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end_time.duration_since(self.start_time).as_mins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_of(url: &str) -> MeetingPlatform {
        MeetingPlatform::from_meeting_url(&url.parse().unwrap())
    }

    #[test]
    fn detects_platform_from_host() {
        assert_eq!(platform_of("https://zoom.us/j/123456789"), MeetingPlatform::Zoom);
        assert_eq!(platform_of("https://us02web.zoom.us/j/987"), MeetingPlatform::Zoom);
        assert_eq!(
            platform_of("https://teams.microsoft.com/l/meetup-join/abc"),
            MeetingPlatform::Teams
        );
        assert_eq!(
            platform_of("https://meet.google.com/abc-defg-hij"),
            MeetingPlatform::GoogleMeet
        );
        assert_eq!(
            platform_of("https://company.webex.com/meet/planning"),
            MeetingPlatform::Webex
        );
        assert_eq!(platform_of("https://example.com/call"), MeetingPlatform::Unknown);
    }

    #[test]
    fn platform_serializes_snake_case() {
        let json = serde_json::to_string(&MeetingPlatform::GoogleMeet).unwrap();
        assert_eq!(json, "\"google_meet\"");
        assert_eq!(MeetingPlatform::GoogleMeet.to_string(), "google_meet");
    }

    #[test]
    fn duration_is_derived_from_bounds() {
        let start: Timestamp = "2024-06-01T10:00:00Z".parse().unwrap();
        let end: Timestamp = "2024-06-01T10:45:00Z".parse().unwrap();
        let event = CalendarEvent {
            id: "1_0".to_owned(),
            title: "Team Standup".to_owned(),
            description: None,
            start_time: start,
            end_time: end,
            location: None,
            attendees: Vec::new(),
            meeting_url: None,
            platform: MeetingPlatform::Unknown,
            google_account_email: "test@example.com".to_owned(),
            google_account_name: "Test User".to_owned(),
            calendar_name: "Primary Calendar".to_owned(),
        };

        assert_eq!(event.duration_minutes(), 45);
        assert!(!event.has_meeting_url());
    }
}
