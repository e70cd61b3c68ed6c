//! Sample calendar provider with a deterministic upcoming schedule.

use jiff::{SignedDuration, Timestamp};
use url::Url;

use super::{
    CalendarEvent, CalendarProvider, CalendarService, EventAttendee, EventsQuery, MeetingPlatform,
    Result,
};
use crate::health::ServiceHealth;

/// Sample calendar provider.
///
/// Fabricates a fixed schedule of upcoming events relative to the
/// current time, spanning two linked accounts. Used whenever Google
/// OAuth credentials are not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl SampleProvider {
    /// Create a new sample provider.
    pub fn new() -> Self {
        Self
    }

    /// Wrap this provider in a [`CalendarService`].
    pub fn into_service(self) -> CalendarService {
        CalendarService::from_provider(self)
    }
}

fn event(
    id: &str,
    title: &str,
    start: Timestamp,
    minutes: i64,
    meeting_url: Option<&str>,
    account_email: &str,
    account_name: &str,
) -> CalendarEvent {
    let meeting_url: Option<Url> = meeting_url.map(|url| url.parse().unwrap());
    let platform = meeting_url
        .as_ref()
        .map(MeetingPlatform::from_meeting_url)
        .unwrap_or_default();
    let description = meeting_url
        .as_ref()
        .map(|url| format!("Join the call: {url}"));

    CalendarEvent {
        id: id.to_owned(),
        title: title.to_owned(),
        description,
        start_time: start,
        end_time: start + SignedDuration::from_mins(minutes),
        location: None,
        attendees: vec![
            EventAttendee::new(account_email, "accepted").with_name(account_name),
            EventAttendee::new("colleague@example.com", "needsAction"),
        ],
        meeting_url,
        platform,
        google_account_email: account_email.to_owned(),
        google_account_name: account_name.to_owned(),
        calendar_name: "Primary Calendar".to_owned(),
    }
}

/// Build the sample schedule, ordered by start time.
fn sample_events(now: Timestamp) -> Vec<CalendarEvent> {
    let hours = |count: i64| now + SignedDuration::from_hours(count);

    vec![
        event(
            "1_0",
            "Team Standup",
            hours(1),
            30,
            Some("https://zoom.us/j/123456789"),
            "test@example.com",
            "Test User",
        ),
        event(
            "1_1",
            "Product Review",
            hours(24),
            60,
            Some("https://meet.google.com/abc-defg-hij"),
            "test@example.com",
            "Test User",
        ),
        event(
            "1_2",
            "Client Sync",
            hours(48),
            45,
            Some("https://teams.microsoft.com/l/meetup-join/19meeting"),
            "test@example.com",
            "Test User",
        ),
        event(
            "2_0",
            "Quarterly Planning",
            hours(72),
            90,
            Some("https://company.webex.com/meet/planning"),
            "work@example.com",
            "Work Account",
        ),
        event(
            "2_1",
            "Design Workshop",
            hours(120),
            60,
            None,
            "work@example.com",
            "Work Account",
        ),
    ]
}

#[async_trait::async_trait]
impl CalendarProvider for SampleProvider {
    async fn upcoming_events(&self, query: &EventsQuery) -> Result<Vec<CalendarEvent>> {
        let now = Timestamp::now();
        let cutoff = now + SignedDuration::from_hours(i64::from(query.window_days) * 24);

        let mut events: Vec<CalendarEvent> = sample_events(now)
            .into_iter()
            .filter(|event| event.start_time <= cutoff)
            .collect();
        events.truncate(query.max_events);

        Ok(events)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy()
            .with_metric("accounts", serde_json::Value::from(2))
            .with_metric(
                "events",
                serde_json::Value::from(sample_events(Timestamp::now()).len()),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listing_is_sorted_and_never_empty() {
        let provider = SampleProvider::new();
        let events = provider
            .upcoming_events(&EventsQuery::default())
            .await
            .unwrap();

        assert!(!events.is_empty());
        assert!(
            events
                .windows(2)
                .all(|pair| pair[0].start_time <= pair[1].start_time)
        );
    }

    #[tokio::test]
    async fn window_limits_lookahead() {
        let provider = SampleProvider::new();
        let events = provider
            .upcoming_events(&EventsQuery::default().with_window_days(1))
            .await
            .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "1_0");
        assert_eq!(events[1].id, "1_1");
    }

    #[tokio::test]
    async fn max_events_caps_results() {
        let provider = SampleProvider::new();
        let events = provider
            .upcoming_events(&EventsQuery::default().with_max_events(1))
            .await
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Team Standup");
    }

    #[tokio::test]
    async fn events_with_urls_have_detected_platforms() {
        let provider = SampleProvider::new();
        let events = provider
            .upcoming_events(&EventsQuery::default())
            .await
            .unwrap();

        for event in &events {
            if event.has_meeting_url() {
                assert_ne!(event.platform, MeetingPlatform::Unknown, "{}", event.id);
            } else {
                assert_eq!(event.platform, MeetingPlatform::Unknown, "{}", event.id);
            }
        }
    }
}
