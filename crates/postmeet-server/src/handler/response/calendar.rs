//! Calendar discovery response types.

use postmeet_service::calendar::CalendarEvent;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A discovered calendar event with its notetaker flag.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EventEntry {
    /// The discovered event.
    #[serde(flatten)]
    pub event: CalendarEvent,
    /// Whether a notetaker bot is requested for this event.
    pub notetaker_enabled: bool,
}

impl EventEntry {
    /// Creates a new instance of [`EventEntry`].
    pub fn new(event: CalendarEvent, notetaker_enabled: bool) -> Self {
        Self {
            event,
            notetaker_enabled,
        }
    }
}

/// Per-account event counts for the discovery window.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AccountSummary {
    /// Email of the linked Google account.
    pub email: String,
    /// Display name of the linked Google account.
    pub name: String,
    /// Number of events discovered for this account.
    pub events_count: usize,
}

/// Response for listing upcoming calendar events.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EventsPage {
    /// Events across all linked accounts.
    pub events: Vec<EventEntry>,
    /// Accounts the events were discovered from.
    pub accounts: Vec<AccountSummary>,
}

impl EventsPage {
    /// Creates a page, summarizing accounts from the entries.
    ///
    /// Account order follows first appearance in the event list.
    pub fn new(events: Vec<EventEntry>) -> Self {
        let mut accounts: Vec<AccountSummary> = Vec::new();
        for entry in &events {
            let email = &entry.event.google_account_email;
            match accounts.iter_mut().find(|account| account.email == *email) {
                Some(account) => account.events_count += 1,
                None => accounts.push(AccountSummary {
                    email: email.clone(),
                    name: entry.event.google_account_name.clone(),
                    events_count: 1,
                }),
            }
        }

        Self { events, accounts }
    }
}

#[cfg(test)]
mod tests {
    use postmeet_service::calendar::{CalendarProvider, EventsQuery, SampleProvider};

    use super::*;

    #[tokio::test]
    async fn page_groups_accounts_by_email() {
        let events = SampleProvider::default()
            .upcoming_events(&EventsQuery::default())
            .await
            .unwrap();
        let entries = events
            .into_iter()
            .map(|event| EventEntry::new(event, false))
            .collect();

        let page = EventsPage::new(entries);

        assert_eq!(page.accounts.len(), 2);
        let total: usize = page.accounts.iter().map(|account| account.events_count).sum();
        assert_eq!(total, page.events.len());
    }
}
