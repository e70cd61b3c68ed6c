//! Application state and dependency injection.

mod store;

use postmeet_service::{
    CalendarService, ContentService, IdentityService, NotetakerService, SocialService,
};
use url::Url;

pub use crate::service::store::{
    CompletedMeeting, MeetingSnapshot, MeetingStore, TrackedBot, UserSettings,
};
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Deployment metadata captured once when the services are wired.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Frontend base URL that OAuth callbacks redirect back to.
    pub frontend_url: Url,
    /// Whether an OpenAI API key was present at startup.
    pub openai_key_present: bool,
}

fn default_frontend_url() -> Url {
    "http://localhost:3000".parse().unwrap()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            frontend_url: default_frontend_url(),
            openai_key_present: false,
        }
    }
}

impl ServerSettings {
    /// URL the OAuth callbacks redirect to after a successful exchange.
    /// Query parameters carry the session and are appended per request.
    pub fn auth_success_url(&self) -> Url {
        let mut url = self.frontend_url.clone();
        url.set_path("/auth/success");
        url
    }
}

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    // Capability services:
    pub identity: IdentityService,
    pub calendar: CalendarService,
    pub notetaker: NotetakerService,
    pub content: ContentService,
    pub social: SocialService,

    // Internal services:
    pub store: MeetingStore,
    pub settings: ServerSettings,
}

impl ServiceState {
    /// Initializes application state from wired services.
    ///
    /// The store starts empty; its sections fill in as requests arrive.
    pub fn new(
        identity: IdentityService,
        calendar: CalendarService,
        notetaker: NotetakerService,
        content: ContentService,
        social: SocialService,
        settings: ServerSettings,
    ) -> Self {
        Self {
            identity,
            calendar,
            notetaker,
            content,
            social,
            store: MeetingStore::new(),
            settings,
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// Capability services:
impl_di!(identity: IdentityService);
impl_di!(calendar: CalendarService);
impl_di!(notetaker: NotetakerService);
impl_di!(content: ContentService);
impl_di!(social: SocialService);

// Internal services:
impl_di!(store: MeetingStore);
impl_di!(settings: ServerSettings);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_success_url_replaces_path() {
        let settings = ServerSettings::default();
        assert_eq!(
            settings.auth_success_url().as_str(),
            "http://localhost:3000/auth/success"
        );

        let settings = ServerSettings {
            frontend_url: "https://app.example.com/base".parse().unwrap(),
            openai_key_present: false,
        };
        assert_eq!(
            settings.auth_success_url().as_str(),
            "https://app.example.com/auth/success"
        );
    }
}
