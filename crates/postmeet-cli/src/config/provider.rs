//! Capability provider wiring.
//!
//! Live adapters are injected by the deployment behind the provider
//! traits; this build always wires the sample providers. The credential
//! check runs once here so the chosen mode is visible in the logs from
//! startup onward.

use postmeet_service::{
    CalendarService, ContentService, IdentityService, NotetakerService, SocialService, calendar,
    content, identity, notetaker, social,
};

use crate::TRACING_TARGET_CONFIG;
use crate::config::Cli;

/// Creates the identity service from CLI configuration.
pub fn create_identity_service(cli: &Cli) -> IdentityService {
    log_provider_mode("identity", cli.google.is_configured());
    identity::SampleProvider::new(cli.google.clone()).into_service()
}

/// Creates the calendar service from CLI configuration.
pub fn create_calendar_service(cli: &Cli) -> CalendarService {
    log_provider_mode("calendar", cli.google.is_configured());
    calendar::SampleProvider::new().into_service()
}

/// Creates the notetaker service from CLI configuration.
pub fn create_notetaker_service(cli: &Cli) -> NotetakerService {
    log_provider_mode("notetaker", cli.recall.is_configured());
    notetaker::SampleProvider::new().into_service()
}

/// Creates the content service from CLI configuration.
pub fn create_content_service(cli: &Cli) -> ContentService {
    log_provider_mode("content", cli.openai.is_configured());
    content::SampleProvider::new().into_service()
}

/// Creates the social service from CLI configuration.
pub fn create_social_service(cli: &Cli) -> SocialService {
    log_provider_mode("social", cli.social.is_configured());
    social::SampleProvider::new(cli.social.clone()).into_service()
}

/// Logs which provider mode a capability starts in. The decision is made
/// once here and never re-evaluated per request.
fn log_provider_mode(capability: &'static str, configured: bool) {
    if configured {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            capability,
            "Credentials present but no live adapter is bundled, using the sample provider"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            capability,
            "No credentials configured, using the sample provider"
        );
    }
}
