//! Google OAuth response types.

use postmeet_service::identity::AuthorizationRedirect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// Authorization URL for starting the Google OAuth flow.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AuthorizationUrl {
    /// URL the user agent should visit to grant consent.
    pub auth_url: Url,
    /// Opaque state to echo back on the callback.
    pub state: String,
}

impl AuthorizationUrl {
    /// Creates a new instance of [`AuthorizationUrl`].
    pub fn from_redirect(redirect: AuthorizationRedirect) -> Self {
        Self {
            auth_url: redirect.auth_url,
            state: redirect.state,
        }
    }
}
