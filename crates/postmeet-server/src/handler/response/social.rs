//! Social platform response types.

use postmeet_service::social::SocialAccount;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// Response for listing connected social accounts.
pub type SocialAccounts = Vec<SocialAccount>;

/// Authorization URL for connecting a social platform.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ConnectUrl {
    /// URL the user agent should visit to grant access.
    pub auth_url: Url,
}

impl ConnectUrl {
    /// Creates a new instance of [`ConnectUrl`].
    pub fn new(auth_url: Url) -> Self {
        Self { auth_url }
    }
}
