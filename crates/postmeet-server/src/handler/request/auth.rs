//! Request types for Google OAuth handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query parameters delivered to the OAuth callback by Google.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CallbackQuery {
    /// Authorization code issued after user consent.
    pub code: Option<String>,
    /// Opaque state echoed back from the authorization request.
    pub state: Option<String>,
}
