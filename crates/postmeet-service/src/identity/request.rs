//! Request types for identity operations.

use serde::{Deserialize, Serialize};

/// An OAuth authorization code ready to be exchanged for tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CodeExchange {
    /// Authorization code returned by the OAuth consent screen.
    pub code: String,
    /// Opaque state the flow was started with.
    pub state: Option<String>,
}

impl CodeExchange {
    /// Create a new code exchange request.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            state: None,
        }
    }

    /// Attach the state the flow was started with.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}
