//! Google identity abstractions for OAuth sessions and linked accounts.
//!
//! This module provides the trait and types for the Google side of the
//! platform: building authorization URLs, exchanging OAuth codes for
//! sessions, and managing the Google accounts linked to a user.
//!
//! # Example
//!
//! ```rust,ignore
//! use postmeet_service::identity::{IdentityService, SampleProvider};
//!
//! let service = SampleProvider::default().into_service();
//! let redirect = service.authorization_url().await?;
//! let session = service.exchange_code(CodeExchange::new("4/0AX4code")).await?;
//! ```

mod sample;
mod service;

pub mod request;
pub mod response;

pub use request::CodeExchange;
pub use response::{
    AccountSync, AuthorizationRedirect, AuthorizedSession, LinkedAccount, UserProfile,
};
pub use sample::SampleProvider;
pub use service::IdentityService;

use crate::health::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for identity operations.
pub const TRACING_TARGET: &str = "postmeet_service::identity";

/// Trait for Google identity operations.
///
/// Implementations cover the OAuth authorization flow and the linked
/// account inventory backing the user endpoints. The sample provider
/// answers from deterministic data; a live adapter talks to the Google
/// OAuth and Calendar APIs.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Build the URL the user is sent to for granting calendar access.
    async fn authorization_url(&self) -> Result<AuthorizationRedirect>;

    /// Exchange an OAuth authorization code for an authorized session.
    async fn exchange_code(&self, request: &CodeExchange) -> Result<AuthorizedSession>;

    /// Fetch the profile of the authorized user.
    async fn profile(&self) -> Result<UserProfile>;

    /// List the Google accounts linked to the user.
    async fn linked_accounts(&self) -> Result<Vec<LinkedAccount>>;

    /// Unlink a Google account.
    ///
    /// Returns a not found error when no account with the given
    /// identifier is linked.
    async fn unlink_account(&self, account_id: i64) -> Result<()>;

    /// Re-sync calendar data for a linked Google account.
    async fn sync_account(&self, account_id: i64) -> Result<AccountSync>;

    /// Check the health of the identity provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
