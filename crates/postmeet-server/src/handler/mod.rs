//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use aide::openapi::OpenApi;
//! use axum::Router;
//! use postmeet_server::handler;
//! use postmeet_server::service::{ServerSettings, ServiceState};
//! use postmeet_service::{calendar, content, identity, notetaker, social};
//!
//! let state = ServiceState::new(
//!     identity::SampleProvider::default().into_service(),
//!     calendar::SampleProvider::new().into_service(),
//!     notetaker::SampleProvider::new().into_service(),
//!     content::SampleProvider::new().into_service(),
//!     social::SampleProvider::default().into_service(),
//!     ServerSettings::default(),
//! );
//!
//! let mut api = OpenApi::default();
//! let app: Router<()> = handler::routes().finish_api(&mut api).with_state(state);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod auth;
mod bots;
mod calendar;
mod error;
mod meetings;
mod monitors;
mod request;
mod response;
mod settings;
mod social;
mod users;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(monitors::routes())
        .merge(auth::routes())
        .merge(users::routes())
        .merge(calendar::routes())
        .merge(meetings::routes())
        .merge(bots::routes())
        .merge(social::routes())
        .merge(settings::routes())
        .fallback(handler)
}

#[cfg(test)]
mod test {
    use aide::axum::ApiRouter;
    use aide::openapi::OpenApi;
    use axum_test::TestServer;
    use postmeet_service::{calendar, content, identity, notetaker, social};

    use crate::handler::routes;
    use crate::service::{ServerSettings, ServiceState};

    /// Returns application state backed by the sample providers.
    pub fn create_test_state() -> ServiceState {
        ServiceState::new(
            identity::SampleProvider::default().into_service(),
            calendar::SampleProvider::new().into_service(),
            notetaker::SampleProvider::new().into_service(),
            content::SampleProvider::new().into_service(),
            social::SampleProvider::default().into_service(),
            ServerSettings::default(),
        )
    }

    /// Returns a new [`TestServer`] with the given router.
    pub async fn create_test_server_with_router(
        router: ApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        create_test_server_with_state(router, create_test_state()).await
    }

    /// Returns a new [`TestServer`] with the given router and state.
    pub async fn create_test_server_with_state(
        router: ApiRouter<ServiceState>,
        state: ServiceState,
    ) -> anyhow::Result<TestServer> {
        let mut api = OpenApi::default();
        let app = router.finish_api(&mut api).with_state(state);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the default router and state.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        create_test_server_with_state(routes(), create_test_state()).await
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }
}
