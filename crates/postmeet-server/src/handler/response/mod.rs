//! Response types for HTTP handlers.

mod auth;
mod bots;
mod calendar;
mod errors;
mod meetings;
mod monitors;
mod settings;
mod social;
mod users;

pub use auth::*;
pub use bots::*;
pub use calendar::*;
pub use errors::*;
pub use meetings::*;
pub use monitors::*;
pub use settings::*;
pub use social::*;
pub use users::*;
