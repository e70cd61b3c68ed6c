//! Request types for HTTP handlers.

mod auth;
mod meetings;
mod paths;
mod settings;

pub use auth::*;
pub use meetings::*;
pub use paths::*;
pub use settings::*;
