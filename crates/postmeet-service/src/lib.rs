#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod calendar;
pub mod config;
pub mod content;
mod error;
mod health;
pub mod identity;
pub mod notetaker;
#[doc(hidden)]
pub mod prelude;
pub mod social;

pub use crate::calendar::{CalendarProvider, CalendarService};
pub use crate::config::{GoogleConfig, OpenAiConfig, RecallConfig, SocialConfig};
pub use crate::content::{ContentProvider, ContentService};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::health::{ServiceHealth, ServiceStatus};
pub use crate::identity::{IdentityProvider, IdentityService};
pub use crate::notetaker::{NotetakerProvider, NotetakerService};
pub use crate::social::{SocialPlatform, SocialProvider, SocialService};
