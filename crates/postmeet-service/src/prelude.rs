//! Commonly used items from postmeet-service.
//!
//! This prelude module exports the most commonly used types, traits, and services
//! to simplify imports in consuming code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use postmeet_service::prelude::*;
//! ```

// Calendar types and traits
pub use crate::calendar::{
    CalendarEvent, CalendarProvider, CalendarService, EventAttendee, EventsQuery, MeetingPlatform,
};
// Provider credential configuration
pub use crate::config::{GoogleConfig, OpenAiConfig, RecallConfig, SocialConfig};
// Content generation types and traits
pub use crate::content::{
    ContentProvider, ContentService, EmailPrompt, FollowUpEmail, GeneratedPost, PostPrompt,
};
// Common types
pub use crate::health::{ServiceHealth, ServiceStatus};
// Identity types and traits
pub use crate::identity::{
    AccountSync, AuthorizationRedirect, AuthorizedSession, CodeExchange, IdentityProvider,
    IdentityService, LinkedAccount, UserProfile,
};
// Notetaker types and traits
pub use crate::notetaker::{
    BotRecording, BotStatus, NotetakerProvider, NotetakerService, ScheduleBot, ScheduledBot,
};
// Social publishing types and traits
pub use crate::social::{
    PublishPost, PublishReceipt, SocialAccount, SocialPlatform, SocialProvider, SocialService,
    SocialSession,
};
pub use crate::{BoxedError, Error, ErrorKind, Result};
