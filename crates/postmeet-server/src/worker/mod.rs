//! Background workers.

mod bot_poll;

pub use crate::worker::bot_poll::{BotPollWorker, poll_once};
