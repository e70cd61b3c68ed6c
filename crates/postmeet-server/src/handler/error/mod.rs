//! Error handling for HTTP handlers.

mod http_error;

pub use http_error::{Error, ErrorKind, Result};
