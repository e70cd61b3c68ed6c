#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod prelude;
pub mod service;
pub mod utility;
pub mod worker;

pub use crate::handler::{Error, ErrorKind, Result};
