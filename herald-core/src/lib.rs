//! Herald Core - Core library for Herald reviewer notifications
//!
//! This crate turns a GitHub pull-request review-request event into
//! notification strings for Matrix: one optional broadcast message for a
//! shared channel, and a list of `--user` arguments for direct messages.

pub mod config;
pub mod error;
pub mod event;
pub mod notify;

pub use config::MappingConfig;
pub use error::{Error, Result};
pub use event::{PullRequest, Reviewer, ReviewEvent};
pub use notify::Notification;
