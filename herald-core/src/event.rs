//! GitHub pull-request event payload
//!
//! Deserializes the relevant slice of the webhook payload GitHub Actions
//! writes to `$GITHUB_EVENT_PATH`. Everything the notifier does not need
//! is ignored, and every field it does need is optional or defaulted so
//! that a sparse payload yields "nothing to send" rather than an error.

use serde::Deserialize;

use crate::Result;

/// A `pull_request` webhook event
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEvent {
    /// The pull request the event refers to, when present
    pub pull_request: Option<PullRequest>,
}

/// The pull request slice of the payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// Browser URL of the pull request
    pub html_url: String,

    /// Reviewers requested on the pull request, in request order
    #[serde(default)]
    pub requested_reviewers: Vec<Reviewer>,
}

/// A requested reviewer entry
#[derive(Debug, Clone, Deserialize)]
pub struct Reviewer {
    /// GitHub login; team reviewers carry no login and are skipped
    pub login: Option<String>,
}

impl ReviewEvent {
    /// Deserialize an event from raw payload JSON
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
