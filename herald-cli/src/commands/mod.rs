//! CLI command implementations

pub mod channel;
pub mod direct;

pub use channel::ChannelArgs;
pub use direct::DirectArgs;

use std::path::PathBuf;

use clap::Args;
use herald_core::ReviewEvent;

/// Arguments shared by the notification subcommands
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Path to the event payload JSON (GitHub Actions sets GITHUB_EVENT_PATH)
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub payload: PathBuf,
}

impl PayloadArgs {
    /// Read and deserialize the event payload
    pub fn load_event(&self) -> anyhow::Result<ReviewEvent> {
        let contents = std::fs::read_to_string(&self.payload).map_err(|e| {
            anyhow::anyhow!("failed to read payload {}: {}", self.payload.display(), e)
        })?;
        Ok(ReviewEvent::from_json(&contents)?)
    }
}
