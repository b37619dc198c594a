//! Channel command - print the broadcast message for the shared room

use clap::Args;
use herald_core::{notify, MappingConfig};
use tracing::debug;

use super::PayloadArgs;

/// Print the channel notification for a review-request event
#[derive(Args, Debug)]
pub struct ChannelArgs {
    #[command(flatten)]
    payload: PayloadArgs,
}

impl ChannelArgs {
    /// Execute the channel command
    ///
    /// Prints nothing (and still succeeds) when no requested reviewer
    /// maps to a channel handle.
    pub fn execute(&self, config: &MappingConfig) -> anyhow::Result<()> {
        let event = self.payload.load_event()?;

        match notify::channel_message(config, &event) {
            Some(message) => println!("{}", message),
            None => debug!("no mapped reviewers, nothing to broadcast"),
        }

        Ok(())
    }
}
