//! Direct command - print per-recipient arguments for matrix-commander

use clap::Args;
use herald_core::{notify, MappingConfig};
use tracing::debug;

use super::PayloadArgs;

/// Print `--user "handle"` arguments for direct-message delivery
#[derive(Args, Debug)]
pub struct DirectArgs {
    #[command(flatten)]
    payload: PayloadArgs,
}

impl DirectArgs {
    /// Execute the direct command
    ///
    /// Prints nothing (and still succeeds) when no requested reviewer
    /// maps to a direct-message handle.
    pub fn execute(&self, config: &MappingConfig) -> anyhow::Result<()> {
        let event = self.payload.load_event()?;

        let args = notify::direct_message_arguments(config, &event);
        if args.is_empty() {
            debug!("no mapped reviewers, nothing to send");
        } else {
            println!("{}", args);
        }

        Ok(())
    }
}
