//! Herald CLI - reviewer notifications for pull requests
//!
//! Maps requested reviewers from a GitHub pull-request event to Matrix
//! handles and prints notification strings for a shared channel and for
//! direct messages.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use herald_core::MappingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ChannelArgs, DirectArgs};

/// Herald: map pull-request reviewers to Matrix notifications
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the reviewer mapping file
    #[arg(
        long,
        global = true,
        env = "HERALD_MAPPING",
        default_value = ".github/reviewers.toml"
    )]
    mapping: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the channel broadcast message, if anyone is to be notified
    Channel(ChannelArgs),

    /// Print --user arguments for direct messages
    Direct(DirectArgs),

    /// Show the loaded mapping configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = MappingConfig::load_from_file(&cli.mapping)?;

    if cli.verbose {
        tracing::info!(
            mapping = %cli.mapping.display(),
            channel_entries = config.channel.len(),
            direct_message_entries = config.direct_message.len(),
            "Mapping loaded"
        );
    }

    match cli.command {
        Commands::Channel(args) => args.execute(&config)?,
        Commands::Direct(args) => args.execute(&config)?,
        Commands::Config => {
            println!("Herald Configuration");
            println!("====================");
            println!();
            println!("Mapping file: {}", cli.mapping.display());
            println!("  channel entries: {}", config.channel.len());
            println!("  direct_message entries: {}", config.direct_message.len());
        }
    }

    Ok(())
}
