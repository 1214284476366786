//! Postgen CLI binary.
//!
//! - Launch the terminal UI against a post generator server
//! - Render the page as static HTML

use clap::Parser;
use postgen_ui::PostgenConfig;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, write_snapshot};

    // Load .env before anything reads POSTGEN_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PostgenConfig::from_file(path)?,
        None => PostgenConfig::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    let command = cli.command.unwrap_or(Commands::Tui);

    // The terminal UI owns stdout, so its logs go to a file
    match command {
        Commands::Tui => logging::init_file(config.logging(), cli.verbose)?,
        Commands::Snapshot { .. } => logging::init_stderr(config.logging(), cli.verbose),
    }

    tracing::debug!(base_url = %config.api().base_url(), "Configuration loaded");

    match command {
        Commands::Tui => {
            launch_tui(&config).await?;
        }
        Commands::Snapshot { tab, out } => {
            write_snapshot(&config, tab, out.as_deref()).await?;
        }
    }

    Ok(())
}
