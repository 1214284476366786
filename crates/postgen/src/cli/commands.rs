//! CLI command definitions.

use clap::{Parser, Subcommand};
use postgen_ui::Tab;
use std::path::PathBuf;

/// Postgen - generate, review and publish social-media posts about your events
#[derive(Parser, Debug)]
#[command(name = "postgen")]
#[command(about = "Generate, review and publish social-media posts about your events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Post generator server, overrides `api.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Load the page once and print it as HTML
    Snapshot {
        /// Tab to render (`generate` or `posts`)
        #[arg(long, default_value = "generate")]
        tab: Tab,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
