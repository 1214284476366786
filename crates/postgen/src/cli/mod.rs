//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the postgen binary.

mod commands;
mod snapshot;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use snapshot::write_snapshot;
pub use tui_handler::launch_tui;
