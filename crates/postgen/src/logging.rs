//! Tracing subscriber setup.

use postgen_ui::LoggingConfig;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `--verbose` or the configured level.
fn filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(config.level())
        }
    })
}

fn log_path(config: &LoggingConfig) -> PathBuf {
    config.file().clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("postgen")
            .join("postgen.log")
    })
}

/// Log to a file, appending.
pub fn init_file(config: &LoggingConfig, verbose: bool) -> std::io::Result<()> {
    let path = log_path(config);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config, verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!(path = %path.display(), "Logging to file");
    Ok(())
}

/// Log to stderr, keeping stdout for command output.
pub fn init_stderr(config: &LoggingConfig, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
