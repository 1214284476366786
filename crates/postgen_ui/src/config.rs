//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (`postgen.toml` shipped with this crate)
//! - `~/.config/postgen/postgen.toml`
//! - `./postgen.toml`
//! - `POSTGEN_<SECTION>__<KEY>` environment variables

use crate::Tab;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use postgen_error::{ConfigError, PostgenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../postgen.toml");

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiConfig {
    /// Server root, e.g. `http://localhost:5000`
    base_url: String,
}

impl ApiConfig {
    /// Settings for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UiConfig {
    /// Seconds an alert stays visible
    alert_ttl_secs: u64,
    /// Terminal input poll interval in milliseconds
    tick_rate_ms: u64,
    /// Tab shown after start-up
    initial_tab: Tab,
}

impl UiConfig {
    /// Alert lifetime.
    pub fn alert_ttl(&self) -> Duration {
        Duration::from_secs(self.alert_ttl_secs)
    }

    /// Input poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Where the theme preference is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PreferencesConfig {
    /// Preferences file; platform config directory when unset
    #[serde(default)]
    path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    level: String,
    /// Log file; platform data directory when unset
    #[serde(default)]
    file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Complete postgen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PostgenConfig {
    /// `[api]`
    api: ApiConfig,
    /// `[ui]`
    ui: UiConfig,
    /// `[preferences]`
    #[serde(default)]
    preferences: PreferencesConfig,
    /// `[logging]`
    #[serde(default)]
    logging: LoggingConfig,
}

impl PostgenConfig {
    /// Load configuration from every source in precedence order.
    #[instrument]
    pub fn load() -> PostgenResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("postgen").join("postgen.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("postgen").required(false))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by a single file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PostgenResult<Self> {
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Override the backend root, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api = ApiConfig::new(base_url);
        self
    }

    fn environment() -> Environment {
        Environment::with_prefix("POSTGEN")
            .prefix_separator("_")
            .separator("__")
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> PostgenResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }
}

impl Default for PostgenConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::new("http://localhost:5000"),
            ui: UiConfig {
                alert_ttl_secs: 5,
                tick_rate_ms: 250,
                initial_tab: Tab::Generate,
            },
            preferences: PreferencesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
