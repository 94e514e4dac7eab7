//! Configuration management for Thoughtbox.
//!
//! Loads configuration from ${THOUGHTBOX_HOME}/config.toml with sensible defaults.
//! Precedence: CLI flags > environment > config file > defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding `collector.url`.
pub const COLLECTOR_URL_ENV: &str = "THOUGHTBOX_COLLECTOR_URL";

pub mod paths {
    //! Path resolution for Thoughtbox configuration and log directories.
    //!
    //! THOUGHTBOX_HOME resolution order:
    //! 1. THOUGHTBOX_HOME environment variable (if set)
    //! 2. ~/.config/thoughtbox (default)

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "THOUGHTBOX_HOME";

    /// Returns the Thoughtbox home directory.
    pub fn thoughtbox_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("thoughtbox")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        thoughtbox_home().join("config.toml")
    }

    /// Returns the directory that receives TUI log files.
    pub fn logs_dir() -> PathBuf {
        thoughtbox_home().join("logs")
    }
}

/// Collector endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Endpoint receiving the JSON POST.
    pub url: String,

    /// Response bound in seconds (0 disables)
    pub timeout_secs: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            url: CollectorConfig::DEFAULT_URL.to_string(),
            timeout_secs: CollectorConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CollectorConfig {
    pub const DEFAULT_URL: &str = "http://localhost:4000/api/complaints";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Parses the configured URL.
    ///
    /// # Errors
    /// Returns an error if the URL is malformed or not http(s).
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("Invalid collector URL: {}", self.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Collector URL must use http or https: {}", self.url);
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

/// Presentation settings for the interactive form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tallest a text area may grow, as a percentage of terminal height.
    pub max_field_height_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_field_height_percent: 25,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub collector: CollectorConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from the default config path and applies
    /// environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(COLLECTOR_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.collector.url = url.trim().to_string();
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Commented template written by `Config::init`.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}
