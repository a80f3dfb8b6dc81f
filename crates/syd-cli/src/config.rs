//! Configuration management for the Syft Datasets CLI
//!
//! Settings resolve in this order, later sources winning: built-in
//! defaults, the TOML config file, the `SYD_SERVER_URL` environment
//! variable, and finally `--server-url` on the command line.

use crate::error::{CliError, Result};
use crate::query::QueryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Backend URL used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8001";

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "SYD_SERVER_URL";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "SYD_CONFIG_PATH";

/// Keys accepted by `syd config get/set`
pub const CONFIG_KEYS: &[&str] = &["server_url", "verbose"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Datasets backend URL
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            verbose: false,
        }
    }
}

impl Config {
    /// Location of the config file
    ///
    /// `$SYD_CONFIG_PATH` if set, otherwise `<config dir>/syd/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("syd").join("config.toml"))
            .ok_or_else(|| CliError::config("Could not determine config directory"))
    }

    /// Load defaults, then the config file, then environment variables
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(&Self::path()?)?;
        config.apply_env();
        Ok(config)
    }

    /// Read a config file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write the config file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Overlay environment variables
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                self.server_url = url;
            }
        }
    }

    /// Read a single setting by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "server_url" => Ok(self.server_url.clone()),
            "verbose" => Ok(self.verbose.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Change a single setting by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server_url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(CliError::config(format!(
                        "server_url must start with http:// or https://, got '{}'",
                        value
                    )));
                }
                self.server_url = value.to_string();
            },
            "verbose" => {
                self.verbose = value.parse().map_err(|_| {
                    CliError::config(format!("verbose must be true or false, got '{}'", value))
                })?;
            },
            _ => return Err(unknown_key(key)),
        }

        Ok(())
    }

    /// Get the server URL
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Settings for the query module
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig::new(self.server_url.clone())
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::config(format!(
        "Unknown config key: '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
