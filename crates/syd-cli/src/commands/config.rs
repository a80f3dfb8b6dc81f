//! `syd config` command implementation
//!
//! Reads and writes the TOML config file.

use crate::config::{Config, CONFIG_PATH_ENV, SERVER_URL_ENV};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Print one effective setting
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

/// Change one setting in the config file
pub fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    set_in(&path, key, value)?;

    println!(
        "{} Set {} = {} in {}",
        "✓".green(),
        key.cyan(),
        value,
        path.display()
    );
    Ok(())
}

/// Update `key` in the file at `path`, leaving other settings untouched
///
/// Only the file is read, so environment overrides are never persisted.
fn set_in(path: &Path, key: &str, value: &str) -> Result<Config> {
    let mut config = Config::from_file(path)?;
    config.set(key, value)?;
    config.save(path)?;
    Ok(config)
}

/// Show the effective configuration
pub fn show(config: &Config) -> Result<()> {
    let path = Config::path()?;

    println!("{}", "syd Configuration:".cyan().bold());
    println!();
    println!("{:<15} {}", "server_url:", config.server_url());
    println!("{:<15} {}", "verbose:", config.is_verbose());
    println!();
    println!("{:<15} {}", "config file:", path.display());
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<16} - Server URL", SERVER_URL_ENV);
    println!("  {:<16} - Config file location", CONFIG_PATH_ENV);

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SERVER_URL;
    use tempfile::TempDir;

    #[test]
    fn test_set_in_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("syd").join("config.toml");

        let config = set_in(&path, "server_url", "http://datasets.local:8001").unwrap();
        assert_eq!(config.server_url(), "http://datasets.local:8001");
        assert!(path.exists());

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_set_in_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        set_in(&path, "verbose", "true").unwrap();
        let config = set_in(&path, "server_url", "https://datasets.example.org").unwrap();

        assert!(config.is_verbose());
        assert_eq!(config.server_url(), "https://datasets.example.org");
    }

    #[test]
    fn test_set_in_rejects_invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(set_in(&path, "server_url", "ftp://nope").is_err());
        assert!(set_in(&path, "colour", "blue").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_get_known_key() {
        assert!(get(&Config::default(), "server_url").is_ok());
        assert!(get(&Config::default(), "cache_dir").is_err());
        assert_eq!(Config::default().server_url(), DEFAULT_SERVER_URL);
    }
}
