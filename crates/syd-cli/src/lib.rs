//! Syft Datasets CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Browse, search and filter the datasets published in the SyftBox
//! ecosystem from a terminal.
//!
//! # Overview
//!
//! - **Query module** ([`query::DatasetQuery`]): the dataset list, search
//!   term, email filter and loading flag, kept in step with the backend
//! - **API client** ([`api::ApiClient`]): typed access to the backend's
//!   JSON endpoints
//! - **Clipboard** ([`clipboard`]): copy syft URLs and Python snippets
//! - **Commands**: `syd list`, `syd search`, `syd filter`, `syd browse`,
//!   `syd copy`, `syd emails`, `syd names`, `syd status`, `syd config`

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;
pub mod query;
pub mod snippet;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use query::{DatasetQuery, EmailFilter, QueryConfig, QueryState};

use clap::{Parser, Subcommand};

/// syd - browse SyftBox datasets
#[derive(Parser, Debug)]
#[command(name = "syd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Datasets server URL (overrides the config file)
    #[arg(long, env = "SYD_SERVER_URL", global = true)]
    pub server_url: Option<String>,

    /// Print the full CLI reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Effective configuration: config file and environment, then flags
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load()?;

        if let Some(ref url) = self.server_url {
            config.server_url = url.clone();
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every dataset
    List {
        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "compact", "json"])]
        format: String,
    },

    /// Search datasets by name or email
    Search {
        /// Search terms (joined with spaces); empty lists everything
        query: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "compact", "json"])]
        format: String,
    },

    /// Show datasets owned by one email ("all" for no filter)
    Filter {
        /// Owner email, or "all"
        email: String,

        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "compact", "json"])]
        format: String,
    },

    /// List distinct dataset owner emails
    Emails,

    /// List distinct dataset names
    Names,

    /// Copy a dataset's syft URL (or Python snippet) to the clipboard
    Copy {
        /// Dataset name or id
        dataset: String,

        /// Copy a Python snippet instead of the URL
        #[arg(short, long)]
        code: bool,
    },

    /// Browse datasets interactively
    Browse,

    /// Check that the datasets server is reachable
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show all configuration
    Show,
}
