//! syd - main entry point

use clap::Parser;
use std::process;
use syd_cli::{Cli, Commands, Config, ConfigCommand};
use syd_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use tracing::error;

#[tokio::main]
async fn main() {
    // Settings from a local .env apply before flags are parsed
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    };

    let level = if config.is_verbose() {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let defaults = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("syd")
        .build();

    // The CLI works without logging, so setup failures are not fatal
    let log_config = LogConfig::from_env_with(defaults.clone()).unwrap_or(defaults);
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli, &config).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &Config) -> syd_cli::Result<()> {
    let Some(ref command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::List { format } => syd_cli::commands::list::list(config, format).await,

        Commands::Search { query, format } => {
            syd_cli::commands::list::search(config, &query.join(" "), format).await
        },

        Commands::Filter { email, format } => {
            syd_cli::commands::list::filter(config, email, format).await
        },

        Commands::Emails => syd_cli::commands::owners::emails(config).await,

        Commands::Names => syd_cli::commands::owners::names(config).await,

        Commands::Copy { dataset, code } => {
            syd_cli::commands::copy::run(config, dataset, *code).await
        },

        Commands::Browse => syd_cli::commands::browse::run(config).await,

        Commands::Status => syd_cli::commands::status::run(config).await,

        Commands::Config { command } => match command {
            ConfigCommand::Get { key } => syd_cli::commands::config::get(config, key),
            ConfigCommand::Set { key, value } => syd_cli::commands::config::set(key, value),
            ConfigCommand::Show => syd_cli::commands::config::show(config),
        },
    }
}
