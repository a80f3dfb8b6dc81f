//! `emails` and `names` commands

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::progress::with_spinner;
use colored::Colorize;

/// Print the distinct dataset owner emails
pub async fn emails(config: &Config) -> Result<()> {
    let client = ApiClient::new(config.server_url())?;
    let emails = with_spinner("Loading owners...", client.unique_emails()).await?;

    print_values(&emails, "No dataset owners found");
    Ok(())
}

/// Print the distinct dataset names
pub async fn names(config: &Config) -> Result<()> {
    let client = ApiClient::new(config.server_url())?;
    let names = with_spinner("Loading dataset names...", client.unique_names()).await?;

    print_values(&names, "No dataset names found");
    Ok(())
}

fn print_values(values: &[String], empty_message: &str) {
    if values.is_empty() {
        eprintln!("{}", empty_message.yellow());
        return;
    }

    for value in values {
        println!("{}", value);
    }
}
