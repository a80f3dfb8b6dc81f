//! Status command implementation

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::progress::with_spinner;
use colored::Colorize;
use syd_common::format::{relative_age_since, AgeStyle};
use tracing::debug;

/// Check that the datasets server answers its health endpoint
pub async fn run(config: &Config) -> Result<()> {
    let client = ApiClient::new(config.server_url())?;
    debug!(server_url = %client.base_url(), "Checking server health");

    let health = with_spinner("Contacting server...", client.health_check()).await?;

    println!("{} Server is up", "✓".green());
    println!("  Server:  {}", client.base_url().cyan());
    println!("  Status:  {}", health.status);
    if !health.message.is_empty() {
        println!("  Message: {}", health.message);
    }
    match relative_age_since(&health.timestamp, AgeStyle::Ago) {
        Ok(age) => println!("  Checked: {} ({})", health.timestamp, age),
        Err(_) => println!("  Checked: {}", health.timestamp),
    }

    Ok(())
}
