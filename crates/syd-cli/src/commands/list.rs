//! `list`, `search` and `filter` commands
//!
//! Each runs one query operation, then renders whatever the query module
//! holds once it settles.

use crate::api::ApiClient;
use crate::commands::{check, connect, render};
use crate::config::Config;
use crate::error::Result;
use crate::progress::with_spinner;
use crate::query::EmailFilter;
use colored::Colorize;
use tracing::{debug, warn};

/// List every dataset
pub async fn list(config: &Config, format: &str) -> Result<()> {
    let (query, recorder) = connect(config)?;

    with_spinner("Loading datasets...", query.load_all()).await;
    check(&recorder)?;

    render::print_datasets(&query.snapshot(), format)
}

/// Search datasets by name or email
///
/// A blank `term` lists everything.
pub async fn search(config: &Config, term: &str, format: &str) -> Result<()> {
    debug!(term = %term, format = %format, "Starting search");

    let (query, recorder) = connect(config)?;

    with_spinner("Searching datasets...", query.search(term)).await;
    check(&recorder)?;

    let state = query.snapshot();
    render::print_datasets(&state, format)?;

    if state.datasets.is_empty() && format == "table" && !term.trim().is_empty() {
        suggest_names(config, term).await;
    }

    Ok(())
}

/// Show datasets owned by one email, or all of them for `"all"`
pub async fn filter(config: &Config, email: &str, format: &str) -> Result<()> {
    let filter = EmailFilter::from(email);
    debug!(filter = %filter, "Filtering by email");

    let (query, recorder) = connect(config)?;

    with_spinner("Filtering datasets...", query.filter_by_email(filter)).await;
    check(&recorder)?;

    render::print_datasets(&query.snapshot(), format)
}

/// Offer dataset names close to a search term that found nothing
async fn suggest_names(config: &Config, term: &str) {
    let names = match ApiClient::new(config.server_url()) {
        Ok(client) => client.unique_names().await,
        Err(e) => {
            warn!(error = %e, "Could not build client for suggestions");
            return;
        },
    };

    let names = match names {
        Ok(names) => names,
        Err(e) => {
            warn!(error = %e, "Could not fetch dataset names for suggestions");
            return;
        },
    };

    let suggestions = find_similar_names(term, &names);
    if suggestions.is_empty() {
        return;
    }

    println!();
    println!("{}", "Did you mean:".bold());
    for suggestion in suggestions {
        println!(
            "  {} {}  ({})",
            "•".blue(),
            suggestion,
            format!("syd search {}", suggestion).cyan()
        );
    }
}

/// Names within edit distance 3 of `term`, closest first, at most three
fn find_similar_names(term: &str, names: &[String]) -> Vec<String> {
    let term = term.trim().to_lowercase();

    let mut scored: Vec<(usize, &String)> = names
        .iter()
        .map(|name| (strsim::levenshtein(&term, &name.to_lowercase()), name))
        .filter(|(distance, _)| *distance > 0 && *distance <= 3)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
