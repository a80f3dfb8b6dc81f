//! Terminal rendering of dataset lists
//!
//! Shared by `list`, `search`, `filter` and `browse`.

use crate::error::Result;
use crate::query::QueryState;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use serde::Serialize;
use syd_common::format::{domain_from_email, relative_age_since, AgeStyle};
use syd_common::Dataset;

/// JSON shape printed by `--format json`
#[derive(Debug, Serialize)]
struct DatasetListing<'a> {
    total_count: u64,
    search_term: &'a str,
    selected_email: String,
    datasets: &'a [Dataset],
}

/// Print the datasets currently held in `state`
pub fn print_datasets(state: &QueryState, format: &str) -> Result<()> {
    match format {
        "compact" => print_compact(state),
        "json" => print_json(state),
        _ => print_table(state),
    }
}

/// One tab-separated line per dataset: name, owner, syft URL
fn print_compact(state: &QueryState) -> Result<()> {
    for dataset in &state.datasets {
        println!("{}\t{}\t{}", dataset.name, dataset.email, dataset.syft_url);
    }
    Ok(())
}

fn print_json(state: &QueryState) -> Result<()> {
    let listing = DatasetListing {
        total_count: state.total_count,
        search_term: &state.search_term,
        selected_email: state.selected_email.to_string(),
        datasets: &state.datasets,
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn print_table(state: &QueryState) -> Result<()> {
    if state.datasets.is_empty() {
        print_empty(state);
        return Ok(());
    }

    println!();
    println!("{}", count_line(state.datasets.len()).bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Name", "Type", "Owner", "Size", "Updated", "Tags"]);

    for dataset in &state.datasets {
        table.add_row(vec![
            truncate_string(&dataset.name, 40),
            dataset.kind_label(),
            dataset.email.clone(),
            size_label(dataset),
            updated_label(dataset),
            tags_label(dataset),
        ]);
    }

    println!("{}", table);
    println!();

    Ok(())
}

/// "1 dataset found" / "N datasets found"
pub fn count_line(count: usize) -> String {
    format!(
        "{} dataset{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Explain an empty result, pointing at the likely cause
pub fn print_empty(state: &QueryState) {
    println!("{}", "No datasets found".bold().yellow());
    println!();

    if state.is_filtered() {
        println!("Try adjusting your search or filter criteria");
        println!(
            "  {} Clear filters: {}",
            "•".blue(),
            "syd list".cyan()
        );
    } else {
        println!("Make sure SyftBox is running and you have access to datasites");
        println!(
            "  {} Check the server: {}",
            "•".blue(),
            "syd status".cyan()
        );
    }
}

/// Detailed view of a single dataset
pub fn print_details(dataset: &Dataset) {
    println!();
    println!("{}", "═".repeat(60).blue());
    println!("{}", format!("  {}", dataset.name).bold());
    println!("{}", "═".repeat(60).blue());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.add_row(vec!["ID".to_string(), dataset.id.to_string()]);
    table.add_row(vec!["Name".to_string(), dataset.name.clone()]);
    table.add_row(vec!["Type".to_string(), dataset.kind_label()]);
    table.add_row(vec!["Owner".to_string(), dataset.email.clone()]);
    table.add_row(vec![
        "Datasite".to_string(),
        domain_from_email(&dataset.email).to_string(),
    ]);
    table.add_row(vec!["Size".to_string(), size_label(dataset)]);
    if let Some(age) = age_of(dataset.created_at.as_deref()) {
        table.add_row(vec!["Created".to_string(), age]);
    }
    table.add_row(vec!["Updated".to_string(), updated_label(dataset)]);
    table.add_row(vec!["Tags".to_string(), tags_label(dataset)]);
    if !dataset.description.is_empty() {
        table.add_row(vec!["Description".to_string(), dataset.description.clone()]);
    }

    println!("{}", table);
    println!();
    println!("Syft URL: {}", dataset.syft_url.cyan());
    println!();
}

fn age_of(timestamp: Option<&str>) -> Option<String> {
    timestamp.and_then(|ts| relative_age_since(ts, AgeStyle::Ago).ok())
}

fn updated_label(dataset: &Dataset) -> String {
    age_of(dataset.updated_at.as_deref()).unwrap_or_else(|| "-".to_string())
}

fn size_label(dataset: &Dataset) -> String {
    if dataset.size.is_empty() {
        "-".to_string()
    } else {
        dataset.size.clone()
    }
}

fn tags_label(dataset: &Dataset) -> String {
    if dataset.tags.is_empty() {
        "-".to_string()
    } else {
        dataset.tags.join(", ")
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
