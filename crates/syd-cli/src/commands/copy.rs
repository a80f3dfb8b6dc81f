//! Copy command implementation
//!
//! Copies a dataset's syft URL, or a Python snippet that loads it, to the
//! system clipboard. When no clipboard is available the text is printed so
//! it can be copied by hand.

use crate::commands::{check, connect};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::query::{DatasetQuery, RecordingObserver};
use crate::snippet::python_snippet;
use colored::Colorize;
use syd_common::Dataset;

/// Run the copy command for the dataset named (or numbered) `key`
pub async fn run(config: &Config, key: &str, code: bool) -> Result<()> {
    let (query, recorder) = connect(config)?;

    with_spinner("Loading datasets...", query.load_all()).await;
    check(&recorder)?;

    let dataset = query
        .snapshot()
        .datasets
        .into_iter()
        .find(|d| d.matches(key))
        .ok_or_else(|| CliError::dataset_not_found(key))?;

    if code {
        copy_snippet(&query, &recorder, &dataset).await;
    } else {
        copy_url(&query, &recorder, &dataset).await;
    }

    Ok(())
}

/// Copy the syft URL, or print it if the clipboard refuses
pub(crate) async fn copy_url(query: &DatasetQuery, recorder: &RecordingObserver, dataset: &Dataset) {
    if query.copy_resource_locator(&dataset.syft_url).await {
        println!(
            "{} Copied syft URL to clipboard: {}",
            "✓".green(),
            dataset.syft_url.cyan()
        );
        return;
    }

    report_failure(recorder);
    println!("Syft URL: {}", dataset.syft_url.cyan());
}

/// Copy the Python snippet, or print it if the clipboard refuses
pub(crate) async fn copy_snippet(
    query: &DatasetQuery,
    recorder: &RecordingObserver,
    dataset: &Dataset,
) {
    if query.copy_snippet(dataset).await {
        println!(
            "{} Copied Python snippet for {} to clipboard",
            "✓".green(),
            dataset.name.cyan()
        );
        return;
    }

    report_failure(recorder);
    println!("Copy it manually:");
    println!();
    println!("{}", python_snippet(dataset));
}

fn report_failure(recorder: &RecordingObserver) {
    for err in recorder.take() {
        eprintln!("{} {}", "✗".red(), err);
    }
}
