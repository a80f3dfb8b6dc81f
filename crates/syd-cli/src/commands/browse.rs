//! Interactive dataset browser
//!
//! A prompt loop over the query module: pick a dataset to act on, or
//! change the search term or email filter and see the list refresh.

use crate::commands::{connect, copy, render};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::query::{DatasetQuery, EmailFilter, QueryState, RecordingObserver};
use colored::Colorize;
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::io::{self, IsTerminal};
use syd_common::Dataset;

/// Entries of the main browse menu
enum BrowseItem {
    Dataset(usize, String),
    Search,
    FilterByEmail,
    ClearFilters,
    Exit,
}

impl fmt::Display for BrowseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseItem::Dataset(_, label) => write!(f, "{}", label),
            BrowseItem::Search => write!(f, "{}", "🔍 Search".yellow()),
            BrowseItem::FilterByEmail => write!(f, "{}", "✉ Filter by email".yellow()),
            BrowseItem::ClearFilters => write!(f, "{}", "↺ Clear filters".yellow()),
            BrowseItem::Exit => write!(f, "{}", "✕ Exit".red()),
        }
    }
}

/// Actions available on a selected dataset
#[derive(Clone, Copy)]
enum DatasetAction {
    Details,
    CopyUrl,
    CopyCode,
    Back,
}

impl DatasetAction {
    const ALL: [DatasetAction; 4] = [
        DatasetAction::Details,
        DatasetAction::CopyUrl,
        DatasetAction::CopyCode,
        DatasetAction::Back,
    ];
}

impl fmt::Display for DatasetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DatasetAction::Details => "📋 View details",
            DatasetAction::CopyUrl => "🔗 Copy syft URL",
            DatasetAction::CopyCode => "📝 Copy Python snippet",
            DatasetAction::Back => "← Back to datasets",
        };
        f.write_str(label)
    }
}

/// Run the interactive browser
pub async fn run(config: &Config) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(CliError::config(
            "browse needs an interactive terminal; use 'syd list' instead",
        ));
    }

    let (query, recorder) = connect(config)?;
    with_spinner("Loading datasets...", query.load_all()).await;
    report_errors(&recorder);

    loop {
        let state = query.snapshot();
        print_summary(&state);

        let mut items: Vec<BrowseItem> = state
            .datasets
            .iter()
            .enumerate()
            .map(|(i, d)| BrowseItem::Dataset(i, dataset_label(d)))
            .collect();
        items.push(BrowseItem::Search);
        items.push(BrowseItem::FilterByEmail);
        if state.is_filtered() {
            items.push(BrowseItem::ClearFilters);
        }
        items.push(BrowseItem::Exit);

        let selection = Select::new("Select a dataset:", items)
            .with_page_size(15)
            .prompt();

        match selection {
            Ok(BrowseItem::Dataset(index, _)) => {
                if let Some(dataset) = state.datasets.get(index) {
                    dataset_actions(&query, &recorder, dataset).await?;
                }
            },
            Ok(BrowseItem::Search) => {
                let term = match Text::new("Search by name or email:")
                    .with_initial_value(&state.search_term)
                    .prompt()
                {
                    Ok(term) => term,
                    Err(e) if is_cancel(&e) => continue,
                    Err(e) => return Err(e.into()),
                };
                with_spinner("Searching datasets...", query.search(&term)).await;
                report_errors(&recorder);
            },
            Ok(BrowseItem::FilterByEmail) => {
                let Some(filter) = choose_email(&state)? else {
                    continue;
                };
                with_spinner("Filtering datasets...", query.filter_by_email(filter)).await;
                report_errors(&recorder);
            },
            Ok(BrowseItem::ClearFilters) => {
                with_spinner("Loading datasets...", query.clear_filters()).await;
                report_errors(&recorder);
            },
            Ok(BrowseItem::Exit) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Action menu for one dataset
async fn dataset_actions(
    query: &DatasetQuery,
    recorder: &RecordingObserver,
    dataset: &Dataset,
) -> Result<()> {
    loop {
        println!();
        println!("{}", format!("Selected: {}", dataset.name).bold());
        println!();

        let action = match Select::new("What would you like to do?", DatasetAction::ALL.to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        match action {
            DatasetAction::Details => render::print_details(dataset),
            DatasetAction::CopyUrl => copy::copy_url(query, recorder, dataset).await,
            DatasetAction::CopyCode => copy::copy_snippet(query, recorder, dataset).await,
            DatasetAction::Back => break,
        }
    }

    Ok(())
}

/// Prompt for an owner email; `None` when the prompt is cancelled
fn choose_email(state: &QueryState) -> Result<Option<EmailFilter>> {
    let mut options = vec![EmailFilter::ALL.to_string()];
    options.extend(state.unique_emails.iter().cloned());

    let current = state.selected_email.to_string();
    let cursor = options.iter().position(|o| *o == current).unwrap_or(0);

    match Select::new("Filter by owner:", options)
        .with_starting_cursor(cursor)
        .with_page_size(15)
        .prompt()
    {
        Ok(choice) => Ok(Some(EmailFilter::from(choice))),
        Err(e) if is_cancel(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn print_summary(state: &QueryState) {
    println!();
    if state.datasets.is_empty() {
        render::print_empty(state);
    } else {
        println!(
            "{} {}",
            "✓".green(),
            render::count_line(state.datasets.len())
        );
    }

    if !state.search_term.trim().is_empty() {
        println!("  Search: {}", state.search_term.cyan());
    }
    if !state.selected_email.is_all() {
        println!("  Owner:  {}", state.selected_email.to_string().cyan());
    }
    println!();
}

fn dataset_label(dataset: &Dataset) -> String {
    format!(
        "{} - {} ({})",
        render::truncate_string(&dataset.name, 40).cyan(),
        dataset.email,
        dataset.kind_label()
    )
}

fn report_errors(recorder: &RecordingObserver) {
    for err in recorder.take() {
        eprintln!("{} {}", "✗".red(), err);
    }
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
