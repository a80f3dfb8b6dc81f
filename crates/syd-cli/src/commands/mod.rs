//! CLI command implementations
//!
//! Each subcommand has its own module. Commands that show datasets drive a
//! [`DatasetQuery`] and read its state once the operation settles.

pub mod browse;
pub mod config;
pub mod copy;
pub mod list;
pub mod owners;
pub mod render;
pub mod status;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::query::{DatasetQuery, RecordingObserver};
use std::sync::Arc;

/// Build a query module whose errors land in the returned recorder
pub(crate) fn connect(config: &Config) -> Result<(DatasetQuery, Arc<RecordingObserver>)> {
    let recorder = Arc::new(RecordingObserver::new());
    let query = DatasetQuery::from_config(&config.query_config())?.with_observer(recorder.clone());
    Ok((query, recorder))
}

/// Fail the command if the last query operation reported an error
pub(crate) fn check(recorder: &RecordingObserver) -> Result<()> {
    match recorder.take_first() {
        Some(err) => Err(CliError::Query(err)),
        None => Ok(()),
    }
}
