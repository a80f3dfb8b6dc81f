//! Error observers
//!
//! The query module never returns its errors. It hands each one to an
//! [`ErrorObserver`] and the host decides whether to log, show, or keep it.

use crate::error::QueryError;
use std::sync::Mutex;
use tracing::error;

/// Receives every error the query module recovers from
pub trait ErrorObserver: Send + Sync {
    fn on_error(&self, error: QueryError);
}

impl<F> ErrorObserver for F
where
    F: Fn(QueryError) + Send + Sync,
{
    fn on_error(&self, error: QueryError) {
        self(error)
    }
}

/// Logs errors through `tracing` and drops them
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ErrorObserver for LogObserver {
    fn on_error(&self, err: QueryError) {
        error!(error = %err, "Dataset query failed");
    }
}

/// Keeps errors so the host can inspect them after an operation
#[derive(Debug, Default)]
pub struct RecordingObserver {
    errors: Mutex<Vec<QueryError>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<QueryError> {
        self.errors
            .lock()
            .map(|mut errors| std::mem::take(&mut *errors))
            .unwrap_or_default()
    }

    /// Remove everything recorded and return the first error, if any
    pub fn take_first(&self) -> Option<QueryError> {
        self.take().into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.lock().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl ErrorObserver for RecordingObserver {
    fn on_error(&self, err: QueryError) {
        tracing::debug!(error = %err, "Recording query error");
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(err);
        }
    }
}
