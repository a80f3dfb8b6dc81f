//! Loading indicator for fetch operations

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Await `operation` behind a spinner
///
/// The spinner only shows when stderr is a terminal, so piped output
/// stays clean.
pub async fn with_spinner<F>(message: &str, operation: F) -> F::Output
where
    F: Future,
{
    if !std::io::stderr().is_terminal() {
        return operation.await;
    }

    let spinner = create_spinner(message);
    let output = operation.await;
    spinner.finish_and_clear();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_spinner() {
        let pb = create_spinner("Loading datasets...");
        assert!(!pb.is_finished());
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }

    #[tokio::test]
    async fn test_with_spinner_returns_output() {
        let value = with_spinner("Working", async { 42 }).await;
        assert_eq!(value, 42);
    }
}
