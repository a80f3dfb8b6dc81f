//! Dataset query module
//!
//! Keeps the dataset list, the active search term, the active email filter
//! and the loading flag consistent with the backend.
//!
//! Three fetch operations replace the published list: [`DatasetQuery::load_all`],
//! [`DatasetQuery::search`] and [`DatasetQuery::filter_by_email`]. Each fully
//! supersedes the others; there is no search inside a filtered set. State is
//! published through a `tokio::sync::watch` channel, so a view subscribes
//! once and re-renders on every change.
//!
//! Operations take `&self` and may overlap. Nothing cancels or orders them:
//! whichever response arrives last is what the view shows. `loading` stays
//! true until the last outstanding operation settles.
//!
//! Failures never propagate out of an operation. They go to the configured
//! [`ErrorObserver`] and the previous list stays in place.

pub mod backend;
pub mod observer;
pub mod state;

pub use backend::DatasetBackend;
pub use observer::{ErrorObserver, LogObserver, RecordingObserver};
pub use state::{EmailFilter, QueryState};

use crate::api::{ApiClient, ListDatasetsResponse};
use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::error::{QueryError, Result};
use crate::snippet::python_snippet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use syd_common::Dataset;
use tokio::sync::watch;
use tracing::{debug, info};

/// Connection settings injected at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Backend origin, e.g. `http://localhost:8001`
    pub base_url: String,
}

impl QueryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Owner of the dataset view's query state
pub struct DatasetQuery {
    backend: Arc<dyn DatasetBackend>,
    clipboard: Arc<dyn ClipboardProvider>,
    observer: Arc<dyn ErrorObserver>,
    state: watch::Sender<QueryState>,
    /// Fetches started and not yet settled
    in_flight: AtomicUsize,
}

/// Holds `loading` true until dropped
///
/// Dropping releases this operation's hold on the flag on success, on
/// failure, and when the operation's future is abandoned half way. The
/// flag clears once no other operation holds it.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<QueryState>,
    in_flight: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<QueryState>, in_flight: &'a AtomicUsize) -> Self {
        // The counter only changes under the channel's lock
        state.send_modify(|s| {
            in_flight.fetch_add(1, Ordering::SeqCst);
            s.loading = true;
        });
        Self { state, in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let in_flight = self.in_flight;
        self.state.send_modify(|s| {
            s.loading = in_flight.fetch_sub(1, Ordering::SeqCst) > 1;
        });
    }
}

impl DatasetQuery {
    /// Create a query module over `backend`
    ///
    /// Copies go to the system clipboard and errors are logged until
    /// replaced with [`with_clipboard`](Self::with_clipboard) and
    /// [`with_observer`](Self::with_observer).
    pub fn new(backend: Arc<dyn DatasetBackend>) -> Self {
        let (state, _) = watch::channel(QueryState::default());

        Self {
            backend,
            clipboard: Arc::new(SystemClipboard),
            observer: Arc::new(LogObserver),
            state,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Create a query module talking HTTP to `config.base_url`
    pub fn from_config(config: &QueryConfig) -> Result<Self> {
        let client = ApiClient::new(config.base_url.clone())?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardProvider>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ErrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Receiver that sees every state change
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// Load every dataset
    ///
    /// The only operation that refreshes `unique_emails`.
    pub async fn load_all(&self) {
        let _loading = LoadingGuard::start(&self.state, &self.in_flight);

        match self.backend.list().await {
            Ok(response) => {
                info!(
                    datasets = response.datasets.len(),
                    total = response.total_count,
                    "Loaded datasets"
                );
                self.state.send_modify(|state| {
                    state.datasets = response.datasets;
                    state.unique_emails = response.unique_emails;
                    state.total_count = response.total_count;
                });
            },
            Err(err) => self.report(QueryError::fetch("load datasets", err)),
        }
    }

    /// Search datasets by keyword
    ///
    /// A blank term never reaches the backend; it lists everything instead.
    pub async fn search(&self, term: &str) {
        self.state
            .send_modify(|state| state.search_term = term.to_string());

        if term.trim().is_empty() {
            debug!("Blank search term, listing all datasets");
            self.load_all().await;
            return;
        }

        let _loading = LoadingGuard::start(&self.state, &self.in_flight);

        match self.backend.search(term).await {
            Ok(response) => {
                info!(term = %term, total = response.total_count, "Search finished");
                self.apply_results(response);
            },
            Err(err) => self.report(QueryError::fetch("search datasets", err)),
        }
    }

    /// Show only datasets owned by one email
    ///
    /// [`EmailFilter::All`] lists everything. `unique_emails` is left as is
    /// so the filter keeps offering every owner.
    pub async fn filter_by_email(&self, filter: impl Into<EmailFilter>) {
        let filter = filter.into();
        self.state
            .send_modify(|state| state.selected_email = filter.clone());

        let email = match filter {
            EmailFilter::All => {
                debug!("Email filter cleared, listing all datasets");
                self.load_all().await;
                return;
            },
            EmailFilter::Email(email) => email,
        };

        let _loading = LoadingGuard::start(&self.state, &self.in_flight);

        match self.backend.filter_by_email(&email).await {
            Ok(response) => {
                info!(email = %email, total = response.total_count, "Filter applied");
                self.apply_results(response);
            },
            Err(err) => self.report(QueryError::fetch("filter datasets", err)),
        }
    }

    /// Reset the search term and email filter, then list everything
    pub async fn clear_filters(&self) {
        self.state.send_modify(|state| {
            state.search_term.clear();
            state.selected_email = EmailFilter::All;
        });
        self.load_all().await;
    }

    /// Copy a dataset's syft URL verbatim
    ///
    /// Returns whether the copy happened. Failures go to the observer.
    pub async fn copy_resource_locator(&self, syft_url: &str) -> bool {
        self.copy(syft_url, "syft URL").await
    }

    /// Copy the Python snippet for `dataset`
    ///
    /// Returns whether the copy happened. Failures go to the observer.
    pub async fn copy_snippet(&self, dataset: &Dataset) -> bool {
        self.copy(&python_snippet(dataset), "code snippet").await
    }

    async fn copy(&self, text: &str, what: &str) -> bool {
        match self.clipboard.set_text(text).await {
            Ok(()) => {
                info!(what = %what, "Copied to clipboard");
                true
            },
            Err(err) => {
                self.report(err.into());
                false
            },
        }
    }

    /// Search and filter responses leave `unique_emails` alone
    fn apply_results(&self, response: ListDatasetsResponse) {
        self.state.send_modify(|state| {
            state.datasets = response.datasets;
            state.total_count = response.total_count;
        });
    }

    fn report(&self, err: QueryError) {
        debug!(error = %err, "Reporting query error");
        self.observer.on_error(err);
    }
}
