//! Published query state

use std::fmt;
use std::str::FromStr;
use syd_common::Dataset;

/// Email filter selection
///
/// `All` is the literal `"all"` in user input and means no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmailFilter {
    #[default]
    All,
    Email(String),
}

impl EmailFilter {
    /// The sentinel for "no email filter"
    pub const ALL: &'static str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, EmailFilter::All)
    }
}

impl From<&str> for EmailFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL {
            EmailFilter::All
        } else {
            EmailFilter::Email(value.to_string())
        }
    }
}

impl From<String> for EmailFilter {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            EmailFilter::All
        } else {
            EmailFilter::Email(value)
        }
    }
}

impl From<EmailFilter> for String {
    fn from(filter: EmailFilter) -> Self {
        filter.to_string()
    }
}

impl FromStr for EmailFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EmailFilter::from(s))
    }
}

impl fmt::Display for EmailFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailFilter::All => f.write_str(Self::ALL),
            EmailFilter::Email(email) => f.write_str(email),
        }
    }
}

/// Snapshot of what the dataset view shows
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Datasets in backend order
    pub datasets: Vec<Dataset>,

    /// True while a fetch is outstanding
    pub loading: bool,

    pub search_term: String,

    pub selected_email: EmailFilter,

    /// Choices for the email filter; only a full listing refreshes these
    pub unique_emails: Vec<String>,

    /// Count reported by the backend for the current result set
    pub total_count: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            loading: true,
            search_term: String::new(),
            selected_email: EmailFilter::All,
            unique_emails: Vec::new(),
            total_count: 0,
        }
    }
}

impl QueryState {
    /// Whether a search term or email filter narrows the current list
    pub fn is_filtered(&self) -> bool {
        !self.search_term.trim().is_empty() || !self.selected_email.is_all()
    }
}
