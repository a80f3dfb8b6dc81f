//! API request and response types
//!
//! Mirrors the JSON bodies of the datasets backend.

use serde::{Deserialize, Serialize};
use syd_common::Dataset;

/// Body returned by list, search and filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<Dataset>,

    /// Count reported by the backend for this result set
    pub total_count: u64,

    /// Distinct owner emails, in backend order
    pub unique_emails: Vec<String>,

    #[serde(default)]
    pub unique_names: Vec<String>,
}

/// Request body for keyword search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
}

/// Request body for the email filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterByEmailRequest {
    pub email_pattern: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}
