//! Backend seam for the query module

use crate::api::{ApiClient, ListDatasetsResponse};
use crate::error::FetchError;
use async_trait::async_trait;

/// Source of dataset listings
///
/// [`ApiClient`] is the production implementation; tests plug in their own.
#[async_trait]
pub trait DatasetBackend: Send + Sync {
    /// Every dataset, plus the distinct owner emails and names
    async fn list(&self) -> Result<ListDatasetsResponse, FetchError>;

    /// Datasets matching `keyword`
    async fn search(&self, keyword: &str) -> Result<ListDatasetsResponse, FetchError>;

    /// Datasets owned by `email`
    async fn filter_by_email(&self, email: &str) -> Result<ListDatasetsResponse, FetchError>;
}

#[async_trait]
impl DatasetBackend for ApiClient {
    async fn list(&self) -> Result<ListDatasetsResponse, FetchError> {
        self.list_datasets().await
    }

    async fn search(&self, keyword: &str) -> Result<ListDatasetsResponse, FetchError> {
        self.search_datasets(keyword).await
    }

    async fn filter_by_email(&self, email: &str) -> Result<ListDatasetsResponse, FetchError> {
        ApiClient::filter_by_email(self, email).await
    }
}
