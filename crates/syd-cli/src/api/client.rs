//! HTTP API client for the datasets backend
//!
//! Thin typed wrapper over the backend's JSON endpoints. Every method maps
//! transport, status and decoding failures into a single [`FetchError`];
//! callers decide whether to surface or swallow it.

use crate::api::{endpoints, types::*};
use crate::error::{FetchError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// API client for the datasets backend
///
/// No request timeout is set; a request waits until the network layer
/// settles.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("syd/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// List every dataset
    pub async fn list_datasets(&self) -> std::result::Result<ListDatasetsResponse, FetchError> {
        let url = endpoints::datasets_url(&self.base_url);
        self.send_json(self.client.get(&url), url).await
    }

    /// Search datasets by keyword in name or email
    pub async fn search_datasets(
        &self,
        keyword: &str,
    ) -> std::result::Result<ListDatasetsResponse, FetchError> {
        let request = SearchRequest {
            keyword: keyword.to_string(),
        };
        self.post(endpoints::search_url(&self.base_url), &request)
            .await
    }

    /// Restrict datasets to one owner email
    pub async fn filter_by_email(
        &self,
        email_pattern: &str,
    ) -> std::result::Result<ListDatasetsResponse, FetchError> {
        let request = FilterByEmailRequest {
            email_pattern: email_pattern.to_string(),
        };
        self.post(endpoints::filter_by_email_url(&self.base_url), &request)
            .await
    }

    /// Distinct owner emails across all datasets
    pub async fn unique_emails(&self) -> std::result::Result<Vec<String>, FetchError> {
        let url = endpoints::emails_url(&self.base_url);
        self.send_json(self.client.get(&url), url).await
    }

    /// Distinct dataset names
    pub async fn unique_names(&self) -> std::result::Result<Vec<String>, FetchError> {
        let url = endpoints::names_url(&self.base_url);
        self.send_json(self.client.get(&url), url).await
    }

    /// Check server health
    pub async fn health_check(&self) -> std::result::Result<HealthResponse, FetchError> {
        let url = endpoints::health_url(&self.base_url);
        self.send_json(self.client.get(&url), url).await
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, url: String, body: &B) -> std::result::Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.client.post(&url).json(body), url).await
    }

    async fn send_json<T>(
        &self,
        request: RequestBuilder,
        url: String,
    ) -> std::result::Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "Sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Network { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(source) => Err(FetchError::Decode { url, source }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("http://localhost:8001").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) is closed on test hosts
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.list_datasets().await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
        assert!(err.to_string().contains("/api/v1/datasets"));
    }
}
