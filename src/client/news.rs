//! Client for the news headlines endpoint.

use crate::client::get_json;
use crate::model::{FetchError, NewsArticle};

/// Fetches headlines from a single configured endpoint returning a JSON array.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl NewsClient {
    /// Client for `endpoint` with a fresh `reqwest::Client`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint)
    }

    /// Client sharing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Configured headlines URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET` the endpoint and decode a JSON array of articles.
    pub async fn fetch_headlines(&self) -> Result<Vec<NewsArticle>, FetchError> {
        get_json(&self.http, &self.endpoint, &[]).await
    }
}
