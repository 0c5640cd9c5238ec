//! HTTP clients for the scholarship backend and the news endpoint (impure shell).
//!
//! Each operation is one GET with JSON decoding. There is no retry, no caching and no
//! timeout beyond reqwest's default; callers decide what a failure means.

pub mod news;
pub mod worker;

pub use news::NewsClient;
pub use worker::{FetchDispatcher, FetchJob, FetchOutcome, FetchWorker, RecordingDispatcher};

use crate::model::{FetchError, ResultPage, Scholarship, ScholarshipId};
use crate::state::{FetchRequest, SearchState};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Backend base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Client for the scholarship REST API.
#[derive(Debug, Clone)]
pub struct ScholarshipClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScholarshipClient {
    /// Client with a fresh `reqwest::Client`. Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Client sharing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /scholarships/countries` → country names in server order.
    pub async fn fetch_countries(&self) -> Result<Vec<String>, FetchError> {
        let url = format!("{}/scholarships/countries", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// `GET /scholarships/?page=..&page_size=..[&filters]` → one result page.
    pub async fn fetch_scholarships(&self, request: &FetchRequest) -> Result<ResultPage, FetchError> {
        let url = format!("{}/scholarships/", self.base_url);
        self.get_json(&url, &request.query_pairs()).await
    }

    /// `GET /scholarships/top_scholarships/`. First element is the most featured.
    pub async fn fetch_top_scholarships(&self) -> Result<Vec<Scholarship>, FetchError> {
        let url = format!("{}/scholarships/top_scholarships/", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// `GET /scholarships/{id}`. A 404 maps to [`FetchError::NotFound`].
    pub async fn fetch_scholarship_by_id(&self, id: ScholarshipId) -> Result<Scholarship, FetchError> {
        let url = format!("{}/scholarships/{}", self.base_url, id);
        match self.get_json(&url, &[]).await {
            Err(FetchError::Status { status: 404, .. }) => Err(FetchError::NotFound { id: id.get() }),
            other => other,
        }
    }

    /// Every scholarship, following list pages until the backend reports no next page.
    pub async fn fetch_all_scholarships(&self) -> Result<Vec<Scholarship>, FetchError> {
        let mut state = SearchState::default();
        let mut all = Vec::new();
        loop {
            let page = self.fetch_scholarships(&state.to_fetch_request()).await?;
            let total_pages = page.total_pages(crate::state::PAGE_SIZE);
            let has_next = page.has_next() && !page.items.is_empty();
            all.extend(page.items);
            if !has_next || state.page.get() >= total_pages {
                break;
            }
            state.page = match state.page.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        debug!(count = all.len(), "Fetched full scholarship list");
        Ok(all)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        get_json(&self.http, url, query).await
    }
}

/// GET `url` and decode the JSON body, mapping non-2xx to [`FetchError::Status`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T, FetchError> {
    let mut builder = http.get(url);
    if !query.is_empty() {
        builder = builder.query(query);
    }
    let res = builder.send().await?;

    if !res.status().is_success() {
        return Err(FetchError::Status {
            status: res.status().as_u16(),
            url: res.url().to_string(),
        });
    }

    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
