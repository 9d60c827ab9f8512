use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to fetch search results: {0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// One organic hit from the search provider. Extra provider fields are
/// dropped on decode; `snippet` is occasionally absent upstream and
/// defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    organic_results: Vec<SearchResult>,
}

#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> SearchClient {
        SearchClient {
            http,
            api_key,
            base_url,
        }
    }

    /// Fetches the provider's organic results for `query`. No retries; a
    /// non-success status or malformed body propagates to the caller.
    pub async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search.json", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("api_key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_else(|| status.as_str());
            warn!(%status, "search provider returned non-success status");
            return Err(SearchError::Provider(status_text.to_string()));
        }

        let body: SearchResponse = response.json().await?;
        debug!(results = body.organic_results.len(), "search complete");
        Ok(body.organic_results)
    }
}
