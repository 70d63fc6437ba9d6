//! HTTP client for the collections endpoint
//!
//! One plain GET per call, no headers, no auth, no retries. The typed
//! decode here is the validation boundary: rendering code only ever sees
//! `Vec<MovieCollection>` or a `FetchError`.

use tracing::debug;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::types::MovieCollection;

/// Client for fetching movie collections from the poster backend
#[derive(Debug, Clone, Default)]
pub struct CollectionsClient {
    http: reqwest::Client,
}

impl CollectionsClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full collections list from `url`.
    ///
    /// Issues exactly one GET. Non-2xx statuses and undecodable bodies are
    /// errors; the caller decides what a failure means for displayed state.
    pub async fn fetch_collections(&self, url: &str) -> FetchResult<Vec<MovieCollection>> {
        let url = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!(%url, "fetching movie collections");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        let collections: Vec<MovieCollection> = serde_json::from_str(&body)?;

        debug!(
            collections = collections.len(),
            posters = collections
                .iter()
                .map(MovieCollection::poster_count)
                .sum::<usize>(),
            "movie collections fetched"
        );
        Ok(collections)
    }
}
