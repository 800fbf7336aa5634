//! Client for the starship REST endpoints.
//!
//! - `GET {base}/starships` returns a [`StarshipPage`]
//! - `GET {base}/starships/{id}` returns a [`Starship`]

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{FetchError, FetchResult};
use crate::models::{Starship, StarshipPage};
use crate::traits::{Headers, HttpClient, HttpError};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://swapi.dev/api";

#[derive(Clone)]
pub struct StarshipApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl std::fmt::Debug for StarshipApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarshipApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl StarshipApi {
    /// A trailing slash on `base_url` is dropped.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn starships_url(&self) -> String {
        format!("{}/starships", self.base_url)
    }

    /// `id` is percent-encoded as a single path segment.
    pub fn starship_url(&self, id: &str) -> String {
        format!("{}/starships/{}", self.base_url, urlencoding::encode(id))
    }

    /// Fetch the listing collection.
    pub async fn list_starships(&self) -> FetchResult<StarshipPage> {
        self.get_json(&self.starships_url()).await
    }

    /// Fetch one record.
    ///
    /// Empty and dot-segment ids are refused without a request: a URL parser
    /// would resolve them to a different endpoint.
    pub async fn get_starship(&self, id: &str) -> FetchResult<Starship> {
        let url = self.starship_url(id);
        if matches!(id, "" | "." | "..") {
            return Err(FetchError::network(
                url,
                HttpError::InvalidUrl(format!("'{}' is not a starship id", id)),
            ));
        }
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url, &headers)
            .await
            .map_err(|e| FetchError::network(url, e))?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        response.json().map_err(|e| FetchError::parse(url, &e))
    }
}
