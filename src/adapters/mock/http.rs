//! Mock HTTP client for testing.
//!
//! Responses are configured per URL; every request is recorded so tests can
//! assert how many calls a page made and where they went.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport layer
    Error(HttpError),
    /// Never resolve; models a hung request
    Hang,
}

impl MockResponse {
    /// 200 with the given JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_ok(&body))
    }

    /// Given status with a raw body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use starships::adapters::mock::{MockHttpClient, MockResponse};
/// use starships::traits::{HttpClient, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://swapi.dev/api/starships/9",
///     MockResponse::json(serde_json::json!({"name": "Death Star"})),
/// );
///
/// let response = client.get("https://swapi.dev/api/starships/9", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.request_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by exact URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Response when no URL matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL. The URL is matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set a response for URLs without a specific match.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn response_for(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.response_for(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Hang) => futures::future::pending().await,
            None => Err(HttpError::ConnectionFailed(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
