use thiserror::Error;

use crate::traits::HttpError;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} returned an unreadable body: {message}")]
    Parse { url: String, message: String },
}

impl FetchError {
    pub fn network(url: impl Into<String>, source: HttpError) -> Self {
        FetchError::Network {
            url: url.into(),
            source,
        }
    }

    pub fn parse(url: impl Into<String>, err: &serde_json::Error) -> Self {
        FetchError::Parse {
            url: url.into(),
            message: err.to_string(),
        }
    }

    /// Transport failure or non-2xx status.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Parse { url, .. } => url,
        }
    }

    /// Short message for the page body.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network {
                source: HttpError::Timeout(_),
                ..
            } => "The request timed out.".to_string(),
            FetchError::Network {
                source: HttpError::InvalidUrl(_),
                ..
            } => "No such starship.".to_string(),
            FetchError::Network { .. } => {
                "Could not reach the starship API. Check your connection.".to_string()
            }
            FetchError::Status { status: 404, .. } => "No such starship.".to_string(),
            FetchError::Status { status, .. } => {
                format!("The starship API answered with HTTP {}.", status)
            }
            FetchError::Parse { .. } => {
                "The starship API sent a response that could not be read.".to_string()
            }
        }
    }
}
