//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Structured error body the API attaches to non-2xx responses
///
/// Either field may be absent; an unparseable body leaves both empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Restaurant id was not a positive integer; rejected before any request
    #[error("invalid restaurant id: {0}")]
    InvalidIdentifier(i64),

    /// Transport-level failure, no usable response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error: status {status}")]
    Api {
        status: StatusCode,
        body: ErrorBody,
    },

    /// 2xx response whose body did not decode into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Reduce the error to a display string for the store
    ///
    /// Priority: structured `message`, structured `detail`, transport error
    /// text, then the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { body, .. } => body
                .message
                .clone()
                .or_else(|| body.detail.clone())
                .unwrap_or_else(|| fallback.to_string()),
            ClientError::Http(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
