//! Error types for the esa.io API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for upstream API operations.
pub type EsaResult<T> = Result<T, EsaError>;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum EsaError {
    /// The upstream API answered with a non-success status.
    /// `message` is extracted from the JSON error body when present.
    #[error("esa API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be composed (bad base URL, unencodable query).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl EsaError {
    /// Create an API error from a status and extracted message.
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid-request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}
