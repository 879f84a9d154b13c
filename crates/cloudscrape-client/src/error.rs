//! Client error types.

use thiserror::Error;

use crate::response::ApiResponse;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A default-client accessor was used before `init`.
    #[error("client is not initialized: call init() before using the default client")]
    Uninitialized,

    /// The server answered outside the accepted status range, or no
    /// response was obtained at all (status 0).
    #[error("request to {path} failed with status {}", .response.status)]
    Request {
        /// Path and query of the failed request.
        path: String,
        /// Everything captured from the wire, for diagnostics.
        response: ApiResponse,
        /// Transport-level cause, when the failure happened below HTTP.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// HTTP client construction or request building failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Status code of a failed request, if this error carries one.
    ///
    /// Status 0 means no response was obtained at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// The captured response of a failed request, if any.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Error::Request { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Check if this is a request failure (out-of-range status or no
    /// response).
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::Request { .. })
    }

    /// Check if this is a JSON decode failure.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
