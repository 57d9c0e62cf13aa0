//! Syrve API call errors.
//!
//! Every call to the Syrve API resolves to either a decoded JSON body or one of the variants
//! below. The variants keep the raw response body so it can be shown to the operator, since
//! the API reports error details in fields that differ between versions.

use thiserror::Error;

/// Failure of a single POST to the Syrve API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyrveError {
    /// The request never produced a readable response (connection refused, timeout, TLS).
    ///
    /// `status` is set when the response head arrived but reading the body failed.
    #[error("transport error: {message} (HTTP status {})", .status.map_or_else(|| "none".to_string(), |s| s.to_string()))]
    Transport {
        /// Error reported by the HTTP client
        message: String,
        /// HTTP status observed before the failure, if any
        status: Option<u16>,
    },
    /// The API answered with an HTTP status of 400 or above.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The API answered successfully but the body was not the expected JSON.
    #[error("JSON parse error: {body}")]
    Decode {
        /// Raw response body
        body: String,
    },
}

impl SyrveError {
    /// Builds a [`SyrveError::Transport`] from a reqwest error.
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
