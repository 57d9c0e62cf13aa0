//! HTTP transport for the Syrve Cloud API.

use std::time::Duration;

use dioxus_logger::tracing;
use serde::Serialize;
use serde_json::Value;

use crate::server::error::syrve::SyrveError;

/// HTTP client bound to one Syrve API base URL.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct SyrveClient {
    http: reqwest::Client,
    base_url: String,
}

impl SyrveClient {
    /// Creates a client for `base_url` where every request times out after `timeout`.
    ///
    /// # Returns
    /// - `Ok(SyrveClient)` - Client ready to issue requests
    /// - `Err(reqwest::Error)` - The TLS backend failed to initialize
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `payload` as JSON to `path` and decodes the JSON response.
    ///
    /// The bearer token is attached only when present and non-empty. A single attempt is
    /// made, there are no retries.
    ///
    /// # Arguments
    /// - `path` - Endpoint path appended to the base URL, e.g. `/organizations`
    /// - `payload` - Request body
    /// - `bearer` - Optional bearer token for the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(Value)` - HTTP status below 400 and a valid JSON body
    /// - `Err(SyrveError::Transport)` - Connection, timeout or body read failure
    /// - `Err(SyrveError::Status)` - HTTP status 400 or above, body kept raw
    /// - `Err(SyrveError::Decode)` - Successful status but body is not JSON
    pub async fn post_json<P>(
        &self,
        path: &str,
        payload: &P,
        bearer: Option<&str>,
    ) -> Result<Value, SyrveError>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.post(&url).json(payload);
        if let Some(token) = bearer.filter(|token| !token.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(path = %path, "Syrve request failed: {}", e);

            SyrveError::transport(e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SyrveError::Transport {
                message: e.to_string(),
                status: Some(status.as_u16()),
            })?;

        if status.as_u16() >= 400 {
            tracing::debug!(path = %path, status = %status, "Syrve request rejected");

            return Err(SyrveError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|_| SyrveError::Decode { body })
    }
}
