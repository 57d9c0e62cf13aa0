//! Application state shared by every handler.

use std::time::Duration;

use crate::server::syrve::client::SyrveClient;

/// State cloned into each request by axum.
#[derive(Clone)]
pub struct AppState {
    /// Client bound to the configured Syrve API host
    pub syrve_client: SyrveClient,
    /// apiLogin exchanged for a bearer token once per session
    pub api_login: String,
    /// Wait between submitting a change-driver command and checking its status
    pub command_status_delay: Duration,
}

impl AppState {
    /// Creates a new instance of [`AppState`]
    pub fn new(syrve_client: SyrveClient, api_login: String, command_status_delay: Duration) -> Self {
        Self {
            syrve_client,
            api_login,
            command_status_delay,
        }
    }
}
