//! Environment-driven application configuration.

use std::{str::FromStr, time::Duration};

use dioxus_logger::tracing;

use crate::server::error::config::ConfigError;

/// Default base URL of the Syrve Cloud API (EU region).
pub const DEFAULT_SYRVE_API_HOST: &str = "https://api-eu.syrve.live/api/1";
/// Default per-request timeout for calls to the Syrve API, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
/// Default delay between submitting a command and checking its status, in seconds.
pub const DEFAULT_COMMAND_STATUS_DELAY_SECS: u64 = 2;
/// Default socket address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application configuration loaded from environment variables.
///
/// Only `SYRVE_API_LOGIN` is required, everything else falls back to a default.
pub struct Config {
    /// `apiLogin` exchanged for a bearer token (`SYRVE_API_LOGIN`)
    pub api_login: String,
    /// Base URL every endpoint path is appended to (`SYRVE_API_HOST`)
    pub api_host: String,
    /// Timeout applied to each outbound request (`SYRVE_REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,
    /// Wait between change-driver submission and status check (`COMMAND_STATUS_DELAY_SECS`)
    pub command_status_delay: Duration,
    /// Address the HTTP server listens on (`BIND_ADDRESS`)
    pub bind_address: String,
    /// Optional Valkey/Redis URL for session storage (`VALKEY_URL`)
    pub valkey_url: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - `SYRVE_API_LOGIN` missing or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Used by [`Config::from_env`] and by tests that should not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_login =
            non_empty("SYRVE_API_LOGIN").ok_or(ConfigError::MissingEnvVar("SYRVE_API_LOGIN".into()))?;

        let api_host = non_empty("SYRVE_API_HOST")
            .unwrap_or_else(|| DEFAULT_SYRVE_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = Duration::from_secs(parse_or_default(
            "SYRVE_REQUEST_TIMEOUT_SECS",
            non_empty("SYRVE_REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        let command_status_delay = Duration::from_secs(parse_or_default(
            "COMMAND_STATUS_DELAY_SECS",
            non_empty("COMMAND_STATUS_DELAY_SECS"),
            DEFAULT_COMMAND_STATUS_DELAY_SECS,
        )?);

        let bind_address =
            non_empty("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            api_login,
            api_host,
            request_timeout,
            command_status_delay,
            bind_address,
            valkey_url: non_empty("VALKEY_URL"),
        })
    }
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        None => {
            tracing::debug!("{} not set, using default: {}", key, default);

            Ok(default)
        }
    }
}
