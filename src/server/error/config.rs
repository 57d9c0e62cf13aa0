//! Startup configuration errors.

use thiserror::Error;

/// Invalid process configuration, reported once at startup before the server binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// Parser error message
        reason: String,
    },
}
