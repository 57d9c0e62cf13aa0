//! Error types for the courier switch server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (token exchange, configuration, page assembly, Syrve API calls). Errors that halt
//! page rendering implement `IntoResponse` for Axum and use `thiserror` for their `Display`
//! and `Error` implementations.

pub mod auth;
pub mod config;
pub mod page;
pub mod syrve;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, page::PageError},
};

/// Main error type for the courier switch server.
///
/// Aggregates the domain-specific errors and external library errors into a single type so
/// handlers and startup code can use the `?` operator throughout. Errors that only affect the
/// change-driver notice are not represented here; those are recovered into a
/// [`ChangeDriverOutcome`](crate::server::service::change_driver::ChangeDriverOutcome).
#[derive(Error, Debug)]
pub enum Error {
    /// Access token could not be obtained with the configured apiLogin.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// The page cannot be rendered without organizations.
    #[error(transparent)]
    PageError(#[from] PageError),
    /// Failed to build the outbound HTTP client.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - No organizations are available to the apiLogin
/// - 502 Bad Gateway - The Syrve API refused the token exchange or the organizations request
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::PageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
