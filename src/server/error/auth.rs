//! Access-token exchange errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::syrve::SyrveError};

/// Failure to obtain a bearer token through the access-token exchange.
///
/// Without a token no other Syrve endpoint can be called, so both variants halt the request.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The `/access_token` call itself failed.
    #[error("Failed to exchange apiLogin for an access token: {0}")]
    TokenExchangeFailed(SyrveError),
    /// The `/access_token` call succeeded but the response carried no token.
    #[error("Access token response did not contain a token")]
    TokenMissing,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Failed to obtain an access token with the configured apiLogin, check SYRVE_API_LOGIN."
                    .to_string(),
            }),
        )
            .into_response()
    }
}
