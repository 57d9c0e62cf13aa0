//! Errors that stop the page from rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::syrve::SyrveError};

/// Conditions that stop the page from rendering before the form is built.
#[derive(Error, Debug)]
pub enum PageError {
    /// The organizations request failed; maps to 502.
    #[error("Failed to load organizations: {0}")]
    OrganizationsUnavailable(SyrveError),
    /// The apiLogin has no organizations; maps to 404.
    #[error("No organizations available")]
    NoOrganizations,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::OrganizationsUnavailable(_) => {
                tracing::warn!("{}", self);

                StatusCode::BAD_GATEWAY
            }
            Self::NoOrganizations => {
                tracing::debug!("{}", self);

                StatusCode::NOT_FOUND
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
