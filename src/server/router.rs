//! HTTP routing for the change-driver page.

use axum::{routing::get, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Render the page
/// - `POST /` - Handle the organization or change-driver form
///
/// # Example
/// ```ignore
/// let state = AppState::new(syrve_client, api_login, delay);
/// let router = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(controller::page::show_page).post(controller::page::submit_page),
    )
}
