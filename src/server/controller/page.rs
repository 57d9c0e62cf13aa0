//! Handlers for the change-driver page at `/`.

use axum::{extract::State, response::Html, Form};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    client::render_page,
    model::page::PageForm,
    server::{error::Error, model::app::AppState, service::page::PageService},
};

/// Renders the page without any form input
///
/// # Returns
/// - 200 OK - Page with the first organization selected
/// - 404 Not Found - No organizations are available
/// - 502 Bad Gateway - Token exchange or organizations request failed
/// - 500 Internal Server Error - Session store failure
pub async fn show_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    render(&state, &session, &PageForm::default()).await
}

/// Handles either form on the page and renders the result
///
/// The `changeDriver` action submits the command and shows its outcome; any other action
/// only re-renders with the posted organization selected.
pub async fn submit_page(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PageForm>,
) -> Result<Html<String>, Error> {
    tracing::debug!(
        action = %form.action,
        org_id = %form.org_id,
        "Received page form"
    );

    render(&state, &session, &form).await
}

async fn render(state: &AppState, session: &Session, form: &PageForm) -> Result<Html<String>, Error> {
    let view = PageService::new(
        &state.syrve_client,
        &state.api_login,
        state.command_status_delay,
    )
    .load(session, form)
    .await?;

    Ok(Html(render_page(view)))
}
