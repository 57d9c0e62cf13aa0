//! Driver reassignment form for the Syrve/iikoCloud delivery API.
//!
//! The crate is split the same way the page is served: `server` holds the axum handlers,
//! the Syrve HTTP client, session state and services; `client` holds the Dioxus components
//! rendered to HTML on the server; `model` holds the data transfer objects shared by both.

pub mod client;
pub mod model;
pub mod server;
