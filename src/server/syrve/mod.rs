//! Syrve/iikoCloud API access.
//!
//! [`client::SyrveClient`] performs the raw JSON POST and normalizes every failure into a
//! [`SyrveError`](crate::server::error::syrve::SyrveError). The [`endpoint`] module adds one
//! typed method per remote endpoint the page uses.

pub mod client;
pub mod endpoint;
