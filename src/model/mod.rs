//! Data transfer objects shared between the server and the rendered page.

pub mod api;
pub mod page;
