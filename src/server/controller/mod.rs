//! HTTP controller endpoints for the change-driver page.
//!
//! Handlers read the session and posted form, delegate to the page service and render the
//! result to HTML. Errors that halt rendering are returned as [`Error`](crate::server::error::Error)
//! and converted to JSON error responses.

pub mod page;
