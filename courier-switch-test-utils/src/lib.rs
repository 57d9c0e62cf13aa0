//! Test harness for the courier switch crate.
//!
//! Tests run in two phases: a [`TestBuilder`] queues mock Syrve endpoints, then `build()`
//! returns a [`TestContext`] holding the mock server, a fresh in-memory session and the
//! created mocks. The harness does not depend on the main crate; tests construct their own
//! API client from [`TestContext::api_url`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::syrve::factory, TestBuilder, TestContext, TestError};
}
