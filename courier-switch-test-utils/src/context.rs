//! Test context returned by `TestBuilder`.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

/// Test environment for one test.
///
/// Holds the mock Syrve server, the mocks created on it and a session backed by an
/// in-memory store.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
///     .build()
///     .await?;
///
/// let client = SyrveClient::new(&test.api_url(), Duration::from_secs(5))?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session for token caching tests
    pub session: Session,

    /// Mock HTTP server standing in for the Syrve API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Starts a mock server and creates an empty session.
    pub(crate) async fn new() -> Self {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Self {
            session,
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock server, used in place of the Syrve API host.
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
