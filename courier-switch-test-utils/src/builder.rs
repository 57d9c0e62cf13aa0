//! Declarative test builder.
//!
//! The builder queues mock Syrve endpoints; all of them are created on a fresh mock server
//! during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()`. Every `expected_requests`
/// argument is checked by [`TestContext::assert_mocks`]; pass `0` to assert an endpoint is
/// never called.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    access_token_endpoints: Vec<(String, Option<String>, usize)>, // (api_login, token, expected)
    organizations_endpoints: Vec<(Vec<Value>, usize)>,
    couriers_endpoints: Vec<(String, Vec<Value>, usize)>, // (organization_id, couriers, expected)
    change_driver_endpoints: Vec<(Value, usize)>,
    command_status_endpoints: Vec<(String, String, Value, usize)>, // (org_id, corr_id, response, expected)
    error_endpoints: Vec<(String, usize, String, usize)>, // (path, status, body, expected)
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            access_token_endpoints: Vec::new(),
            organizations_endpoints: Vec::new(),
            couriers_endpoints: Vec::new(),
            change_driver_endpoints: Vec::new(),
            command_status_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Add mock token exchange endpoint to the test server.
    ///
    /// # Arguments
    /// - `api_login` - apiLogin the request must carry
    /// - `token` - Token to return; `None` returns a response without a token
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_access_token_endpoint(
        mut self,
        api_login: &str,
        token: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        self.access_token_endpoints.push((
            api_login.to_string(),
            token.map(str::to_string),
            expected_requests,
        ));
        self
    }

    /// Add mock organizations endpoint to the test server.
    ///
    /// # Arguments
    /// - `organizations` - Organization items, see [`factory::organization`](crate::fixtures::syrve::factory::organization)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_organizations_endpoint(
        mut self,
        organizations: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.organizations_endpoints
            .push((organizations, expected_requests));
        self
    }

    /// Add mock couriers endpoint for one organization to the test server.
    ///
    /// # Arguments
    /// - `organization_id` - Organization the request must be scoped to
    /// - `couriers` - Courier items, see [`factory::courier`](crate::fixtures::syrve::factory::courier)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_couriers_endpoint(
        mut self,
        organization_id: &str,
        couriers: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.couriers_endpoints
            .push((organization_id.to_string(), couriers, expected_requests));
        self
    }

    /// Add mock change-driver endpoint to the test server.
    ///
    /// # Arguments
    /// - `response` - JSON body returned for any submission
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_change_driver_endpoint(mut self, response: Value, expected_requests: usize) -> Self {
        self.change_driver_endpoints
            .push((response, expected_requests));
        self
    }

    /// Add mock command status endpoint to the test server.
    ///
    /// # Arguments
    /// - `organization_id` - Organization the request must carry
    /// - `correlation_id` - Correlation id the request must carry
    /// - `response` - JSON body returned, e.g. `{"state": "Success"}`
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_command_status_endpoint(
        mut self,
        organization_id: &str,
        correlation_id: &str,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.command_status_endpoints.push((
            organization_id.to_string(),
            correlation_id.to_string(),
            response,
            expected_requests,
        ));
        self
    }

    /// Add a mock endpoint that fails with the given status and raw body.
    ///
    /// # Arguments
    /// - `path` - Endpoint path, e.g. `/organizations`
    /// - `status_code` - HTTP status code to return (e.g. 400, 401, 500)
    /// - `body` - Raw response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(
        mut self,
        path: &str,
        status_code: usize,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints.push((
            path.to_string(),
            status_code,
            body.to_string(),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;

        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (api_login, token, expected) in self.access_token_endpoints {
            mocks.push(context.syrve().create_access_token_endpoint(
                &api_login,
                token.as_deref(),
                expected,
            ));
        }

        for (organizations, expected) in self.organizations_endpoints {
            mocks.push(
                context
                    .syrve()
                    .create_organizations_endpoint(organizations, expected),
            );
        }

        for (organization_id, couriers, expected) in self.couriers_endpoints {
            mocks.push(context.syrve().create_couriers_endpoint(
                &organization_id,
                couriers,
                expected,
            ));
        }

        for (response, expected) in self.change_driver_endpoints {
            mocks.push(
                context
                    .syrve()
                    .create_change_driver_endpoint(response, expected),
            );
        }

        for (organization_id, correlation_id, response, expected) in self.command_status_endpoints
        {
            mocks.push(context.syrve().create_command_status_endpoint(
                &organization_id,
                &correlation_id,
                response,
                expected,
            ));
        }

        for (path, status, body, expected) in self.error_endpoints {
            mocks.push(
                context
                    .syrve()
                    .create_error_endpoint(&path, status, &body, expected),
            );
        }

        // Store mocks in the context so they live as long as the test
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
