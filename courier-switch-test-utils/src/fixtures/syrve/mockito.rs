//! Syrve HTTP mock endpoint creation utilities.
//!
//! Every Syrve endpoint is a JSON POST; authenticated endpoints only match requests that
//! carry a bearer token.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::TEST_CORRELATION_ID, fixtures::syrve::SyrveFixtures};

fn bearer() -> Matcher {
    Matcher::Regex(r"^Bearer \S+$".to_string())
}

impl<'a> SyrveFixtures<'a> {
    /// Create a mock token exchange endpoint.
    ///
    /// # Arguments
    /// - `api_login` - apiLogin the request body must carry
    /// - `token` - Token to return, the field is left out when `None`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_access_token_endpoint(
        &mut self,
        api_login: &str,
        token: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let mut body = json!({ "correlationId": TEST_CORRELATION_ID });
        if let Some(token) = token {
            body["token"] = json!(token);
        }

        self.context
            .server
            .mock("POST", "/access_token")
            .match_body(Matcher::PartialJson(json!({ "apiLogin": api_login })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock organizations endpoint listing `organizations`.
    pub fn create_organizations_endpoint(
        &mut self,
        organizations: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "correlationId": TEST_CORRELATION_ID,
            "organizations": organizations
        });

        self.context
            .server
            .mock("POST", "/organizations")
            .match_header("authorization", bearer())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock couriers endpoint that only answers for `organization_id`.
    pub fn create_couriers_endpoint(
        &mut self,
        organization_id: &str,
        couriers: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "correlationId": TEST_CORRELATION_ID,
            "employees": [
                { "organizationId": organization_id, "items": couriers }
            ]
        });

        self.context
            .server
            .mock("POST", "/employees/couriers")
            .match_header("authorization", bearer())
            .match_body(Matcher::Json(
                json!({ "organizationIds": [organization_id] }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock change-driver endpoint answering every submission with `response`.
    pub fn create_change_driver_endpoint(
        &mut self,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", "/deliveries/change_driver_info")
            .match_header("authorization", bearer())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock command status endpoint for one organization and correlation id.
    pub fn create_command_status_endpoint(
        &mut self,
        organization_id: &str,
        correlation_id: &str,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", "/commands/status")
            .match_header("authorization", bearer())
            .match_body(Matcher::Json(json!({
                "organizationId": organization_id,
                "correlationId": correlation_id
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `path` that fails with `status_code` and a raw `body`.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status_code: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", path)
            .with_status(status_code)
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
