//! Typed calls to the Syrve endpoints used by the page.
//!
//! Submission and status calls return the raw JSON so the caller can quote it back to the
//! operator; listing calls decode into the models from [`crate::server::model::syrve`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    error::syrve::SyrveError,
    model::syrve::{
        AccessTokenRequest, AccessTokenResponse, ChangeDriverInfoRequest, CommandStatusRequest,
        Courier, CouriersRequest, CouriersResponse, Organization, OrganizationsRequest,
        OrganizationsResponse,
    },
    syrve::client::SyrveClient,
};

/// Exchanges the apiLogin for a bearer token.
pub const ACCESS_TOKEN_PATH: &str = "/access_token";
/// Lists organizations.
pub const ORGANIZATIONS_PATH: &str = "/organizations";
/// Lists couriers per organization.
pub const COURIERS_PATH: &str = "/employees/couriers";
/// Submits a driver change for a delivery order.
pub const CHANGE_DRIVER_INFO_PATH: &str = "/deliveries/change_driver_info";
/// Reads the state of a submitted command.
pub const COMMAND_STATUS_PATH: &str = "/commands/status";

impl SyrveClient {
    /// Exchanges an apiLogin for a bearer token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Exchange succeeded
    /// - `Ok(None)` - Exchange succeeded but no token was returned
    /// - `Err(SyrveError)` - The call failed
    pub async fn access_token(&self, api_login: &str) -> Result<Option<String>, SyrveError> {
        let response = self
            .post_json(ACCESS_TOKEN_PATH, &AccessTokenRequest { api_login }, None)
            .await?;
        let response: AccessTokenResponse = decode(response)?;

        Ok(response.token.filter(|token| !token.is_empty()))
    }

    /// Lists every organization available to the token, disabled ones included.
    pub async fn organizations(&self, token: &str) -> Result<Vec<Organization>, SyrveError> {
        let response = self
            .post_json(
                ORGANIZATIONS_PATH,
                &OrganizationsRequest::default(),
                Some(token),
            )
            .await?;
        let response: OrganizationsResponse = decode(response)?;

        Ok(response.organizations)
    }

    /// Lists couriers of the given organizations as one flat list.
    pub async fn couriers(
        &self,
        token: &str,
        organization_ids: &[String],
    ) -> Result<Vec<Courier>, SyrveError> {
        let response = self
            .post_json(
                COURIERS_PATH,
                &CouriersRequest { organization_ids },
                Some(token),
            )
            .await?;
        let response: CouriersResponse = decode(response)?;

        Ok(response.into_couriers())
    }

    /// Submits a change-driver command and returns the raw response.
    pub async fn change_driver_info(
        &self,
        token: &str,
        request: &ChangeDriverInfoRequest,
    ) -> Result<Value, SyrveError> {
        self.post_json(CHANGE_DRIVER_INFO_PATH, request, Some(token))
            .await
    }

    /// Reads the status of a previously submitted command and returns the raw response.
    pub async fn command_status(
        &self,
        token: &str,
        organization_id: &str,
        correlation_id: &str,
    ) -> Result<Value, SyrveError> {
        self.post_json(
            COMMAND_STATUS_PATH,
            &CommandStatusRequest {
                organization_id,
                correlation_id,
            },
            Some(token),
        )
        .await
    }
}

/// Decodes an already parsed JSON body into a response model.
///
/// Shape mismatches are reported as [`SyrveError::Decode`] with the body re-serialized.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SyrveError> {
    let body = value.to_string();

    serde_json::from_value(value).map_err(|_| SyrveError::Decode { body })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use courier_switch_test_utils::{constant::TEST_ACCESS_TOKEN, prelude::*};
    use mockito::Matcher;
    use serde_json::json;

    use crate::server::{
        error::syrve::SyrveError, model::syrve::ChangeDriverInfoRequest,
        syrve::client::SyrveClient,
    };

    fn client(test: &TestContext) -> SyrveClient {
        SyrveClient::new(&test.api_url(), Duration::from_secs(5)).unwrap()
    }

    mod access_token {
        use super::*;

        #[tokio::test]
        /// Expect the token from a successful exchange
        async fn returns_token() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_access_token_endpoint("login", Some("token-1"), 1)
                .build()
                .await?;

            let result = client(&test).access_token("login").await;

            assert_eq!(result, Ok(Some("token-1".to_string())));
            test.assert_mocks();

            Ok(())
        }

        #[tokio::test]
        /// Expect None when the exchange response has no token
        async fn returns_none_without_token() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_access_token_endpoint("login", None, 1)
                .build()
                .await?;

            let result = client(&test).access_token("login").await;

            assert_eq!(result, Ok(None));

            Ok(())
        }
    }

    mod organizations {
        use super::*;

        #[tokio::test]
        /// Expect organizations to be decoded with optional names
        async fn decodes_organizations() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_organizations_endpoint(
                    vec![
                        factory::organization("org-1", Some("Pizza Central")),
                        factory::organization("org-2", None),
                    ],
                    1,
                )
                .build()
                .await?;

            let result = client(&test).organizations(TEST_ACCESS_TOKEN).await.unwrap();

            assert_eq!(result.len(), 2);
            assert_eq!(result[0].id, "org-1");
            assert_eq!(result[0].name.as_deref(), Some("Pizza Central"));
            assert!(result[1].name.is_none());
            test.assert_mocks();

            Ok(())
        }

        #[tokio::test]
        /// Expect a decode error when organizations is not an array
        async fn fails_on_unexpected_shape() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mock_endpoint(|server| {
                    server
                        .mock("POST", "/organizations")
                        .with_status(200)
                        .with_body(r#"{"organizations":"none"}"#)
                        .create()
                })
                .build()
                .await?;

            let result = client(&test).organizations(TEST_ACCESS_TOKEN).await;

            assert!(matches!(result, Err(SyrveError::Decode { .. })));

            Ok(())
        }
    }

    mod couriers {
        use super::*;

        #[tokio::test]
        /// Expect the request to be scoped to the given organization and the groups flattened
        async fn flattens_couriers_for_organization() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mock_endpoint(|server| {
                    server
                        .mock("POST", "/employees/couriers")
                        .match_body(Matcher::Json(json!({"organizationIds": ["org-1"]})))
                        .with_status(200)
                        .with_body(
                            json!({
                                "employees": [
                                    {"organizationId": "org-1", "items": [
                                        factory::courier("d1", "Ivan Petrov"),
                                        factory::courier("d2", "Anna Smirnova")
                                    ]}
                                ]
                            })
                            .to_string(),
                        )
                        .expect(1)
                        .create()
                })
                .build()
                .await?;

            let result = client(&test)
                .couriers(TEST_ACCESS_TOKEN, &["org-1".to_string()])
                .await
                .unwrap();

            let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["d1", "d2"]);
            test.assert_mocks();

            Ok(())
        }
    }

    mod change_driver_info {
        use super::*;

        #[tokio::test]
        /// Expect driverId to be absent from the payload when unassigning
        async fn sends_payload_without_driver() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mock_endpoint(|server| {
                    server
                        .mock("POST", "/deliveries/change_driver_info")
                        .match_header("authorization", "Bearer token-1")
                        .match_body(Matcher::Json(
                            json!({"organizationId": "org-1", "orderId": "abc-123"}),
                        ))
                        .with_status(200)
                        .with_body(r#"{"correlationId":"corr-1"}"#)
                        .expect(1)
                        .create()
                })
                .build()
                .await?;

            let request = ChangeDriverInfoRequest {
                organization_id: "org-1".to_string(),
                order_id: "abc-123".to_string(),
                driver_id: None,
                estimated_time: None,
            };
            let result = client(&test).change_driver_info("token-1", &request).await;

            assert_eq!(result, Ok(json!({"correlationId": "corr-1"})));
            test.assert_mocks();

            Ok(())
        }
    }

    mod command_status {
        use super::*;

        #[tokio::test]
        /// Expect the organization and correlation ids in the status request
        async fn sends_correlation_id() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_command_status_endpoint("org-1", "corr-1", json!({"state": "Success"}), 1)
                .build()
                .await?;

            let result = client(&test)
                .command_status(TEST_ACCESS_TOKEN, "org-1", "corr-1")
                .await;

            assert_eq!(result, Ok(json!({"state": "Success"})));
            test.assert_mocks();

            Ok(())
        }
    }
}
