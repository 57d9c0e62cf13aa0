use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use courier_switch::{
    model::page::{PageForm, ACTION_CHANGE_DRIVER, ACTION_SELECT_ORGANIZATION},
    server::controller::page::{show_page, submit_page},
};
use courier_switch_test_utils::{
    constant::{TEST_ACCESS_TOKEN, TEST_API_LOGIN, TEST_ORDER_ID, TEST_ORGANIZATION_ID},
    prelude::*,
};
use serde_json::json;

use crate::TestContextExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

mod show_page {
    use super::*;

    #[tokio::test]
    /// Expect the page with organizations and couriers of the first organization
    async fn renders_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
                1,
            )
            .with_couriers_endpoint(
                TEST_ORGANIZATION_ID,
                vec![
                    factory::courier("d1", "Ivan Petrov"),
                    factory::deleted_courier("d2", "Anna Smirnova"),
                ],
                1,
            )
            .build()
            .await?;

        let result = show_page(State(test.into_app_state()), test.session.clone()).await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Pizza Central"));
        assert!(html.contains("Ivan Petrov"));
        assert!(html.contains("Anna Smirnova"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a 404 with the error message when no organizations are available
    async fn fails_without_organizations() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(vec![], 1)
            .build()
            .await?;

        let result = show_page(State(test.into_app_state()), test.session.clone()).await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await)?;
        assert_eq!(body, json!({"error": "No organizations available"}));

        Ok(())
    }

    #[tokio::test]
    /// Expect a 502 and no organizations request when the token exchange fails
    async fn fails_when_token_exchange_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("/access_token", 401, r#"{"errorDescription":"Unauthorized"}"#, 1)
            .with_organizations_endpoint(vec![], 0)
            .build()
            .await?;

        let result = show_page(State(test.into_app_state()), test.session.clone()).await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_text(response).await;
        assert!(body.contains("SYRVE_API_LOGIN"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect the empty courier row when the couriers request fails
    async fn renders_when_couriers_fail() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
                1,
            )
            .with_error_endpoint("/employees/couriers", 500, "Internal error", 1)
            .build()
            .await?;

        let result = show_page(State(test.into_app_state()), test.session.clone()).await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("No couriers for this organization."));

        Ok(())
    }
}

mod submit_page {
    use super::*;

    #[tokio::test]
    /// Expect the in progress notice to reference the correlation id
    async fn shows_in_progress_notice() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
                1,
            )
            .with_couriers_endpoint(
                TEST_ORGANIZATION_ID,
                vec![factory::courier("d1", "Ivan Petrov")],
                1,
            )
            .with_change_driver_endpoint(json!({"correlationId": "corr-1"}), 1)
            .with_command_status_endpoint(
                TEST_ORGANIZATION_ID,
                "corr-1",
                json!({"state": "InProgress"}),
                1,
            )
            .build()
            .await?;
        let form = PageForm {
            org_id: TEST_ORGANIZATION_ID.to_string(),
            order_id: TEST_ORDER_ID.to_string(),
            driver_id: "d1".to_string(),
            estimated_time: String::new(),
            action: ACTION_CHANGE_DRIVER.to_string(),
        };

        let result = submit_page(
            State(test.into_app_state()),
            test.session.clone(),
            Form(form),
        )
        .await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("alert alert-info"));
        assert!(html.contains("corr-1"));
        assert!(html.contains("in progress"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a missing order id warning and no change-driver call
    async fn warns_without_order_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
                1,
            )
            .with_couriers_endpoint(TEST_ORGANIZATION_ID, vec![], 1)
            .with_change_driver_endpoint(json!({"correlationId": "corr-1"}), 0)
            .build()
            .await?;
        let form = PageForm {
            org_id: TEST_ORGANIZATION_ID.to_string(),
            action: ACTION_CHANGE_DRIVER.to_string(),
            ..Default::default()
        };

        let result = submit_page(
            State(test.into_app_state()),
            test.session.clone(),
            Form(form),
        )
        .await;

        let html = body_text(result.into_response()).await;
        assert!(html.contains("alert alert-warning"));
        assert!(html.contains("Please enter an OrderId"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect switching organization to list its couriers without a notice
    async fn selects_organization() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![
                    factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central")),
                    factory::organization("org-2", Some("Pizza North")),
                ],
                1,
            )
            .with_couriers_endpoint("org-2", vec![factory::courier("d7", "Oleg Orlov")], 1)
            .build()
            .await?;
        let form = PageForm {
            org_id: "org-2".to_string(),
            action: ACTION_SELECT_ORGANIZATION.to_string(),
            ..Default::default()
        };

        let result = submit_page(
            State(test.into_app_state()),
            test.session.clone(),
            Form(form),
        )
        .await;

        let html = body_text(result.into_response()).await;
        assert!(html.contains("Oleg Orlov"));
        assert!(!html.contains("alert alert-"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect the token cached by the first request to be reused by the second
    async fn reuses_session_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
            .with_organizations_endpoint(
                vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
                2,
            )
            .with_couriers_endpoint(TEST_ORGANIZATION_ID, vec![], 2)
            .build()
            .await?;
        let state = test.into_app_state();

        let first = show_page(State(state.clone()), test.session.clone()).await;
        let second = submit_page(
            State(state),
            test.session.clone(),
            Form(PageForm::default()),
        )
        .await;

        assert!(first.is_ok());
        assert!(second.is_ok());
        test.assert_mocks();

        Ok(())
    }
}
