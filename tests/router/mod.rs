use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use courier_switch::server::{router::routes, startup::memory_session};
use courier_switch_test_utils::{
    constant::{TEST_ACCESS_TOKEN, TEST_API_LOGIN, TEST_ORGANIZATION_ID},
    prelude::*,
};
use serde_json::json;
use tower::ServiceExt;

use crate::TestContextExt;

#[tokio::test]
/// Expect GET / to render the page and set a session cookie
async fn get_renders_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
        .with_organizations_endpoint(
            vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
            1,
        )
        .with_couriers_endpoint(TEST_ORGANIZATION_ID, vec![], 1)
        .build()
        .await?;
    let app = routes()
        .with_state(test.into_app_state())
        .layer(memory_session());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Change driver (Syrve/iikoCloud)"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect POST / to decode the urlencoded form and run the change-driver command
async fn post_submits_change_driver_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_token_endpoint(TEST_API_LOGIN, Some(TEST_ACCESS_TOKEN), 1)
        .with_organizations_endpoint(
            vec![factory::organization(TEST_ORGANIZATION_ID, Some("Pizza Central"))],
            1,
        )
        .with_couriers_endpoint(TEST_ORGANIZATION_ID, vec![], 1)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/deliveries/change_driver_info")
                .match_body(mockito::Matcher::Json(json!({
                    "organizationId": TEST_ORGANIZATION_ID,
                    "orderId": "abc-123"
                })))
                .with_status(200)
                .with_body(r#"{"correlationId":"corr-1"}"#)
                .expect(1)
                .create()
        })
        .with_command_status_endpoint(
            TEST_ORGANIZATION_ID,
            "corr-1",
            json!({"state": "Success"}),
            1,
        )
        .build()
        .await?;
    let app = routes()
        .with_state(test.into_app_state())
        .layer(memory_session());
    let body = format!(
        "orgId={}&action=changeDriver&orderId=+abc-123+&driverId=&estimatedTime=",
        TEST_ORGANIZATION_ID
    );

    let response = app
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("alert alert-success"));
    assert!(html.contains("Driver changed successfully"));
    test.assert_mocks();

    Ok(())
}
