use std::time::Duration;

use courier_switch::server::{model::app::AppState, syrve::client::SyrveClient};
use courier_switch_test_utils::{constant::TEST_API_LOGIN, TestContext};

/// Builds application state pointed at the test context's mock Syrve server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let syrve_client = SyrveClient::new(&self.api_url(), Duration::from_secs(5))
            .expect("Failed to build Syrve client");

        AppState::new(syrve_client, TEST_API_LOGIN.to_string(), Duration::ZERO)
    }
}
