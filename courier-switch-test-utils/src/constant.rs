//! Placeholder values shared across tests. None of these are real credentials.

/// apiLogin the mock token endpoint expects.
pub static TEST_API_LOGIN: &str = "test-api-login";

/// Bearer token returned by the mock token endpoint by default.
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

pub static TEST_ORGANIZATION_ID: &str = "7bc05553-4b68-44e8-b7bc-37be63c6d9e9";

pub static TEST_ORDER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

pub static TEST_CORRELATION_ID: &str = "48fb4cd3-2ef6-4479-bea1-7c92721b988c";
