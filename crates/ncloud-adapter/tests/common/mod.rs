/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ncloud-adapter tests

use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_ACCESS_KEY: &str = "test-access-key";
#[allow(dead_code)]
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// 1997-02-26T00:00:00Z in epoch milliseconds
#[allow(dead_code)]
pub const TEST_TIMESTAMP: i64 = 856_915_200_000;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}
