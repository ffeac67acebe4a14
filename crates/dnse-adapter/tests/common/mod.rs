/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dnse-adapter tests

use dnse_adapter::{ClientConfig, DnseClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with fixed test credentials
pub fn test_client(base_url: &str) -> DnseClient {
    let config = ClientConfig::new("test-key", "abc123").with_base_url(base_url);
    DnseClient::new(config).expect("client init")
}

/// Same as [`test_client`] but with nonce generation switched off
pub fn test_client_without_nonce(base_url: &str) -> DnseClient {
    let config = ClientConfig::new("test-key", "abc123")
        .with_base_url(base_url)
        .with_nonce_enabled(false);
    DnseClient::new(config).expect("client init")
}
