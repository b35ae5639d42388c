//! Common test utilities and helpers

use std::path::Path;
use std::time::Duration;

use oci_database::{DatabaseClient, RetryConfig};
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Unsigned client talking to the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> DatabaseClient {
    DatabaseClient::builder()
        .endpoint(server.uri())
        .build()
        .expect("Failed to build client")
}

/// Retry policy with near-zero sleeps
#[allow(dead_code)]
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig::builder()
        .max_attempts(max_attempts)
        .base_sleep_time(Duration::from_millis(1))
        .max_sleep_between_attempts(Duration::from_millis(5))
        .jitter(0.0)
        .build()
}
