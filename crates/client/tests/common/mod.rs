//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at a wiremock server and use the key `test-key`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use uptimerobot_client::testing::{load_fixture, monitor_page};
#[allow(unused_imports)]
pub use uptimerobot_client::{ClientError, UptimeRobotClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";

/// A client talking to `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> UptimeRobotClient {
    UptimeRobotClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Query pairs of every request `server` received, in order.
#[allow(dead_code)]
pub async fn received_queries(server: &MockServer) -> Vec<Vec<(String, String)>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .collect()
}
