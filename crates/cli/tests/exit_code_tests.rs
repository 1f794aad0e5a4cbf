//! Integration tests for structured exit codes.
//!
//! These tests verify that `uptimerobot` returns the documented exit codes
//! so scripts can tell failure modes apart.

mod common;

use common::{uptimerobot_cmd, uptimerobot_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_remote_failure_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stat": "fail",
            "id": "101",
            "message": "apiKey is wrong"
        })))
        .mount(&server)
        .await;

    uptimerobot_cmd_with_base_url(&server.uri())
        .arg("account")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("apiKey is wrong"));
}

#[tokio::test]
async fn test_http_status_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    uptimerobot_cmd_with_base_url(&server.uri())
        .arg("account")
        .assert()
        .code(2);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    uptimerobot_cmd_with_base_url("http://127.0.0.1:1")
        .arg("account")
        .assert()
        .code(3);
}

#[test]
fn test_validation_failure_returns_exit_code_5() {
    // Rejected before any request, so no server is needed.
    uptimerobot_cmd_with_base_url("http://127.0.0.1:1")
        .args([
            "contacts",
            "create",
            "--type",
            "email",
            "--value",
            "ops@example.com",
            "--name",
            "this display name is far too long",
        ])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "FriendlyName may not have more than 30 chars",
        ));
}

#[test]
fn test_missing_api_key_returns_exit_code_1() {
    uptimerobot_cmd()
        .env_remove("UPTIMEROBOT_API_KEY")
        .arg("account")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required"));
}

#[test]
fn test_invalid_type_is_a_usage_error() {
    uptimerobot_cmd()
        .args(["contacts", "create", "--type", "carrier-pigeon", "--value", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown"));
}
