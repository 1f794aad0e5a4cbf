//! Request helper tests.
//!
//! This module tests behaviour shared by every API method:
//! - Transport parameters on every request
//! - The cache-busting `v` parameter
//! - HTTP status and decode failures
//! - `stat` failures without a message
//!
//! # Invariants
//! - The API key never appears in an error message
//! - Every request is a GET to `<base_url>/<method>`

mod common;

use common::*;
use uptimerobot_client::endpoints::{ApiParams, send_api_request};
use uptimerobot_client::models::StatusResponse;
use uptimerobot_client::{GetMonitorsInput, MetricsCollector};
use wiremock::matchers::{method, path, query_param};

fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn test_transport_parameters_are_always_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .and(query_param("noJsonCallback", "1"))
        .and(query_param("format", "json"))
        .and(query_param("apiKey", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("account/get_account_details.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server).get_account_details().await.unwrap();

    let queries = received_queries(&mock_server).await;
    assert_eq!(query_value(&queries[0], "v"), None);
}

#[tokio::test]
async fn test_cache_buster_differs_between_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("account/get_account_details.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = UptimeRobotClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .disable_caching(true)
        .build()
        .unwrap();

    client.get_account_details().await.unwrap();
    client.get_account_details().await.unwrap();

    let queries = received_queries(&mock_server).await;
    let first = query_value(&queries[0], "v").expect("v on first request");
    let second = query_value(&queries[1], "v").expect("v on second request");
    assert!(first.parse::<i64>().is_ok());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_account_details()
        .await
        .unwrap_err();

    match &err {
        ClientError::HttpStatus { status, url, body } => {
            assert_eq!(*status, 503);
            assert_eq!(url, "/getAccountDetails");
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("jsonUptimeRobotApi({})"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_monitors(&GetMonitorsInput::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(err.to_string().contains("getMonitors"));
}

#[tokio::test]
async fn test_unknown_enum_code_is_invalid_response() {
    let mock_server = MockServer::start().await;

    let mut body = monitor_page(0, 50, 1, &[1]);
    body["monitors"]["monitor"][0]["status"] = serde_json::json!("7");

    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_monitors(&GetMonitorsInput::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(err.to_string().contains("unknown"));
}

#[tokio::test]
async fn test_failed_stat_without_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deleteMonitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"stat": "fail"})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).delete_monitor(1).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "API error from deleteMonitor: Got unexpected status: fail"
    );
}

#[tokio::test]
async fn test_send_api_request_leaves_stat_to_the_caller() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("monitors/no_monitors.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let http = reqwest::Client::new();
    let api_key = secrecy::SecretString::from(TEST_API_KEY.to_string());
    let metrics = MetricsCollector::new();
    let ctx = uptimerobot_client::endpoints::ApiContext {
        http: &http,
        base_url: client.base_url(),
        api_key: &api_key,
        disable_caching: false,
        metrics: Some(&metrics),
    };

    let status: StatusResponse = send_api_request(&ctx, "getMonitors", &ApiParams::new())
        .await
        .unwrap();
    assert!(!status.stat.is_ok());
    assert_eq!(status.id, Some(212));
}

#[tokio::test]
async fn test_client_with_metrics_still_returns_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getAccountDetails"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("account/get_account_details.json")),
        )
        .mount(&mock_server)
        .await;

    let client = UptimeRobotClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .metrics(MetricsCollector::new())
        .build()
        .unwrap();

    assert_eq!(client.get_account_details().await.unwrap().monitor_limit, 50);
}
