//! Request/decode helper shared by every API method.
//!
//! Responsibilities:
//! - Add the transport parameters (`noJsonCallback`, `format`, `apiKey`, and
//!   the cache buster `v` when enabled) and issue the GET request.
//! - Map non-2xx statuses and undecodable bodies to typed errors.
//! - Record request metrics and log the exchange without the API key.
//!
//! # What this module does NOT handle:
//! - Interpreting `stat` for endpoints that treat some failures as empty results
//!   (they call [`send_api_request`] and inspect the status themselves)
//! - Retries (none are performed)

use std::time::Instant;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::endpoints::params::ApiParams;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApiEnvelope, StatusResponse, check_stat};

/// Everything an endpoint function needs to talk to the API.
#[derive(Debug, Clone, Copy)]
pub struct ApiContext<'a> {
    pub http: &'a reqwest::Client,
    /// Normalized, without a trailing slash.
    pub base_url: &'a str,
    pub api_key: &'a SecretString,
    /// Append a unique `v` parameter so intermediaries cannot serve cached bodies.
    pub disable_caching: bool,
    pub metrics: Option<&'a MetricsCollector>,
}

impl ApiContext<'_> {
    /// Count a failure that happened outside [`send_api_request`].
    pub fn record_error(&self, method: &str, error: &ClientError) {
        if let Some(metrics) = self.metrics {
            metrics.record_client_error(method, error);
        }
    }

    /// [`check_stat`], recording the failure.
    pub fn check_stat(&self, method: &str, status: &StatusResponse) -> Result<()> {
        check_stat(method, status).inspect_err(|e| self.record_error(method, e))
    }

    /// Reject invalid input before anything is sent.
    pub fn validation_error(&self, method: &str, message: impl Into<String>) -> ClientError {
        let err = ClientError::ValidationError(message.into());
        self.record_error(method, &err);
        err
    }
}

fn cache_buster() -> String {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .to_string()
}

/// Send `GET <base_url>/<method>` and decode the body as `T`.
///
/// The decoded `stat` is not inspected here.
pub async fn send_api_request<T: DeserializeOwned>(
    ctx: &ApiContext<'_>,
    method: &str,
    params: &ApiParams,
) -> Result<T> {
    let url = format!("{}/{}", ctx.base_url, method);

    let mut query: Vec<(&str, &str)> = params.iter().collect();
    query.push(("noJsonCallback", "1"));
    query.push(("format", "json"));
    query.push(("apiKey", ctx.api_key.expose_secret()));
    let buster = ctx.disable_caching.then(cache_buster);
    if let Some(v) = &buster {
        query.push(("v", v.as_str()));
    }

    debug!(method, params = %params.redacted(), "Sending UptimeRobot API request");

    if let Some(metrics) = ctx.metrics {
        metrics.record_request(method);
    }
    let start = Instant::now();

    let response = match ctx.http.get(&url).query(&query).send().await {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e.without_url());
            if let Some(metrics) = ctx.metrics {
                metrics.record_request_duration(method, start.elapsed(), None);
            }
            ctx.record_error(method, &err);
            return Err(err);
        }
    };

    let status = response.status();
    let path = response.url().path().to_string();
    let body = response.text().await.map_err(|e| {
        let err = ClientError::from(e.without_url());
        ctx.record_error(method, &err);
        err
    })?;

    if let Some(metrics) = ctx.metrics {
        metrics.record_request_duration(method, start.elapsed(), Some(status.as_u16()));
    }
    trace!(method, status = status.as_u16(), body = %body, "Received UptimeRobot API response");

    if !status.is_success() {
        let err = ClientError::HttpStatus {
            status: status.as_u16(),
            url: path,
            body,
        };
        ctx.record_error(method, &err);
        return Err(err);
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        let err = ClientError::InvalidResponse(format!("{method}: {e}"));
        ctx.record_error(method, &err);
        err
    })
}

/// [`send_api_request`] followed by a `stat` check.
pub async fn call_api<T>(ctx: &ApiContext<'_>, method: &str, params: &ApiParams) -> Result<T>
where
    T: DeserializeOwned + ApiEnvelope,
{
    let response: T = send_api_request(ctx, method, params).await?;
    ctx.check_stat(method, response.status())?;
    Ok(response)
}
