//! Monitor endpoints.

use tracing::debug;
use uptimerobot_config::constants::{DEFAULT_PAGE_LIMIT, MAX_RESPONSE_TIME_RANGE_DAYS};

use crate::endpoints::REQUIRED_PARAMETERS_MISSING;
use crate::endpoints::pagination::{Page, collect_pages};
use crate::endpoints::params::ApiParams;
use crate::endpoints::request::{ApiContext, call_api, send_api_request};
use crate::error::{ClientError, Result};
use crate::models::date::QUERY_DATE_FORMAT;
use crate::models::{
    ApiErrorCode, GetMonitorsInput, Monitor, MonitorListResponse, MonitorRefResponse,
    StatusResponse,
};

const GET_MONITORS: &str = "getMonitors";
const NEW_MONITOR: &str = "newMonitor";
const EDIT_MONITOR: &str = "editMonitor";
const DELETE_MONITOR: &str = "deleteMonitor";
const RESET_MONITOR: &str = "resetMonitor";

const RESPONSE_TIME_RANGE_INVALID: &str =
    "Logic error. Please check documentation for StartDate & EndDate";

/// Translate a [`GetMonitorsInput`] into query parameters (without paging).
fn get_monitors_params(input: &GetMonitorsInput) -> std::result::Result<ApiParams, String> {
    let mut params = ApiParams::new();

    crate::query_params! { params =>
        "monitors" => ids input.monitors.iter(),
        "types" => ids input.types.iter().map(|t| t.code()),
        "statuses" => ids input.statuses.iter().map(|s| s.code()),
        "customUptimeRatio" => ids input.custom_uptime_ratio_days.iter(),
        "logs" => flag input.logs,
        "responseTimes" => flag input.response_times,
        "responseTimeAverage" => input.response_time_average.filter(|avg| *avg > 0),
    }

    if let Some(range) = &input.response_time_range {
        let span = range.span_days();
        if input.monitors.len() != 1 || !(0..=MAX_RESPONSE_TIME_RANGE_DAYS).contains(&span) {
            return Err(RESPONSE_TIME_RANGE_INVALID.to_string());
        }
        params
            .set(
                "responseTimesStartDate",
                range.start.format(QUERY_DATE_FORMAT).to_string(),
            )
            .set(
                "responseTimesEndDate",
                range.end.format(QUERY_DATE_FORMAT).to_string(),
            );
    }

    crate::query_params! { params =>
        "alertContacts" => flag input.log_alert_contacts,
        "showMonitorAlertContacts" => flag input.show_monitor_alert_contacts,
        "showTimezone" => flag input.show_timezone,
        "search" => input.search.as_deref().map(str::trim).filter(|s| !s.is_empty()),
    }

    params.set("limit", DEFAULT_PAGE_LIMIT.to_string());
    Ok(params)
}

/// List monitors matching `input`, walking every page.
///
/// An account without monitors yields an empty list.
pub async fn list_monitors(ctx: &ApiContext<'_>, input: &GetMonitorsInput) -> Result<Vec<Monitor>> {
    let params =
        get_monitors_params(input).map_err(|message| ctx.validation_error(GET_MONITORS, message))?;

    collect_pages(0, |offset| {
        let mut params = params.clone();
        params.set("offset", offset.to_string());
        async move { fetch_monitor_page(ctx, &params, offset).await }
    })
    .await
}

async fn fetch_monitor_page(
    ctx: &ApiContext<'_>,
    params: &ApiParams,
    offset: usize,
) -> Result<Page<Monitor>> {
    let response: MonitorListResponse = send_api_request(ctx, GET_MONITORS, params).await?;

    if !response.status.stat.is_ok()
        && response.status.error_code() == Some(ApiErrorCode::AccountHasNoMonitors)
    {
        debug!("Account has no monitors");
        return Ok(Page::empty(offset));
    }
    ctx.check_stat(GET_MONITORS, &response.status)?;

    Ok(Page {
        offset: response.offset,
        limit: response.limit,
        total: response.total,
        items: response.monitors.monitor,
    })
}

/// Translate a monitor into `newMonitor` / `editMonitor` parameters.
fn save_monitor_params(monitor: &Monitor) -> std::result::Result<ApiParams, String> {
    if monitor.friendly_name.trim().is_empty() || monitor.url.trim().is_empty() {
        return Err(REQUIRED_PARAMETERS_MISSING.to_string());
    }

    let alert_contacts = monitor
        .alert_contacts
        .iter()
        .map(|c| c.monitor_assignment())
        .collect::<Vec<_>>()
        .join("-");

    let mut params = ApiParams::new();
    crate::query_params! { params =>
        "monitorFriendlyName" => required monitor.friendly_name,
        "monitorURL" => required monitor.url,
        "monitorType" => required monitor.monitor_type.code(),
        "monitorSubType" => monitor.subtype.map(|s| s.code()),
        "monitorPort" => monitor.port,
        "monitorKeywordType" => monitor.keyword_type.map(|k| k.code()),
        "monitorKeywordValue" => nonempty monitor.keyword_value,
        "monitorHTTPUsername" => nonempty monitor.http_username,
        "monitorHTTPPassword" => nonempty monitor.http_password,
        "monitorAlertContacts" => nonempty alert_contacts,
        "monitorInterval" => monitor.interval,
    }

    if !monitor.is_new() {
        params.set("monitorID", monitor.id.to_string());
    }
    Ok(params)
}

/// Create the monitor when `id == 0`, otherwise edit the existing one.
///
/// Returns the submitted record with the id (and status, when reported)
/// assigned by the API.
pub async fn save_monitor(ctx: &ApiContext<'_>, monitor: &Monitor) -> Result<Monitor> {
    let method = if monitor.is_new() {
        NEW_MONITOR
    } else {
        EDIT_MONITOR
    };
    let params =
        save_monitor_params(monitor).map_err(|message| ctx.validation_error(method, message))?;

    let response: MonitorRefResponse = call_api(ctx, method, &params).await?;

    let mut saved = monitor.clone();
    if let Some(reference) = response.monitor {
        if reference.id != 0 {
            saved.id = reference.id;
        }
        if let Some(status) = reference.status {
            saved.status = status;
        }
    }

    if saved.is_new() {
        return Err(ClientError::InvalidResponse(format!(
            "{method}: missing monitor id"
        )));
    }
    Ok(saved)
}

pub async fn delete_monitor(ctx: &ApiContext<'_>, id: u64) -> Result<()> {
    let mut params = ApiParams::new();
    params.set("monitorID", id.to_string());

    call_api::<StatusResponse>(ctx, DELETE_MONITOR, &params).await?;
    Ok(())
}

/// Delete all stats and response-time data of a monitor.
pub async fn reset_monitor(ctx: &ApiContext<'_>, id: u64) -> Result<()> {
    let mut params = ApiParams::new();
    params.set("monitorID", id.to_string());

    call_api::<StatusResponse>(ctx, RESET_MONITOR, &params).await?;
    Ok(())
}
