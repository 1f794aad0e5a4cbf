//! Alert contact endpoints.

use tracing::debug;
use uptimerobot_config::constants::{DEFAULT_PAGE_LIMIT, MAX_FRIENDLY_NAME_LEN};

use crate::endpoints::REQUIRED_PARAMETERS_MISSING;
use crate::endpoints::pagination::{Page, collect_pages};
use crate::endpoints::params::ApiParams;
use crate::endpoints::request::{ApiContext, call_api, send_api_request};
use crate::error::{ClientError, Result};
use crate::models::{
    AlertContact, AlertContactListResponse, AlertContactRefResponse, AlertContactStatus,
    AlertContactType, ApiErrorCode, NewAlertContact, StatusResponse,
};

const GET_ALERT_CONTACTS: &str = "getAlertContacts";
const NEW_ALERT_CONTACT: &str = "newAlertContact";
const DELETE_ALERT_CONTACT: &str = "deleteAlertContact";

/// List alert contacts, optionally restricted to `ids`.
///
/// An account without contacts yields an empty list.
pub async fn list_alert_contacts(ctx: &ApiContext<'_>, ids: &[u64]) -> Result<Vec<AlertContact>> {
    let mut params = ApiParams::new();
    params
        .set_ids("alertcontacts", ids.iter())
        .set("limit", DEFAULT_PAGE_LIMIT.to_string());

    collect_pages(0, |offset| {
        let mut params = params.clone();
        params.set("offset", offset.to_string());
        async move { fetch_alert_contact_page(ctx, &params, offset).await }
    })
    .await
}

async fn fetch_alert_contact_page(
    ctx: &ApiContext<'_>,
    params: &ApiParams,
    offset: usize,
) -> Result<Page<AlertContact>> {
    let response: AlertContactListResponse =
        send_api_request(ctx, GET_ALERT_CONTACTS, params).await?;

    if !response.status.stat.is_ok()
        && response.status.error_code() == Some(ApiErrorCode::AccountHasNoAlertContacts)
    {
        debug!("Account has no alert contacts");
        return Ok(Page::empty(offset));
    }
    ctx.check_stat(GET_ALERT_CONTACTS, &response.status)?;

    Ok(Page {
        offset: response.offset,
        limit: response.limit,
        total: response.total,
        items: response.alertcontacts.alertcontact,
    })
}

/// Check a new contact before it is sent, returning its type.
fn validate_new_alert_contact(
    input: &NewAlertContact,
) -> std::result::Result<AlertContactType, String> {
    let contact_type = match input.contact_type {
        Some(contact_type) if !input.value.trim().is_empty() => contact_type,
        _ => return Err(REQUIRED_PARAMETERS_MISSING.to_string()),
    };

    let name_len = input
        .friendly_name
        .as_deref()
        .map_or(0, |name| name.chars().count());
    if name_len > MAX_FRIENDLY_NAME_LEN {
        return Err(format!(
            "FriendlyName may not have more than {MAX_FRIENDLY_NAME_LEN} chars"
        ));
    }

    Ok(contact_type)
}

/// Create an alert contact. New contacts start out not activated.
pub async fn create_alert_contact(
    ctx: &ApiContext<'_>,
    input: &NewAlertContact,
) -> Result<AlertContact> {
    let contact_type = validate_new_alert_contact(input)
        .map_err(|message| ctx.validation_error(NEW_ALERT_CONTACT, message))?;

    let mut params = ApiParams::new();
    crate::query_params! { params =>
        "alertContactType" => required contact_type.code(),
        "alertContactValue" => required input.value,
        "alertContactFriendlyName" => input.friendly_name.as_deref().filter(|n| !n.is_empty()),
    }

    let response: AlertContactRefResponse = call_api(ctx, NEW_ALERT_CONTACT, &params).await?;
    let created = response.alertcontact.ok_or_else(|| {
        ClientError::InvalidResponse(format!("{NEW_ALERT_CONTACT}: missing alertcontact"))
    })?;

    Ok(AlertContact {
        id: created.id,
        contact_type,
        value: input.value.clone(),
        status: Some(created.status.unwrap_or(AlertContactStatus::NotActivated)),
        threshold: None,
        recurrence: None,
        friendly_name: input.friendly_name.clone().unwrap_or_default(),
    })
}

pub async fn delete_alert_contact(ctx: &ApiContext<'_>, id: u64) -> Result<()> {
    let mut params = ApiParams::new();
    params.set("alertContactID", id.to_string());

    call_api::<StatusResponse>(ctx, DELETE_ALERT_CONTACT, &params).await?;
    Ok(())
}
