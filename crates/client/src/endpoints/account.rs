//! Account endpoint.

use crate::endpoints::params::ApiParams;
use crate::endpoints::request::{ApiContext, call_api};
use crate::error::{ClientError, Result};
use crate::models::{AccountDetails, AccountDetailsResponse};

const GET_ACCOUNT_DETAILS: &str = "getAccountDetails";

/// Fetch monitor limits and up/down/paused counters for the account.
pub async fn get_account_details(ctx: &ApiContext<'_>) -> Result<AccountDetails> {
    let response: AccountDetailsResponse =
        call_api(ctx, GET_ACCOUNT_DETAILS, &ApiParams::new()).await?;

    response.account.ok_or_else(|| {
        ClientError::InvalidResponse(format!("{GET_ACCOUNT_DETAILS}: missing account"))
    })
}
