//! Account API methods for [`UptimeRobotClient`].

use crate::client::UptimeRobotClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::AccountDetails;

impl UptimeRobotClient {
    /// Fetch the monitor limit, interval and status counts of the account.
    pub async fn get_account_details(&self) -> Result<AccountDetails> {
        endpoints::get_account_details(&self.context()).await
    }
}
