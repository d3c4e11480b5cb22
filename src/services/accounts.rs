//! Account operations.
//!
//! Reference: https://developer.dnsimple.com/v2/accounts/

use reqwest::Method;

use crate::client::Dnsimple;
use crate::error::DnsimpleError;
use crate::types::Account;

/// Operations on the accounts visible to the configured token.
pub struct AccountsService<'a> {
    client: &'a Dnsimple,
}

impl<'a> AccountsService<'a> {
    pub(crate) fn new(client: &'a Dnsimple) -> Self {
        Self { client }
    }

    /// List the accounts the token can access.
    pub async fn list(&self) -> Result<Vec<Account>, DnsimpleError> {
        self.client.fetch(Method::GET, "/accounts").await
    }
}
