//! Domain operations.
//!
//! The `domain` parameter on single-domain calls is the name or the
//! numeric id, rendered into the path as-is; the server answers 404 with
//! a message naming that identifier when it does not exist under the
//! account.
//!
//! Reference: https://developer.dnsimple.com/v2/domains/

use reqwest::Method;

use super::collaborators::CollaboratorsService;
use super::email_forwards::EmailForwardsService;
use crate::client::Dnsimple;
use crate::error::DnsimpleError;
use crate::types::{Account, Domain, DomainAttributes, DomainData};

/// Operations on the domains under an account.
pub struct DomainsService<'a> {
    client: &'a Dnsimple,
}

impl<'a> DomainsService<'a> {
    pub(crate) fn new(client: &'a Dnsimple) -> Self {
        Self { client }
    }

    /// Collaborator operations, scoped to a domain per call.
    pub fn collaborators(&self) -> CollaboratorsService<'a> {
        CollaboratorsService::new(self.client)
    }

    /// Email-forward operations, scoped to a domain per call.
    pub fn email_forwards(&self) -> EmailForwardsService<'a> {
        EmailForwardsService::new(self.client)
    }

    /// List all domains in the account.
    pub async fn list(&self, account: &Account) -> Result<Vec<Domain>, DnsimpleError> {
        let data: Vec<DomainData> = self
            .client
            .fetch(Method::GET, &format!("/accounts/{}/domains", account.id))
            .await?;
        Ok(data.into_iter().map(Domain::from).collect())
    }

    /// Fetch a single domain.
    pub async fn get(&self, account: &Account, domain: &str) -> Result<Domain, DnsimpleError> {
        let data: DomainData = self
            .client
            .fetch(
                Method::GET,
                &format!("/accounts/{}/domains/{}", account.id, domain),
            )
            .await?;
        Ok(data.into())
    }

    /// Register a domain name under the account.
    ///
    /// The server validates the name; a blank or malformed one fails with
    /// [`DnsimpleError::Validation`] listing the violations per field.
    pub async fn create(
        &self,
        account: &Account,
        attributes: &DomainAttributes,
    ) -> Result<Domain, DnsimpleError> {
        let data: DomainData = self
            .client
            .submit(
                Method::POST,
                &format!("/accounts/{}/domains", account.id),
                attributes,
            )
            .await?;
        Ok(data.into())
    }

    /// Delete a domain. Returns nothing on success.
    pub async fn delete(&self, account: &Account, domain: &str) -> Result<(), DnsimpleError> {
        self.client
            .execute(
                Method::DELETE,
                &format!("/accounts/{}/domains/{}", account.id, domain),
            )
            .await
    }

    /// Issue a fresh API token for the domain. The returned snapshot is
    /// identical except for the token value.
    pub async fn reset_token(
        &self,
        account: &Account,
        domain: &str,
    ) -> Result<Domain, DnsimpleError> {
        let data: DomainData = self
            .client
            .fetch(
                Method::POST,
                &format!("/accounts/{}/domains/{}/token", account.id, domain),
            )
            .await?;
        Ok(data.into())
    }
}
