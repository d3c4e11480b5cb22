//! Email-forward operations, scoped to a domain.
//!
//! Reference: https://developer.dnsimple.com/v2/domains/email-forwards/

use reqwest::Method;

use crate::client::Dnsimple;
use crate::error::DnsimpleError;
use crate::types::{Domain, EmailForward, EmailForwardAttributes};

/// Operations on the email forwards of a domain.
pub struct EmailForwardsService<'a> {
    client: &'a Dnsimple,
}

impl<'a> EmailForwardsService<'a> {
    pub(crate) fn new(client: &'a Dnsimple) -> Self {
        Self { client }
    }

    /// List the forwards configured for the domain.
    pub async fn list(&self, domain: &Domain) -> Result<Vec<EmailForward>, DnsimpleError> {
        self.client
            .fetch(
                Method::GET,
                &format!(
                    "/accounts/{}/domains/{}/email_forwards",
                    domain.account.id,
                    domain.handle()
                ),
            )
            .await
    }

    /// Fetch a single forward by server-assigned id.
    pub async fn get(&self, domain: &Domain, id: u64) -> Result<EmailForward, DnsimpleError> {
        self.client
            .fetch(
                Method::GET,
                &format!(
                    "/accounts/{}/domains/{}/email_forwards/{}",
                    domain.account.id,
                    domain.handle(),
                    id
                ),
            )
            .await
    }

    /// Create a forward from one address pattern to another.
    ///
    /// The live API currently answers 500 for this call; the error is
    /// passed through as [`DnsimpleError::Server`] until upstream resolves
    /// it.
    pub async fn create(
        &self,
        domain: &Domain,
        attributes: &EmailForwardAttributes,
    ) -> Result<EmailForward, DnsimpleError> {
        self.client
            .submit(
                Method::POST,
                &format!(
                    "/accounts/{}/domains/{}/email_forwards",
                    domain.account.id,
                    domain.handle()
                ),
                attributes,
            )
            .await
    }
}
