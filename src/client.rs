//! Client facade for the DNSimple v2 API.
//!
//! [`Dnsimple`] owns the HTTP session: the `reqwest` client, the base URL
//! and the bearer token, all read-only after construction. Services borrow
//! it and issue exactly one request per operation through the helpers
//! here, which unwrap the `{"data": ...}` success envelope and hand every
//! non-2xx response to error translation.

use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DnsimpleError, ErrorBody};
use crate::services::accounts::AccountsService;
use crate::services::domains::DomainsService;

const DNSIMPLE_API: &str = "https://api.dnsimple.com/v2";
const SANDBOX_API: &str = "https://api.sandbox.dnsimple.com/v2";

/// Envelope wrapping every successful JSON body. Extra members such as
/// `pagination` are ignored.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct Dnsimple {
    client: Client,
    base_url: String,
    token: String,
}

impl Dnsimple {
    /// Client against the production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DNSIMPLE_API.to_string(),
            token: token.into(),
        }
    }

    /// Client against the hosted sandbox environment.
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: SANDBOX_API.to_string(),
            token: token.into(),
        }
    }

    /// Start building a client with a custom configuration.
    pub fn builder() -> DnsimpleBuilder {
        DnsimpleBuilder::default()
    }

    /// Account operations.
    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Domain operations, with collaborator and email-forward services
    /// nested under them.
    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    /// GET/POST without a body, unwrapping the data envelope.
    pub(crate) async fn fetch<T>(&self, method: Method, path: &str) -> Result<T, DnsimpleError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, None::<&()>).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// POST a JSON body, unwrapping the data envelope.
    pub(crate) async fn submit<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, DnsimpleError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.dispatch(method, path, Some(body)).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Issue a request whose success response carries no body.
    pub(crate) async fn execute(&self, method: Method, path: &str) -> Result<(), DnsimpleError> {
        self.dispatch(method, path, None::<&()>).await?;
        Ok(())
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, DnsimpleError>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%url, %status, "received response");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let body = serde_json::from_str(&text)
            .unwrap_or_else(|_| ErrorBody::from_raw(status, &text));
        Err(DnsimpleError::from_response(status, body))
    }
}

/// Builder for [`Dnsimple`].
#[derive(Debug)]
pub struct DnsimpleBuilder {
    base_url: String,
    user_agent: Option<String>,
    timeout: Duration,
}

impl Default for DnsimpleBuilder {
    fn default() -> Self {
        Self {
            base_url: DNSIMPLE_API.to_string(),
            user_agent: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl DnsimpleBuilder {
    /// Point the client at another host, e.g. the sandbox or a test double.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self, token: impl Into<String>) -> Result<Dnsimple, DnsimpleError> {
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder.build()?;

        Ok(Dnsimple {
            client,
            base_url: self.base_url,
            token: token.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_the_production_api() {
        let client = Dnsimple::builder().build("token").expect("client");
        assert_eq!(client.base_url, DNSIMPLE_API);
    }

    #[test]
    fn builder_trims_trailing_slashes_from_the_base_url() {
        let client = Dnsimple::builder()
            .base_url("http://127.0.0.1:4321/")
            .build("token")
            .expect("client");
        assert_eq!(client.base_url, "http://127.0.0.1:4321");
    }

    #[test]
    fn sandbox_targets_the_hosted_sandbox() {
        let client = Dnsimple::sandbox("token");
        assert_eq!(client.base_url, SANDBOX_API);
    }

    #[test]
    fn envelope_ignores_pagination_members() {
        let envelope: Envelope<Vec<u64>> = serde_json::from_str(
            r#"{"data": [1, 2], "pagination": {"current_page": 1, "total_pages": 1}}"#,
        )
        .expect("envelope");
        assert_eq!(envelope.data, vec![1, 2]);
    }
}
