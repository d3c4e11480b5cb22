//! Shared resource types for the DNSimple v2 API.
//!
//! Every service parses API payloads into these structs. Resources are
//! immutable snapshots of server state; mutating operations return a fresh
//! snapshot instead of updating one in place. The only client-side
//! constructors are the id carriers used to address requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An account reachable with the configured token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: Option<String>,
    pub plan_identifier: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Bare-id carrier for addressing requests under a known account.
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            email: None,
            plan_identifier: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A domain registered under an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub id: u64,
    pub account: Account,
    /// `None` only on id carriers built with [`Domain::with_id`].
    pub name: Option<String>,
    pub unicode_name: Option<String>,
    pub token: Option<String>,
    pub state: Option<String>,
    pub auto_renew: bool,
    pub private_whois: bool,
    pub expires_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domain {
    /// Id-only carrier for addressing a domain the caller never fetched,
    /// e.g. to scope a collaborator call to a known numeric id.
    pub fn with_id(id: u64, account: Account) -> Self {
        Self {
            id,
            account,
            name: None,
            unicode_name: None,
            token: None,
            state: None,
            auto_renew: false,
            private_whois: false,
            expires_on: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Path segment identifying this domain in request URLs: the name when
    /// known, the numeric id otherwise.
    pub(crate) fn handle(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

/// Wire shape of a domain payload. The API carries a bare `account_id`;
/// the public [`Domain`] nests the owning [`Account`] instead.
#[derive(Debug, Deserialize)]
pub(crate) struct DomainData {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    pub unicode_name: Option<String>,
    pub token: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    pub expires_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DomainData> for Domain {
    fn from(data: DomainData) -> Self {
        Self {
            id: data.id,
            account: Account::with_id(data.account_id),
            name: Some(data.name),
            unicode_name: data.unicode_name,
            token: data.token,
            state: data.state,
            auto_renew: data.auto_renew,
            private_whois: data.private_whois,
            expires_on: data.expires_on,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

/// A user granted access to manage a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: u64,
    pub domain_id: u64,
    pub domain_name: String,
    /// `None` until the invited user has a DNSimple account.
    pub user_id: Option<u64>,
    pub user_email: String,
    #[serde(default)]
    pub invitation: bool,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A rule forwarding mail from one address pattern to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailForward {
    pub id: u64,
    pub domain_id: u64,
    #[serde(rename = "from")]
    pub from_email: String,
    pub to: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes for registering a domain. The server validates the name.
#[derive(Debug, Clone, Serialize)]
pub struct DomainAttributes {
    pub name: String,
}

impl DomainAttributes {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Attributes for creating an email forward.
#[derive(Debug, Clone, Serialize)]
pub struct EmailForwardAttributes {
    #[serde(rename = "from")]
    pub from_email: String,
    pub to: String,
}

impl EmailForwardAttributes {
    pub fn new(from_email: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from_email: from_email.into(),
            to: to.into(),
        }
    }
}
