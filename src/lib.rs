//! Client for the DNSimple v2 domain-registration and DNS management API.
//!
//! Resources (accounts, domains, collaborators, email forwards) are typed
//! snapshots of server state. Per-family services expose CRUD-style
//! operations, each issuing a single HTTP request; the server is the sole
//! source of truth, so nothing is cached or validated locally and every
//! non-2xx response surfaces as a typed [`DnsimpleError`].
//!
//! # Quick start
//!
//! ```no_run
//! use dnsimple_api::{Account, Dnsimple, DomainAttributes};
//!
//! # async fn run() -> Result<(), dnsimple_api::DnsimpleError> {
//! let client = Dnsimple::new("api-token");
//! let account = Account::with_id(1010);
//!
//! let domain = client
//!     .domains()
//!     .create(&account, &DomainAttributes::new("example.org"))
//!     .await?;
//! let refreshed = client
//!     .domains()
//!     .reset_token(&account, "example.org")
//!     .await?;
//! assert_eq!(domain.id, refreshed.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{Dnsimple, DnsimpleBuilder};
pub use error::{DnsimpleError, ErrorBody};
pub use types::{
    Account, Collaborator, Domain, DomainAttributes, EmailForward, EmailForwardAttributes,
};
