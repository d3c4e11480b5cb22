//! Service objects for the API's resource families.
//!
//! Each sub-module exposes the operations for one resource family. All
//! services borrow the shared [`crate::client::Dnsimple`] facade and issue
//! exactly one HTTP request per operation; responses are parsed into the
//! types in [`crate::types`].

pub mod accounts;
pub mod collaborators;
pub mod domains;
pub mod email_forwards;
