#![allow(dead_code)]

//! Shared helpers for the wiremock-backed integration tests.
//!
//! Every test gets its own mock server and client; payload builders mirror
//! the v2 API's JSON shapes.

use dnsimple_api::{Account, Dnsimple, Domain, DomainAttributes};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT_ID: u64 = 1010;

/// Mock server plus a client pointed at it.
pub async fn setup() -> (MockServer, Dnsimple) {
    let server = MockServer::start().await;
    let client = Dnsimple::builder()
        .base_url(server.uri())
        .build("test-token")
        .expect("client");
    (server, client)
}

pub fn account() -> Account {
    Account::with_id(ACCOUNT_ID)
}

/// Wrap a payload in the success envelope.
pub fn data(value: Value) -> Value {
    json!({ "data": value })
}

/// Domain payload as the v2 API serialises it.
pub fn domain_payload(id: u64, name: &str, token: &str) -> Value {
    json!({
        "id": id,
        "account_id": ACCOUNT_ID,
        "name": name,
        "unicode_name": name,
        "token": token,
        "state": "registered",
        "auto_renew": false,
        "private_whois": false,
        "expires_on": "2027-08-06",
        "created_at": "2026-08-06T10:16:46Z",
        "updated_at": "2026-08-06T10:16:47Z"
    })
}

/// Collaborator payload for a user who has not accepted yet.
pub fn collaborator_payload(id: u64, domain_id: u64, domain_name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "domain_id": domain_id,
        "domain_name": domain_name,
        "user_id": null,
        "user_email": email,
        "invitation": true,
        "accepted_at": null,
        "created_at": "2026-08-06T11:02:31Z",
        "updated_at": "2026-08-06T11:02:31Z"
    })
}

/// Email-forward payload as the v2 API serialises it.
pub fn email_forward_payload(id: u64, domain_id: u64, from: &str, to: &str) -> Value {
    json!({
        "id": id,
        "domain_id": domain_id,
        "from": from,
        "to": to,
        "created_at": "2026-08-06T11:31:08Z",
        "updated_at": "2026-08-06T11:31:08Z"
    })
}

/// Not-found body naming the missing identifier.
pub fn not_found_body(kind: &str, handle: &str) -> Value {
    json!({ "message": format!("{} `{}` not found", kind, handle) })
}

/// Create a domain through a mocked POST so later calls hold a snapshot
/// the server produced, like callers do against the real API.
pub async fn seed_domain(server: &MockServer, client: &Dnsimple, id: u64, name: &str) -> Domain {
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{}/domains", ACCOUNT_ID)))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(data(domain_payload(id, name, "domain-token"))),
        )
        .mount(server)
        .await;

    client
        .domains()
        .create(&account(), &DomainAttributes::new(name))
        .await
        .expect("seed domain")
}
