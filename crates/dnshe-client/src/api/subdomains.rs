//! Subdomain endpoints: listing and lease renewal.

use dnshe_core::{Credentials, ListResponse, RenewResponse, Result};
use serde::Serialize;

use crate::ApiClient;

/// Subdomain endpoints, scoped to one account's credentials
pub struct SubdomainsApi<'a> {
    client: &'a ApiClient,
    credentials: &'a Credentials,
}

#[derive(Serialize)]
struct RenewRequest<'a> {
    subdomain_id: &'a str,
}

impl<'a> SubdomainsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// List all subdomains owned by the account
    pub async fn list(&self) -> Result<ListResponse> {
        self.client
            .get("subdomains", "list", Some(self.credentials))
            .await
    }

    /// Renew one subdomain lease by its provider-side id
    pub async fn renew(&self, subdomain_id: &str) -> Result<RenewResponse> {
        self.client
            .post(
                "subdomains",
                "renew",
                Some(self.credentials),
                &RenewRequest { subdomain_id },
            )
            .await
    }
}
