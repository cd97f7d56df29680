//! Sequential batch processing: one account at a time, one renewal at a
//! time. Nothing below the configuration layer aborts the run; every
//! failure is recorded and execution moves to the next item.

use dnshe_client::api::SubdomainsApi;
use dnshe_client::ApiClient;
use dnshe_core::{Account, AccountReport, DomainRenewal, RenewalOutcome, RunReport};
use tracing::{info, warn};

/// Process every account in input order and collect the run report.
///
/// One account's failure never blocks the accounts after it.
pub async fn run_batch(client: &ApiClient, accounts: &[Account]) -> RunReport {
    let mut report = RunReport::new();
    let total = accounts.len();

    for (index, account) in accounts.iter().enumerate() {
        info!(account = index + 1, total, "processing account");
        let result = process_account(client, account).await;
        report.push(index, result);
    }

    report
}

/// Process one account: list its subdomains and renew each of them.
///
/// Returns `None` when the account has no usable credentials; no network
/// call is made in that case.
pub async fn process_account(client: &ApiClient, account: &Account) -> Option<AccountReport> {
    let Some(credentials) = account.credentials() else {
        warn!("account is missing key or secret, skipping");
        return None;
    };

    let api = client.subdomains(&credentials);

    let list = match api.list().await {
        Ok(resp) if resp.success => resp,
        Ok(resp) => {
            let message = resp.failure_message();
            warn!(message = %message, "subdomain list fetch rejected");
            return Some(AccountReport::Error(message));
        }
        Err(err) => {
            warn!(error = %err, "subdomain list fetch failed");
            return Some(AccountReport::Error(err.to_string()));
        }
    };

    if list.subdomains.is_empty() {
        info!("account owns no subdomains");
        return Some(AccountReport::Info("no subdomains".to_string()));
    }

    let mut renewals = Vec::with_capacity(list.subdomains.len());
    for entry in &list.subdomains {
        let Some(id) = entry.id.as_deref().filter(|id| !id.is_empty()) else {
            warn!(domain = %entry.domain_name(), "subdomain entry has no id, skipping");
            continue;
        };

        let domain = entry.domain_name();
        let outcome = renew_subdomain(&api, id, &domain).await;
        renewals.push(DomainRenewal { domain, outcome });
    }

    Some(AccountReport::Renewals(renewals))
}

/// Attempt one renewal and record the outcome, whatever happens.
pub async fn renew_subdomain(
    api: &SubdomainsApi<'_>,
    subdomain_id: &str,
    domain: &str,
) -> RenewalOutcome {
    info!(domain, subdomain_id, "attempting renewal");

    match api.renew(subdomain_id).await {
        Ok(resp) if resp.success => {
            let outcome = RenewalOutcome::success(resp.new_expires_at.as_deref());
            info!(domain, message = %outcome.message, "renewal succeeded");
            outcome
        }
        Ok(resp) => {
            let outcome = RenewalOutcome::failed(resp.failure_message());
            warn!(domain, message = %outcome.message, "renewal rejected");
            outcome
        }
        Err(err) => {
            let outcome = RenewalOutcome::failed(err.to_string());
            warn!(domain, message = %outcome.message, "renewal call failed");
            outcome
        }
    }
}
