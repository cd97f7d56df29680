use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome status of one renewal attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalStatus {
    /// The provider accepted the renewal
    Success,
    /// The renewal was rejected or the call failed
    Failed,
}

/// The recorded result of one renewal attempt. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct RenewalOutcome {
    /// Success or failure
    pub status: RenewalStatus,

    /// Human-readable detail line for the report
    pub message: String,
}

impl RenewalOutcome {
    /// Successful renewal; `new_expiry` is the provider-reported expiry or
    /// `None` when the response omitted it.
    #[must_use]
    pub fn success(new_expiry: Option<&str>) -> Self {
        Self {
            status: RenewalStatus::Success,
            message: format!("renewed, new expiry {}", new_expiry.unwrap_or("unknown")),
        }
    }

    /// Failed renewal with the given detail message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: RenewalStatus::Failed,
            message: message.into(),
        }
    }

    /// Returns true for a successful outcome
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, RenewalStatus::Success)
    }
}

/// One domain together with its renewal outcome
#[derive(Debug, Clone, Serialize)]
pub struct DomainRenewal {
    /// Fully qualified domain name
    pub domain: String,

    /// What happened when it was renewed
    pub outcome: RenewalOutcome,
}

/// What processing one account produced.
#[derive(Debug, Clone, Serialize)]
pub enum AccountReport {
    /// The subdomain list could not be fetched
    Error(String),

    /// Nothing to do (e.g. the account owns no subdomains)
    Info(String),

    /// Renewal attempts, in list order
    Renewals(Vec<DomainRenewal>),
}

/// One batch-runner entry: an account position plus its report.
///
/// `report` is `None` when the account was skipped for missing credentials.
#[derive(Debug, Clone, Serialize)]
pub struct RunEntry {
    /// Zero-based position in the input account array
    pub account_index: usize,

    /// The account's result, or `None` if skipped
    pub report: Option<AccountReport>,
}

/// The aggregate result of one batch run. Lives only for the duration of
/// the run; nothing is persisted beyond the rendered summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started
    pub generated_at: DateTime<Local>,

    /// Per-account entries, in input order
    pub entries: Vec<RunEntry>,
}

impl RunReport {
    /// New empty report stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    /// New empty report with an explicit timestamp
    #[must_use]
    pub const fn at(generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            entries: Vec::new(),
        }
    }

    /// Append one account's entry
    pub fn push(&mut self, account_index: usize, report: Option<AccountReport>) {
        self.entries.push(RunEntry {
            account_index,
            report,
        });
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_outcome_carries_the_new_expiry() {
        let outcome = RenewalOutcome::success(Some("2026-01-01"));
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "renewed, new expiry 2026-01-01");
    }

    #[test]
    fn success_outcome_without_expiry_says_unknown() {
        let outcome = RenewalOutcome::success(None);
        assert_eq!(outcome.message, "renewed, new expiry unknown");
    }

    #[test]
    fn failed_outcome_keeps_the_message() {
        let outcome = RenewalOutcome::failed("rate limited: HTTP 429");
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "rate limited: HTTP 429");
    }

    #[test]
    fn entries_preserve_push_order() {
        let mut report = RunReport::new();
        report.push(0, None);
        report.push(1, Some(AccountReport::Info("no subdomains".to_string())));
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].account_index, 0);
        assert!(report.entries[0].report.is_none());
        assert_eq!(report.entries[1].account_index, 1);
    }
}
