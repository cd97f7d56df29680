use serde::{Deserialize, Serialize};

/// One subdomain as returned by the `list` action.
///
/// All fields are optional on the wire; entries without an `id` cannot be
/// renewed and are skipped by the account processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubdomainEntry {
    /// Provider-side identifier, required for renewal
    #[serde(default)]
    pub id: Option<String>,

    /// Subdomain label (the part owned by the account)
    #[serde(default)]
    pub subdomain: Option<String>,

    /// Root domain the label hangs off
    #[serde(default)]
    pub rootdomain: Option<String>,

    /// Fully qualified name, when the provider supplies it directly
    #[serde(default)]
    pub full_domain: Option<String>,

    /// Current lease expiry
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl SubdomainEntry {
    /// The fully qualified name for display and reporting.
    ///
    /// Prefers the provider's `full_domain` field and falls back to
    /// `subdomain.rootdomain`.
    #[must_use]
    pub fn domain_name(&self) -> String {
        if let Some(full) = self.full_domain.as_deref().filter(|s| !s.is_empty()) {
            return full.to_string();
        }
        format!(
            "{}.{}",
            self.subdomain.as_deref().unwrap_or(""),
            self.rootdomain.as_deref().unwrap_or("")
        )
    }
}

/// Response body of the `list` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    /// Application-level success flag
    #[serde(default)]
    pub success: bool,

    /// Human-readable message on failure
    #[serde(default)]
    pub message: Option<String>,

    /// Alternate error field some responses use
    #[serde(default)]
    pub error: Option<String>,

    /// Subdomains owned by the account
    #[serde(default)]
    pub subdomains: Vec<SubdomainEntry>,
}

impl ListResponse {
    /// Message to record when `success` is false: `message`, then `error`,
    /// then a generic fallback.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("failed to fetch subdomain list")
            .to_string()
    }
}

/// Response body of the `renew` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenewResponse {
    /// Application-level success flag
    #[serde(default)]
    pub success: bool,

    /// New lease expiry after a successful renewal
    #[serde(default)]
    pub new_expires_at: Option<String>,

    /// Human-readable message on failure
    #[serde(default)]
    pub message: Option<String>,

    /// Alternate error field some responses use
    #[serde(default)]
    pub error: Option<String>,
}

impl RenewResponse {
    /// Message to record when `success` is false: `message`, then `error`,
    /// then a generic fallback.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("unknown error")
            .to_string()
    }
}
