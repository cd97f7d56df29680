use serde::{Deserialize, Serialize};

/// One account entry as supplied in the `ACCOUNTS_JSON` array.
///
/// Entries are deserialized leniently: a missing or empty field does not
/// fail the whole array, it just makes this account unusable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    /// API key
    #[serde(default)]
    pub key: Option<String>,

    /// API secret
    #[serde(default)]
    pub secret: Option<String>,
}

impl Account {
    /// Extract a usable credential pair, or `None` if either part is
    /// missing or empty. Accounts without credentials are skipped without
    /// any network activity.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (self.key.as_deref(), self.secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(Credentials {
                    key: key.to_string(),
                    secret: secret.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// A validated key/secret pair.
///
/// Both parts are always present by construction, so the client never has
/// to reason about half-supplied credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key, sent as the `X-API-Key` header
    pub key: String,

    /// API secret, sent as the `X-API-Secret` header
    pub secret: String,
}
