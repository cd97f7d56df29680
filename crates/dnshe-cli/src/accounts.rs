//! Parsing of the externally supplied account set.

use anyhow::{bail, Context, Result};
use dnshe_core::Account;

/// Parse the `ACCOUNTS_JSON` payload into an ordered account list.
///
/// Input that is not JSON or not a JSON array is a fatal configuration
/// error. Individual entries that are not `{key, secret}` objects are kept
/// as credential-less accounts, which the runner skips without any network
/// activity.
pub fn parse(raw: &str) -> Result<Vec<Account>> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("ACCOUNTS_JSON is not valid JSON")?;

    let serde_json::Value::Array(items) = value else {
        bail!("ACCOUNTS_JSON must be a JSON array of {{\"key\", \"secret\"}} objects");
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}
