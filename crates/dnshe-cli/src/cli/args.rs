//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Renew every DNSHE free subdomain across a set of accounts
///
/// Accounts are supplied as a JSON array of {"key", "secret"} objects,
/// normally through the ACCOUNTS_JSON environment variable. The run writes
/// a Markdown summary when a summary path is configured.
#[derive(Parser, Debug)]
#[command(name = "dnshe-renew")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON array of {"key", "secret"} account objects
    #[arg(long, env = "ACCOUNTS_JSON", hide_env_values = true)]
    pub accounts: Option<String>,

    /// Write the Markdown summary to this path
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, env = "DNSHE_API_BASE")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Increase log verbosity
    #[arg(short, long)]
    pub verbose: bool,
}
