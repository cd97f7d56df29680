//! # dnshe-cli
//!
//! Non-interactive batch renewer for DNSHE free subdomains.
//!
//! Reads a JSON array of `{key, secret}` accounts, lists every account's
//! subdomains, attempts to renew each one, and writes a Markdown summary.
//! Designed to run on a schedule (e.g. GitHub Actions): accounts come from
//! `ACCOUNTS_JSON`, the summary goes to `GITHUB_STEP_SUMMARY`.

pub mod accounts;
pub mod cli;
pub mod report;
pub mod runner;

pub use cli::run;
