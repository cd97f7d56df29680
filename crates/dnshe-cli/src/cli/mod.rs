//! CLI entry point: argument parsing, logging setup, and the run itself.

pub mod args;

use anyhow::{anyhow, Context, Result};
use args::Cli;
use clap::Parser;
use dnshe_client::ApiClient;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{accounts, report, runner};

/// Run the batch renewal.
///
/// Missing or malformed account configuration is the only fatal error;
/// every per-account and per-subdomain failure is recorded in the report
/// and the process still exits zero.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let raw = cli.accounts.as_deref().ok_or_else(|| {
        anyhow!("ACCOUNTS_JSON is not set; supply a JSON array of {{\"key\", \"secret\"}} objects")
    })?;
    let accounts = accounts::parse(raw)?;

    let mut builder = ApiClient::builder().timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build();

    let run_report = runner::run_batch(&client, &accounts).await;

    match cli.summary {
        Some(path) => {
            std::fs::write(&path, report::render(&run_report))
                .with_context(|| format!("failed to write summary to {}", path.display()))?;
            info!(path = %path.display(), "summary written");
        }
        None => info!("no summary path configured, skipping summary generation"),
    }

    info!("all accounts processed");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
