//! dnshe-renew - scheduled batch renewal of DNSHE free subdomains.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dnshe_cli::run().await
}
