//! Markdown rendering of the run report.
//!
//! The output is what lands in the workflow step summary: a heading, the
//! run timestamp, one subsection per account, and a closing notice line.
//! Rendering is deterministic for a given report.

use dnshe_core::{AccountReport, RunReport};

/// Render the whole run as Markdown.
#[must_use]
pub fn render(report: &RunReport) -> String {
    let mut out = String::new();

    out.push_str("# DNSHE free subdomain renewal\n\n");
    out.push_str(&format!(
        "Run at: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    for entry in &report.entries {
        out.push_str(&format!("## Account {}\n\n", entry.account_index + 1));
        match &entry.report {
            None => out.push_str("skipped (missing key or secret)\n\n"),
            Some(AccountReport::Error(message)) => {
                out.push_str(&format!("❌ processing failed: {message}\n\n"));
            }
            Some(AccountReport::Info(message)) => {
                out.push_str(&format!("ℹ️ {message}\n\n"));
            }
            Some(AccountReport::Renewals(renewals)) if renewals.is_empty() => {
                // Every listed entry lacked an id, so nothing was attempted.
                out.push_str("no subdomains\n\n");
            }
            Some(AccountReport::Renewals(renewals)) => {
                out.push_str("| Domain | Status | Message |\n");
                out.push_str("|--------|--------|---------|\n");
                for renewal in renewals {
                    let icon = if renewal.outcome.is_success() { "✅" } else { "❌" };
                    out.push_str(&format!(
                        "| {} | {} | {} |\n",
                        renewal.domain, icon, renewal.outcome.message
                    ));
                }
                out.push('\n');
            }
        }
    }

    out.push_str("---\n");
    out.push_str("> Automated renewal run finished; see the workflow log for details.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dnshe_core::{DomainRenewal, RenewalOutcome};

    fn fixed_report() -> RunReport {
        let stamp = chrono::Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let mut report = RunReport::at(stamp);
        report.push(0, None);
        report.push(1, Some(AccountReport::Error("account suspended".to_string())));
        report.push(2, Some(AccountReport::Info("no subdomains".to_string())));
        report.push(
            3,
            Some(AccountReport::Renewals(vec![
                DomainRenewal {
                    domain: "foo.bar.com".to_string(),
                    outcome: RenewalOutcome::success(Some("2026-06-01")),
                },
                DomainRenewal {
                    domain: "baz.qux.net".to_string(),
                    outcome: RenewalOutcome::failed("rate limited: HTTP 429"),
                },
            ])),
        );
        report.push(4, Some(AccountReport::Renewals(Vec::new())));
        report
    }

    #[test]
    fn renders_every_entry_shape() {
        let text = render(&fixed_report());

        assert!(text.starts_with("# DNSHE free subdomain renewal\n\n"));
        assert!(text.contains("Run at: 2026-03-04 05:06:07\n"));
        assert!(text.contains("## Account 1\n\nskipped (missing key or secret)\n"));
        assert!(text.contains("## Account 2\n\n❌ processing failed: account suspended\n"));
        assert!(text.contains("## Account 3\n\nℹ️ no subdomains\n"));
        assert!(text.contains("| Domain | Status | Message |\n"));
        assert!(text.contains("| foo.bar.com | ✅ | renewed, new expiry 2026-06-01 |\n"));
        assert!(text.contains("| baz.qux.net | ❌ | rate limited: HTTP 429 |\n"));
        assert!(text.contains("## Account 5\n\nno subdomains\n"));
        assert!(text.ends_with(
            "---\n> Automated renewal run finished; see the workflow log for details.\n"
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = fixed_report();
        assert_eq!(render(&report), render(&report));
    }

    #[test]
    fn empty_run_still_renders_header_and_footer() {
        let stamp = chrono::Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let text = render(&RunReport::at(stamp));
        assert_eq!(
            text,
            "# DNSHE free subdomain renewal\n\n\
             Run at: 2026-03-04 05:06:07\n\n\
             ---\n\
             > Automated renewal run finished; see the workflow log for details.\n"
        );
    }
}
