//! Configuration-error behavior of the dnshe-renew binary: bad account
//! input must exit nonzero before any network activity.

use assert_cmd::Command;
use predicates::str::contains;

fn renew_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dnshe-renew").unwrap();
    cmd.env_remove("ACCOUNTS_JSON")
        .env_remove("GITHUB_STEP_SUMMARY")
        .env_remove("DNSHE_API_BASE");
    cmd
}

#[test]
fn missing_accounts_input_exits_nonzero() {
    renew_cmd()
        .assert()
        .failure()
        .stderr(contains("ACCOUNTS_JSON is not set"));
}

#[test]
fn non_json_accounts_input_exits_nonzero() {
    renew_cmd()
        .env("ACCOUNTS_JSON", "definitely not json")
        .assert()
        .failure()
        .stderr(contains("not valid JSON"));
}

#[test]
fn non_array_accounts_input_exits_nonzero() {
    renew_cmd()
        .env("ACCOUNTS_JSON", r#"{"key":"k","secret":"s"}"#)
        .assert()
        .failure()
        .stderr(contains("must be a JSON array"));
}

#[test]
fn run_with_only_skipped_accounts_exits_zero_and_writes_summary() {
    // A credential-less account is skipped before any network call, so this
    // exercises the full pipeline offline.
    let dir = tempfile::tempdir().unwrap();
    let summary = dir.path().join("summary.md");

    renew_cmd()
        .env("ACCOUNTS_JSON", r#"[{"key":"only-a-key"}]"#)
        .env("GITHUB_STEP_SUMMARY", &summary)
        .assert()
        .success();

    let text = std::fs::read_to_string(&summary).unwrap();
    assert!(text.contains("# DNSHE free subdomain renewal"));
    assert!(text.contains("## Account 1"));
    assert!(text.contains("skipped (missing key or secret)"));
}

#[test]
fn empty_account_array_exits_zero() {
    renew_cmd().env("ACCOUNTS_JSON", "[]").assert().success();
}
