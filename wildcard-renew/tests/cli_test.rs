//! Exit status and messages of the `wildcard-renew` binary.
//!
//! Every case here stops before any Cloudflare request is made.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn wildcard_renew() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wildcard-renew"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_credentials(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("cloudflare.ini");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_positionals_print_usage_and_succeed() {
    for args in [&[][..], &["example.com"][..]] {
        wildcard_renew()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "zone_name cloudflare_token_file [propagation_time]",
            ))
            .stdout(predicate::str::contains(
                "cloudflare_token.ini example: dns_cloudflare_api_token=",
            ));
    }
}

#[test]
fn unreadable_config_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.ini");

    wildcard_renew()
        .arg("example.com")
        .arg(&absent)
        .assert()
        .code(1)
        .stderr(predicate::str::diff(format!(
            "Cannot open config file {}\n",
            absent.display()
        )));
}

#[test]
fn malformed_token_line_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = write_credentials(dir.path(), "just-a-token\n");

    wildcard_renew()
        .arg("example.com")
        .arg(&credentials)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed config file"))
        .stderr(predicate::str::contains("Cannot open config file").not());
}

#[test]
fn non_numeric_propagation_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = write_credentials(dir.path(), "dns_cloudflare_api_token=ABC123\n");

    wildcard_renew()
        .arg("example.com")
        .arg(&credentials)
        .arg("soon")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'soon'"));
}

#[test]
fn non_ascii_zone_is_refused_before_reading_config() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.ini");

    wildcard_renew()
        .arg("bücher.example")
        .arg(&absent)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-ASCII"))
        .stderr(predicate::str::contains("Cannot open config file").not());
}

#[test]
fn non_ascii_zone_is_refused_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = write_credentials(dir.path(), "dns_cloudflare_api_token=ABC123\n");

    wildcard_renew()
        .arg("bücher.example")
        .arg(&credentials)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bücher.example"));
}
