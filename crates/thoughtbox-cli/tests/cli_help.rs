use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("thoughtbox")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--timeout-secs"));
}

#[test]
fn test_submit_help_shows_fields() {
    cargo_bin_cmd!("thoughtbox")
        .args(["submit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--concern"))
        .stdout(predicate::str::contains("--cause"))
        .stdout(predicate::str::contains("--solution"));
}

#[test]
fn test_submit_requires_every_field_flag() {
    cargo_bin_cmd!("thoughtbox")
        .args(["submit", "--concern", "noise"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cause"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("thoughtbox")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
