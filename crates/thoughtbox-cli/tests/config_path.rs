use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[collector]"));
    assert!(contents.contains("timeout_secs ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_applies_overrides_in_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[collector]\nurl = \"http://file.example/api/complaints\"\ntimeout_secs = 3\n",
    )
    .unwrap();

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .env_remove("THOUGHTBOX_COLLECTOR_URL")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://file.example/api/complaints"))
        .stdout(predicate::str::contains("timeout_secs = 3"));

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .env("THOUGHTBOX_COLLECTOR_URL", "http://env.example/api/complaints")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://env.example/api/complaints"));

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .env("THOUGHTBOX_COLLECTOR_URL", "http://env.example/api/complaints")
        .args(["--url", "http://flag.example/c", "--timeout-secs", "0"])
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://flag.example/c"))
        .stdout(predicate::str::contains("timeout_secs = 0"));
}

#[test]
fn test_broken_config_reports_context() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[collector\nurl = ").unwrap();

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
