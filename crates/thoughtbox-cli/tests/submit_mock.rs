//! Integration tests for `thoughtbox submit` against a mock collector.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn temp_home() -> TempDir {
    TempDir::new().expect("create temp thoughtbox home")
}

fn collector_url(server: &MockServer) -> String {
    format!("{}/api/complaints", server.uri())
}

#[tokio::test]
async fn test_submit_prints_success_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/complaints"))
        .and(body_json(json!({
            "concern": "Printer jams",
            "cause": "Old rollers",
            "solution": "Replace them",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", home.path())
        .args(["--url", &collector_url(&server)])
        .args([
            "submit",
            "--concern",
            "Printer jams",
            "--cause",
            "Old rollers",
            "--solution",
            "Replace them",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thought shared beautifully!"));
}

#[tokio::test]
async fn test_submit_reports_rejection_and_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/complaints"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", home.path())
        .env("THOUGHTBOX_COLLECTOR_URL", collector_url(&server))
        .args(["submit", "--concern", "a", "--cause", "b", "--solution", "c"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Couldn't submit, try again?"))
        .stderr(predicate::str::contains("HTTP 500"));
}

#[tokio::test]
async fn test_submit_with_empty_field_sends_nothing() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", home.path())
        .args(["--url", &collector_url(&server)])
        .args(["submit", "--concern", "a", "--cause", "", "--solution", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cause"));
}

#[test]
fn test_submit_rejects_non_http_url() {
    let home = temp_home();

    cargo_bin_cmd!("thoughtbox")
        .env("THOUGHTBOX_HOME", home.path())
        .args(["--url", "ftp://example.com/complaints"])
        .args(["submit", "--concern", "a", "--cause", "b", "--solution", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http or https"));
}
