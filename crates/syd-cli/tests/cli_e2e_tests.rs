//! End-to-end tests for the syd binary
//!
//! Each test points the CLI at a mock datasets backend with
//! `--server-url` and an isolated config file, then checks what it prints
//! and how it exits.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Helper to create a listing response with two datasets
fn list_response() -> serde_json::Value {
    json!({
        "datasets": [
            {
                "id": 1,
                "name": "crop_yields",
                "email": "alice@openmined.org",
                "syft_url": "syft://alice@openmined.org/public/datasets/crop_yields",
                "description": "Yearly crop yields",
                "created_at": "2025-01-01T10:00:00",
                "updated_at": "2025-01-02T10:00:00",
                "size": "2.3 MB",
                "type": "csv",
                "tags": ["agriculture"]
            },
            {
                "id": 2,
                "name": "census",
                "email": "bob@example.com",
                "syft_url": "syft://bob@example.com/public/datasets/census",
                "description": null,
                "created_at": null,
                "updated_at": null,
                "size": null,
                "type": "dataset",
                "tags": null
            }
        ],
        "total_count": 2,
        "unique_emails": ["alice@openmined.org", "bob@example.com"],
        "unique_names": ["crop_yields", "census"]
    })
}

fn empty_response() -> serde_json::Value {
    json!({
        "datasets": [],
        "total_count": 0,
        "unique_emails": [],
        "unique_names": []
    })
}

/// Command with an isolated config file and no colors
fn syd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("syd").unwrap();
    cmd.env("SYD_CONFIG_PATH", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("SYD_SERVER_URL");
    cmd
}

async fn mount_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response()))
        .mount(server)
        .await;
}

// ============================================================================
// list
// ============================================================================

#[tokio::test]
async fn test_list_table() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["list", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 datasets found"))
        .stdout(predicate::str::contains("crop_yields"))
        .stdout(predicate::str::contains("CSV"))
        .stdout(predicate::str::contains("2.3 MB"))
        .stdout(predicate::str::contains("ago"));
}

#[tokio::test]
async fn test_list_compact() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["list", "--format", "compact", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "census\tbob@example.com\tsyft://bob@example.com/public/datasets/census",
        ));
}

#[tokio::test]
async fn test_list_json() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    let output = syd(&dir)
        .args(["list", "-f", "json", "--server-url", &server.uri()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_count"], 2);
    assert_eq!(value["selected_email"], "all");
    assert_eq!(value["datasets"][0]["type"], "csv");
    assert_eq!(value["datasets"][1]["tags"], json!([]));
}

#[tokio::test]
async fn test_list_server_error_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["list", "--server-url", &server.uri()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load datasets"))
        .stderr(predicate::str::contains("syd status"));
}

#[tokio::test]
async fn test_server_url_from_config_file() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("server_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    syd(&dir)
        .args(["list", "--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crop_yields"));
}

// ============================================================================
// search / filter
// ============================================================================

#[tokio::test]
async fn test_search_sends_joined_terms() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/search"))
        .and(body_json(json!({ "keyword": "crop yields" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response()))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["search", "crop", "yields", "-f", "compact"])
        .args(["--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("crop_yields"));
}

#[tokio::test]
async fn test_search_without_results_suggests_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["census", "weather"])))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["search", "censsu", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No datasets found"))
        .stdout(predicate::str::contains("Try adjusting your search or filter criteria"))
        .stdout(predicate::str::contains("Did you mean:"))
        .stdout(predicate::str::contains("census"));
}

#[tokio::test]
async fn test_filter_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/filter-by-email"))
        .and(body_json(json!({ "email_pattern": "bob@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response()))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["filter", "bob@example.com", "-f", "compact"])
        .args(["--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("census"));
}

#[tokio::test]
async fn test_filter_all_lists_everything() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["filter", "all", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 datasets found"));
}

#[tokio::test]
async fn test_empty_listing_explains_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_response()))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["list", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Make sure SyftBox is running"));
}

// ============================================================================
// emails / names / status / copy
// ============================================================================

#[tokio::test]
async fn test_emails_and_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/emails"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["alice@openmined.org", "bob@example.com"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["crop_yields"])))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["emails", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout("alice@openmined.org\nbob@example.com\n");

    syd(&dir)
        .args(["names", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout("crop_yields\n");
}

#[tokio::test]
async fn test_status_reports_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "message": "Syft Datasets API is running",
            "timestamp": "2025-01-02T10:00:00"
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["status", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server is up"))
        .stdout(predicate::str::contains("healthy"));
}

#[tokio::test]
async fn test_status_unreachable_server() {
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["status", "--server-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server error"));
}

#[tokio::test]
async fn test_copy_prints_or_copies_url() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    // Headless hosts fall back to printing the URL
    syd(&dir)
        .args(["copy", "2", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "syft://bob@example.com/public/datasets/census",
        ));
}

#[tokio::test]
async fn test_copy_unknown_dataset() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["copy", "weather", "--server-url", &server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset 'weather' not found"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["config", "set", "server_url", "http://datasets.local:8001"])
        .assert()
        .success();

    syd(&dir)
        .args(["config", "get", "server_url"])
        .assert()
        .success()
        .stdout("http://datasets.local:8001\n");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();

    syd(&dir)
        .args(["config", "get", "cache_dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_no_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();

    syd(&dir).assert().failure().code(2);
}
