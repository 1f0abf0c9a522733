//! End-to-end tests for the `docs_releases` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn docs_releases() -> Command {
    let mut cmd = Command::cargo_bin("docs_releases").unwrap();
    cmd.env_remove("DOCS_RELEASES_ORG")
        .env_remove("DOCS_RELEASES_API_URL")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN");
    cmd
}

#[test]
fn test_help_mentions_docs_asset() {
    docs_releases()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs.tar.gz"));
}

#[test]
fn test_missing_org_is_rejected() {
    docs_releases()
        .args(["list", "widgets"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("organization is required"));
}

#[test]
fn test_empty_project_is_rejected() {
    docs_releases()
        .args(["--org", "acme", "list", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project must not be empty"));
}

#[test]
fn test_org_from_environment() {
    docs_releases()
        .env("DOCS_RELEASES_ORG", "acme")
        .args(["get", "widgets", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tag must not be empty"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_sorted_tab_separated_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "tag_name": "v1.10.0",
                "assets": [{"name": "docs.tar.gz", "browser_download_url": "https://dl.example.com/1.10/docs.tar.gz"}]
            },
            {
                "tag_name": "v1.2.0",
                "draft": false,
                "prerelease": false,
                "assets": [{"name": "docs.tar.gz", "browser_download_url": "https://dl.example.com/1.2/docs.tar.gz"}]
            }
        ])))
        .mount(&server)
        .await;

    docs_releases()
        .args(["--org", "acme", "--api-url", server.uri().as_str(), "list", "widgets"])
        .assert()
        .success()
        .stdout(
            "v1.2.0\thttps://dl.example.com/1.2/docs.tar.gz\n\
             v1.10.0\thttps://dl.example.com/1.10/docs.tar.gz\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/releases/tags/v1.2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag_name": "v1.2.0",
            "assets": [{"name": "docs.tar.gz", "browser_download_url": "https://dl.example.com/1.2/docs.tar.gz"}]
        })))
        .mount(&server)
        .await;

    let output = docs_releases()
        .args(["--org", "acme", "--api-url", server.uri().as_str(), "--json", "get", "widgets", "v1.2.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!([{ "tag": "v1.2.0", "docs_url": "https://dl.example.com/1.2/docs.tar.gz" }])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_release_exits_with_not_found_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/releases/tags/v9.9.9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;

    docs_releases()
        .args(["--org", "acme", "--api-url", server.uri().as_str(), "get", "widgets", "v9.9.9"])
        .assert()
        .code(docs_releases::cli::EXIT_NOT_FOUND)
        .stderr(predicate::str::contains("Unable to find a release 'v9.9.9'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_with_failure_and_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/releases"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })))
        .mount(&server)
        .await;

    docs_releases()
        .args(["--org", "acme", "--api-url", server.uri().as_str(), "list", "widgets"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Bad credentials"))
        .stderr(predicate::str::contains("token is valid"));
}
