//! Integration tests for repo-collector
//!
//! These tests verify fixtures and end-to-end behavior.
//! The live GitHub test requires network access.

use std::fs;
use std::path::PathBuf;

use repo_collector::adapter::github::models::SearchResponse;

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_fixture_file_exists() {
    let sample = fixtures_path().join("search_response.json");
    assert!(sample.exists(), "search_response.json fixture should exist");
}

#[test]
fn test_fixture_parses_as_search_response() {
    let content = fs::read_to_string(fixtures_path().join("search_response.json"))
        .expect("Failed to read search_response.json");

    let response: SearchResponse =
        serde_json::from_str(&content).expect("Fixture should be a valid search response");

    assert_eq!(response.items.len(), 3, "fixture should have 3 items");
    for item in &response.items {
        assert!(item.html_url.starts_with("https://github.com/"));
        assert!(item.full_name.contains('/'));
    }
}

/// Live test against api.github.com
/// Run with: cargo test --test integration_test -- --ignored
#[tokio::test]
#[ignore]
async fn test_github_search_live() {
    use repo_collector::adapter::auth::load_token;
    use repo_collector::adapter::github::client::{GithubClient, DEFAULT_API_BASE_URL};
    use repo_collector::adapter::repositories::github_search_repository::GithubSearchRepository;
    use repo_collector::domain::repositories::search_repository::SearchRepository;
    use std::time::Duration;

    let client = GithubClient::new(
        DEFAULT_API_BASE_URL,
        load_token("GITHUB_TOKEN"),
        Duration::from_secs(30),
    )
    .expect("client should build");

    let records = GithubSearchRepository::new(client)
        .search("rust", 1000, 5)
        .await
        .expect("search should not fail at transport level");

    assert!(records.len() <= 5);
    for pair in records.windows(2) {
        assert!(pair[0].stargazers_count >= pair[1].stargazers_count);
    }
}
