//! Integration tests for the fetch-retry layer
//!
//! These use wiremock to pin down the retry budget semantics: how many
//! requests one logical fetch spends, and that every call starts fresh.

use mal_harvest::config::UserAgentConfig;
use mal_harvest::crawler::{build_http_client, fetch_with_retry, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> reqwest::Client {
    build_http_client(&UserAgentConfig {
        crawler_name: "TestHarvester".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/about".to_string(),
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_success_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let url = format!("{}/page", mock_server.uri());
    let body = fetch_with_retry(&client, &url, None, 20).await.unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_exhaustion_after_exactly_twenty_attempts() {
    let mock_server = MockServer::start().await;

    // The expectation is verified when the server drops: exactly 20
    // requests, no more, no less.
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(20)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let url = format!("{}/flaky", mock_server.uri());
    let result = fetch_with_retry(&client, &url, None, 20).await;

    match result {
        Err(FetchError::Exhausted { attempts, .. }) => assert_eq!(attempts, 20),
        other => panic!("Expected exhaustion, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fresh_allotment_per_call() {
    let mock_server = MockServer::start().await;

    // Two independent calls against the same URL must each spend their
    // full budget: 40 requests in total.
    Mock::given(method("GET"))
        .and(path("/always-down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(40)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let url = format!("{}/always-down", mock_server.uri());

    assert!(fetch_with_retry(&client, &url, None, 20).await.is_err());
    assert!(fetch_with_retry(&client, &url, None, 20).await.is_err());
}

#[tokio::test]
async fn test_recovery_within_budget() {
    let mock_server = MockServer::start().await;

    // Three failures, then the page comes back.
    Mock::given(method("GET"))
        .and(path("/eventually"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(3)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eventually"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&mock_server)
        .await;

    let client = test_client();
    let url = format!("{}/eventually", mock_server.uri());
    let body = fetch_with_retry(&client, &url, None, 20).await.unwrap();
    assert_eq!(body, "recovered");
}

#[tokio::test]
async fn test_budget_of_one_means_no_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/once"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let url = format!("{}/once", mock_server.uri());
    assert!(fetch_with_retry(&client, &url, None, 1).await.is_err());
}
