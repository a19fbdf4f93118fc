//! HTTP fetcher with bounded retry
//!
//! One logical fetch is a GET repeated against the same URL and headers
//! until it succeeds or the attempt budget runs out. There is no backoff
//! between attempts; pacing between requests is the coordinator's job.

use crate::config::UserAgentConfig;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Terminal failure of one fetch call
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Gave up on {url} after {attempts} attempts (last failure: {last_failure})")]
    Exhausted {
        url: String,
        attempts: u32,
        last_failure: String,
    },
}

/// Builds the shared HTTP client
///
/// User agent format: CrawlerName/Version (+ContactURL)
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{})",
        config.crawler_name, config.crawler_version, config.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying on any non-success outcome
///
/// The attempt counter is local to this call: every invocation starts
/// with a fresh allotment of `max_attempts`, no matter how a previous
/// call ended. Non-success status codes and transport errors both
/// consume an attempt. Exhausting the budget is terminal for this fetch;
/// callers treat it as fatal.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `headers` - Extra request headers, applied to every attempt
/// * `max_attempts` - Total attempts before giving up
///
/// # Returns
///
/// * `Ok(String)` - The response body text
/// * `Err(FetchError::Exhausted)` - The budget ran out
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    headers: Option<&HeaderMap>,
    max_attempts: u32,
) -> Result<String, FetchError> {
    let mut last_failure = String::from("no attempts made");

    for attempt in 1..=max_attempts {
        let mut request = client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text().await {
                        Ok(body) => return Ok(body),
                        Err(e) => {
                            last_failure = format!("failed to read body: {}", e);
                        }
                    }
                } else {
                    last_failure = format!("HTTP {}", status.as_u16());
                }
            }
            Err(e) if e.is_timeout() => {
                last_failure = "request timeout".to_string();
            }
            Err(e) if e.is_connect() => {
                last_failure = "connection failed".to_string();
            }
            Err(e) => {
                last_failure = e.to_string();
            }
        }

        tracing::debug!(
            "Attempt {}/{} for {} failed: {}",
            attempt,
            max_attempts,
            url,
            last_failure
        );
    }

    Err(FetchError::Exhausted {
        url: url.to_string(),
        attempts: max_attempts,
        last_failure,
    })
}
