//! HTTP client creation and configuration utilities

use reqwest::{Client, redirect};
use std::time::Duration;

use crate::config::Config;

/// Maximum redirects followed per request. The atlas endpoint needs one.
const MAX_REDIRECTS: usize = 10;

/// Creates an HTTP client configured from `config`.
///
/// # Features
/// * Request timeout from `http_timeout_seconds`
/// * Connection pooling with centralized pool size configuration
/// * The configured `User-Agent`
/// * Redirects followed, so callers can inspect the final URL
pub fn create_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    create_http_client_with_timeout(config.http_timeout_seconds, &config.user_agent)
}

/// Creates an HTTP client with an explicit timeout and user agent.
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(user_agent)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(
        crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        crate::constants::DEFAULT_USER_AGENT,
    )
    .expect("Failed to create test HTTP client")
}
