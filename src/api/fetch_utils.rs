//! Generic HTTP fetching utilities: one GET, a status check and a typed decode.
//!
//! There is no retry or caching layer here. Every call reaches the network
//! and every failure is returned to the caller.

use reqwest::{Client, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::{RESPONSE_PREVIEW_CHARS, SESSION_COOKIE_NAME};
use crate::error::AppError;

fn request(client: &Client, url: &str, session_id: Option<&str>) -> RequestBuilder {
    let request = client.get(url);
    match session_id {
        Some(session_id) => {
            request.header(header::COOKIE, format!("{SESSION_COOKIE_NAME}={session_id}"))
        }
        None => request,
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Issues a GET and returns the raw response after redirects.
///
/// Non-2xx responses are turned into [`AppError::Api`] carrying the status
/// and the body text. The session id, when given, is sent as the
/// `POESESSID` cookie and never logged.
#[instrument(skip(client, session_id))]
pub async fn fetch_response(
    client: &Client,
    url: &str,
    session_id: Option<&str>,
) -> Result<Response, AppError> {
    info!("Fetching data from URL: {url}");

    let response = request(client, url, session_id)
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    let status = response.status();
    debug!("Response status: {status}");
    if response.url().as_str() != url {
        debug!("Redirected to: {}", response.url());
    }

    if !status.is_success() {
        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        error!(
            "HTTP {} - {} (URL: {})",
            status_code,
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(AppError::api_error(status_code, body, url));
    }

    Ok(response)
}

/// Fetches `url` and decodes the JSON body into `T`.
///
/// # Errors
/// * transport failures - `ApiFetch`, `NetworkTimeout`, `NetworkConnection`
/// * non-2xx - `Api { status, body, url }`
/// * decoding - `ApiNoData`, `ApiMalformedJson`, `ApiUnexpectedStructure`
#[instrument(skip(client, session_id))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    session_id: Option<&str>,
) -> Result<T, AppError> {
    let response = fetch_response(client, url, session_id).await?;

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    parse_json(&response_text, url)
}

/// Fetches a JSON array and decodes every element on its own.
///
/// A failing element is reported with its index instead of failing the
/// whole body with a position deep inside the array.
#[instrument(skip(client, session_id))]
pub async fn fetch_array<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    session_id: Option<&str>,
) -> Result<Vec<T>, AppError> {
    let elements: Vec<serde_json::Value> = fetch(client, url, session_id).await?;
    debug!("Decoding {} array elements", elements.len());

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element).map_err(|e| {
                error!("Failed to decode element {} (URL: {}): {}", index, url, e);
                AppError::api_unexpected_structure(format!("element {index}: {e}"), url)
            })
        })
        .collect()
}

/// Parses a response body, classifying failures the same way for every endpoint.
pub(crate) fn parse_json<T: DeserializeOwned>(
    response_text: &str,
    url: &str,
) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
