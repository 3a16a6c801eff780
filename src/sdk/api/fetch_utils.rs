//! Generic HTTP fetching with retry, exponential backoff and error classification

use bytes::Bytes;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{ERROR_PREVIEW_CHARS, RESPONSE_PREVIEW_CHARS};
use crate::error::AppError;

use super::retry::RetryPolicy;

/// Result of a single HTTP attempt.
enum Attempt {
    Success(Bytes),
    /// 5xx, 429 or a connection-level failure
    Transient {
        status: Option<u16>,
        cause: String,
        retry_after: Option<Duration>,
    },
    Terminal(AppError),
}

/// Reads the `Retry-After` header of a 429 or 503 when it is given in whole
/// seconds. Other statuses never carry a usable hint.
fn retry_after(status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
    if status != StatusCode::TOO_MANY_REQUESTS && status != StatusCode::SERVICE_UNAVAILABLE {
        return None;
    }
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn is_transient_transport(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_request() || e.is_body()
}

async fn attempt_once(client: &Client, url: &str, query: &[(String, String)]) -> Attempt {
    let response = match client.get(url).query(query).send().await {
        Ok(resp) => resp,
        Err(e) if is_transient_transport(&e) => {
            return Attempt::Transient {
                status: None,
                cause: e.to_string(),
                retry_after: None,
            };
        }
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Attempt::Terminal(AppError::Http(e));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    if status.is_success() {
        return match response.bytes().await {
            Ok(body) => Attempt::Success(body),
            // Connection dropped mid-body
            Err(e) => Attempt::Transient {
                status: None,
                cause: format!("Failed to read response body: {e}"),
                retry_after: None,
            },
        };
    }

    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        let transient = AppError::transient_server_error(status.as_u16(), reason, url);
        return Attempt::Transient {
            status: Some(status.as_u16()),
            cause: transient.to_string(),
            retry_after: retry_after(status, response.headers()),
        };
    }

    let status_code = status.as_u16();
    error!("HTTP {} - {} (URL: {})", status_code, reason, url);
    Attempt::Terminal(match status_code {
        404 => AppError::not_found(url),
        400..=499 => AppError::client_error(status_code, reason, url),
        _ => AppError::request_failed(url, 1, Some(status_code), format!("Unexpected {status}")),
    })
}

/// Issues a GET with retries and returns the raw response body.
///
/// Transient outcomes (5xx, 429, connection failures) are retried according
/// to `policy`; everything else returns immediately. When the retry budget is
/// spent the last cause is wrapped in [`AppError::RequestFailed`].
#[instrument(skip(client, query, policy))]
pub(super) async fn fetch_bytes(
    client: &Client,
    url: &str,
    query: &[(String, String)],
    policy: RetryPolicy,
) -> Result<Bytes, AppError> {
    info!("Fetching data from URL: {url}");

    let budget = policy.retry_budget();
    let mut retry = 0u32;
    let mut previous_wait = Duration::ZERO;
    loop {
        match attempt_once(client, url, query).await {
            Attempt::Success(body) => {
                debug!("Response length: {} bytes", body.len());
                return Ok(body);
            }
            Attempt::Terminal(err) => return Err(err),
            Attempt::Transient {
                status,
                cause,
                retry_after,
            } => {
                if retry >= budget {
                    let attempts = retry + 1;
                    error!(
                        "Giving up on {} after {} attempt(s): {}",
                        url, attempts, cause
                    );
                    return Err(AppError::request_failed(url, attempts, status, cause));
                }

                let wait = policy.wait_before(retry, retry_after, previous_wait);
                warn!(
                    "Transient failure from {}: {}. Retrying in {:?} (attempt {}/{})",
                    url,
                    cause,
                    wait,
                    retry + 1,
                    budget
                );
                tokio::time::sleep(wait).await;
                previous_wait = wait;
                retry += 1;
            }
        }
    }
}

/// Fetches and decodes a JSON body. Decode failures are never retried.
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(String, String)],
    policy: RetryPolicy,
) -> Result<T, AppError> {
    let body = fetch_bytes(client, url, query, policy).await?;
    decode_json(&body, url)
}

/// Decodes a JSON payload, distinguishing empty bodies, non-JSON bodies and
/// JSON whose shape does not match `T`.
pub(super) fn decode_json<T: DeserializeOwned>(body: &[u8], url: &str) -> Result<T, AppError> {
    match serde_json::from_slice::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let text = String::from_utf8_lossy(body);
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first {} chars): {}",
                ERROR_PREVIEW_CHARS,
                text.chars().take(ERROR_PREVIEW_CHARS).collect::<String>()
            );
            debug!(
                "Response text (first {} chars): {}",
                RESPONSE_PREVIEW_CHARS,
                text.chars().take(RESPONSE_PREVIEW_CHARS).collect::<String>()
            );

            let trimmed = text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::malformed_response("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::malformed_response(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::malformed_response(
                    format!("Unexpected response structure: {e}"),
                    url,
                ))
            }
        }
    }
}
