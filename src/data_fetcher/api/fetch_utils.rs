//! Generic HTTP fetching utilities with caching, retry logic, and error handling

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::data_fetcher::cache::{cache_http_response, get_cached_http_response};
use crate::data_fetcher::decode::parse_body;
use crate::error::AppError;

/// Fetches `url` and parses the body as `T`.
///
/// See [`fetch_with`] for caching and retry behaviour.
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    ttl_seconds: u64,
) -> Result<T, AppError> {
    fetch_with(client, url, ttl_seconds, |body| parse_body::<T>(body, url)).await
}

/// Fetches `url` and hands the body to `parse`.
///
/// This function:
/// - Checks the HTTP response cache first
/// - Retries timeouts, connection errors, 429 and 5xx responses with
///   exponential backoff, honouring a capped `Retry-After`
/// - Maps non-success status codes to specific [`AppError`] variants
/// - Caches the body for `ttl_seconds` only when `parse` accepts it
#[instrument(skip(client, parse))]
pub async fn fetch_with<T, F>(
    client: &Client,
    url: &str,
    ttl_seconds: u64,
    parse: F,
) -> Result<T, AppError>
where
    F: Fn(&str) -> Result<T, AppError>,
{
    info!("Fetching data from URL: {url}");

    if let Some(cached_response) = get_cached_http_response(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match parse(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                // Fall through to a fresh request
                warn!("Failed to parse cached response for URL {}: {}", url, e);
            }
        }
    }

    let response = send_with_retries(client, url).await?;
    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    let parsed = parse(&response_text)?;
    cache_http_response(url.to_string(), response_text, ttl_seconds).await;
    Ok(parsed)
}

/// Maps a non-success HTTP status to its [`AppError`] variant.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Maps a transport failure to its [`AppError`] variant.
fn request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Picks the wait before the next attempt: a numeric `Retry-After` capped at
/// `retry::MAX_RETRY_AFTER_SECONDS`, otherwise the current backoff.
fn retry_wait(retry_after: Option<&str>, backoff: Duration) -> Duration {
    retry_after
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs.min(retry::MAX_RETRY_AFTER_SECONDS)))
        .unwrap_or(backoff)
}

/// Sends a GET and returns the first successful response.
///
/// Failures are classified into [`AppError`]; those for which
/// [`AppError::is_retryable`] holds are retried up to `retry::MAX_ATTEMPTS`
/// times with exponential backoff.
async fn send_with_retries(client: &Client, url: &str) -> Result<Response, AppError> {
    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);

    loop {
        let (err, wait) = match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(resp),
            Ok(resp) => {
                let retry_after = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok());
                let wait = retry_wait(retry_after, backoff);
                (status_error(resp.status(), url), wait)
            }
            Err(e) => (request_error(e, url), backoff),
        };

        if !err.is_retryable() || attempt >= retry::MAX_ATTEMPTS {
            error!("Request failed for URL {}: {}", url, err);
            return Err(err);
        }

        warn!(
            "{}. Retrying in {:?} (attempt {}/{})",
            err,
            wait,
            attempt + 1,
            retry::MAX_ATTEMPTS
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    }
}
