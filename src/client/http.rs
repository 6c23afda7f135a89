//! Internal HTTP transport: request construction, authentication, JSON
//! (de)serialization, typed error mapping, and retry with exponential
//! backoff.

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::error::{error_code, AllscreenshotsError, Result};
use crate::model::ApiErrorBody;

/// Header carrying the API key.
pub(crate) const API_KEY_HEADER: &str = "X-API-Key";

const USER_AGENT: &str = concat!("allscreenshots-rust/", env!("CARGO_PKG_VERSION"));

/// Shared transport behind all resource facades.
///
/// Configuration (base URL, API key, timeouts, retry policy) is fixed at
/// construction; requests are sequential and block on retry sleeps.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryConfig,
}

impl HttpTransport {
    pub(crate) fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        connect_timeout: Duration,
        timeout: Duration,
        retry: RetryConfig,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AllscreenshotsError::config_with_source("Failed to create HTTP client", e)
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            api_key,
            retry,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.execute(Method::GET, path, None).await?;
        decode_json(&body)
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.execute(Method::GET, path, None).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = encode_json(body)?;
        let response = self.execute(Method::POST, path, Some(payload)).await?;
        decode_json(&response)
    }

    /// POST with an empty JSON body (cancel, pause, resume, trigger).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(Method::POST, path, Some(Vec::new())).await?;
        decode_json(&response)
    }

    /// POST returning the raw response bytes (synchronous captures).
    pub(crate) async fn post_bytes<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        let payload = encode_json(body)?;
        self.execute(Method::POST, path, Some(payload)).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = encode_json(body)?;
        let response = self.execute(Method::PUT, path, Some(payload)).await?;
        decode_json(&response)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Runs one request through the retry loop.
    ///
    /// Attempts are numbered from 0; after a retryable failure on attempt N
    /// the loop sleeps `retry.delay_for_attempt(N)` (or the server's
    /// Retry-After hint if larger) and tries again, up to `max_retries`
    /// additional attempts. Non-retryable errors propagate immediately.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt: u32 = 0;

        loop {
            match self.send_once(&method, &url, body.as_deref()).await {
                Ok(bytes) => return Ok(bytes),
                Err(err) if err.is_retryable() && attempt < self.retry.max_retries => {
                    let mut delay = self.retry.delay_for_attempt(attempt);
                    if let AllscreenshotsError::RateLimited {
                        retry_after: Some(hint),
                        ..
                    } = &err
                    {
                        delay = delay.max(*hint);
                    }

                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        max_retries = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Transient failure, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Sends a single request and maps the outcome.
    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method.clone(), url);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = request.send().await.map_err(|e| {
            let message = format!("Request to {} failed: {}", url, e);
            AllscreenshotsError::network_with_source(message, e)
        })?;

        let status = response.status();
        if status.is_success() {
            return response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| {
                    AllscreenshotsError::network_with_source("Failed to read response body", e)
                });
        }

        let retry_after = parse_retry_after(&response);
        let body_text = response.text().await.unwrap_or_default();
        Err(error_from_response(status, retry_after, body_text))
    }
}

/// Parses the Retry-After header as integral seconds.
fn parse_retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Translates a non-2xx response into the typed error for its status class.
fn error_from_response(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: String,
) -> AllscreenshotsError {
    let parsed: Option<ApiErrorBody> = if body.is_empty() {
        None
    } else {
        serde_json::from_str(&body).ok()
    };

    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()));
    let code = parsed.as_ref().and_then(|b| b.code.clone());

    match status.as_u16() {
        400 => AllscreenshotsError::Validation {
            message,
            error_code: code.unwrap_or_else(|| error_code::VALIDATION_ERROR.to_string()),
        },
        401 => AllscreenshotsError::Authentication {
            message,
            error_code: code.unwrap_or_else(|| error_code::AUTHENTICATION_ERROR.to_string()),
            status: 401,
        },
        403 => AllscreenshotsError::Authentication {
            message,
            error_code: code.unwrap_or_else(|| error_code::FORBIDDEN.to_string()),
            status: 403,
        },
        429 => AllscreenshotsError::RateLimited {
            message,
            retry_after,
        },
        s => AllscreenshotsError::Api {
            message,
            error_code: code.unwrap_or_else(|| error_code::API_ERROR.to_string()),
            status: s,
            body,
        },
    }
}

fn encode_json<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| {
        AllscreenshotsError::invalid_request(format!("Failed to serialize request body: {}", e))
    })
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| AllscreenshotsError::decode_with_source("Failed to decode response body", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes_to_error_kinds() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            None,
            r#"{"message": "Invalid URL format", "code": "INVALID_URL"}"#.to_string(),
        );
        match err {
            AllscreenshotsError::Validation {
                message,
                error_code,
            } => {
                assert_eq!(message, "Invalid URL format");
                assert_eq!(error_code, "INVALID_URL");
            }
            other => panic!("expected Validation, got {:?}", other),
        }

        let err = error_from_response(StatusCode::FORBIDDEN, None, String::new());
        match err {
            AllscreenshotsError::Authentication {
                status, error_code, ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(error_code, error_code::FORBIDDEN);
            }
            other => panic!("expected Authentication, got {:?}", other),
        }

        let err = error_from_response(
            StatusCode::TOO_MANY_REQUESTS,
            Some(Duration::from_secs(60)),
            r#"{"message": "Rate limit exceeded"}"#.to_string(),
        );
        match err {
            AllscreenshotsError::RateLimited {
                message,
                retry_after,
            } => {
                assert_eq!(message, "Rate limit exceeded");
                assert_eq!(retry_after, Some(Duration::from_secs(60)));
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn unknown_statuses_become_api_errors_with_body() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, None, "upstream down".to_string());
        match err {
            AllscreenshotsError::Api {
                message,
                error_code,
                status,
                body,
            } => {
                assert_eq!(message, "API request failed with status 502");
                assert_eq!(error_code, error_code::API_ERROR);
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn non_envelope_error_bodies_fall_back_to_defaults() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            None,
            "<html>Bad Request</html>".to_string(),
        );
        match err {
            AllscreenshotsError::Validation {
                message,
                error_code,
            } => {
                assert_eq!(message, "API request failed with status 400");
                assert_eq!(error_code, error_code::VALIDATION_ERROR);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
