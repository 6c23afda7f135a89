//! Tests for the HTTP transport: header injection, error mapping, and the
//! retry policy, against a local mock server.

use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::AllscreenshotsClient;
use crate::config::{RetryConfig, API_KEY_ENV_VAR};
use crate::error::AllscreenshotsError;
use crate::model::{BulkRequest, ScreenshotRequest};

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        initial_delay_ms: 1,
        max_delay_ms: 10,
        multiplier: 2.0,
    }
}

fn test_client(server: &MockServer, retry: RetryConfig) -> AllscreenshotsClient {
    AllscreenshotsClient::builder()
        .api_key("test-api-key")
        .base_url(server.uri())
        .retry(retry)
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn capture_request() -> ScreenshotRequest {
    ScreenshotRequest::builder()
        .url("https://example.com")
        .build()
        .unwrap()
}

#[tokio::test]
async fn capture_posts_json_with_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .and(header("X-API-Key", "test-api-key"))
        .and(body_partial_json(
            serde_json::json!({"url": "https://example.com", "device": "Desktop HD"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PNG_MAGIC.to_vec())
                .insert_header("Content-Type", "image/png"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, RetryConfig::none());
    let request = ScreenshotRequest::builder()
        .url("https://example.com")
        .device("Desktop HD")
        .build()
        .unwrap();

    let image = client.screenshots().capture(&request).await.unwrap();
    assert_eq!(image, PNG_MAGIC);
}

#[tokio::test]
async fn api_key_header_is_omitted_when_unconfigured() {
    std::env::remove_var(API_KEY_ENV_VAR);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tier": "FREE"})))
        .mount(&server)
        .await;

    let client = AllscreenshotsClient::builder()
        .base_url(server.uri())
        .retry(RetryConfig::none())
        .build()
        .unwrap();

    let usage = client.usage().usage().await.unwrap();
    assert_eq!(usage.tier.as_deref(), Some("FREE"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-api-key").is_none());
}

#[tokio::test]
async fn validation_error_is_never_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({"message": "Invalid URL format", "code": "INVALID_URL"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(3));
    let err = client
        .screenshots()
        .capture(&capture_request())
        .await
        .unwrap_err();

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

    // expect(1) is verified when the mock server drops.
}

#[tokio::test]
async fn authentication_error_maps_401() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            serde_json::json!({"message": "Invalid API key", "code": "INVALID_API_KEY"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(2));
    let err = client
        .screenshots()
        .capture(&capture_request())
        .await
        .unwrap_err();

    match err {
        AllscreenshotsError::Authentication {
            message,
            error_code,
            status,
        } => {
            assert_eq!(message, "Invalid API key");
            assert_eq!(error_code, "INVALID_API_KEY");
            assert_eq!(status, 401);
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn rate_limit_is_retried_up_to_max() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"message": "Rate limit exceeded"})),
        )
        .expect(3) // initial attempt + 2 retries
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(2));
    let err = client
        .screenshots()
        .capture(&capture_request())
        .await
        .unwrap_err();

    assert!(matches!(err, AllscreenshotsError::RateLimited { .. }));
}

#[tokio::test]
async fn rate_limit_carries_retry_after_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"message": "Rate limit exceeded"}))
                .insert_header("Retry-After", "60"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, RetryConfig::none());
    let err = client
        .screenshots()
        .capture(&capture_request())
        .await
        .unwrap_err();

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

#[tokio::test]
async fn server_error_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    // First attempt fails with 500, the retry lands on the success mock.
    Mock::given(method("POST"))
        .and(path("/v1/screenshots/bulk"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "Internal server error"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"id": "bulk-1", "status": "QUEUED", "totalJobs": 1}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(3));
    let request = BulkRequest::builder()
        .url("https://example.com")
        .build()
        .unwrap();

    let response = client.bulk().create(&request).await.unwrap();
    assert_eq!(response.id, "bulk-1");
    assert_eq!(response.total_jobs, Some(1));
}

#[tokio::test]
async fn server_error_exhausts_retries_and_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2) // initial attempt + 1 retry
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(1));
    let err = client.usage().usage().await.unwrap_err();

    match err {
        AllscreenshotsError::Api { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Api, got {:?}", other),
    }
}

#[tokio::test]
async fn network_error_when_nothing_is_listening() {
    let client = AllscreenshotsClient::builder()
        .api_key("test-api-key")
        .base_url("http://127.0.0.1:1")
        .retry(RetryConfig::none())
        .connect_timeout(Duration::from_secs(1))
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = client.usage().quota().await.unwrap_err();
    assert!(matches!(err, AllscreenshotsError::Network { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn get_job_deserializes_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/jobs/job-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "job-123",
            "status": "COMPLETED",
            "url": "https://example.com",
            "resultUrl": "https://storage.example.com/result.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, RetryConfig::none());
    let job = client.screenshots().get_job("job-123").await.unwrap();

    assert_eq!(job.id, "job-123");
    assert!(job.is_completed());
    assert_eq!(
        job.result_url.as_deref(),
        Some("https://storage.example.com/result.png")
    );
}

#[tokio::test]
async fn delete_schedule_sends_delete_and_ignores_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/schedules/sched-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, RetryConfig::none());
    client.schedules().delete("sched-1").await.unwrap();
}

#[tokio::test]
async fn schedule_history_passes_limit_as_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schedules/sched-1/history"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "scheduleId": "sched-1",
            "totalExecutions": 0,
            "executions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, RetryConfig::none());
    let history = client.schedules().history("sched-1", Some(5)).await.unwrap();
    assert_eq!(history.schedule_id, "sched-1");
    assert!(history.executions.is_empty());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, fast_retry(3));
    let err = client.usage().usage().await.unwrap_err();

    // Decode failures are final: no retry storm on a healthy-but-weird 200.
    assert!(matches!(err, AllscreenshotsError::Decode { .. }));
    assert!(!err.is_retryable());
}
