//! Bulk (batch) screenshot job types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AllscreenshotsError, Result};
use crate::model::screenshot::{BlockLevel, ImageFormat, ViewportConfig, WaitUntil};

/// Upper bound on URLs per bulk job, enforced client-side.
const MAX_BULK_URLS: usize = 100;

/// Capture options applied to every URL in a bulk job unless overridden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,
}

/// Per-URL overrides of the bulk defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUrlOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,
}

/// One URL entry in a bulk job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUrlRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BulkUrlOptions>,
}

impl BulkUrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: BulkUrlOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Request to capture a batch of URLs as one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    pub urls: Vec<BulkUrlRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BulkDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

impl BulkRequest {
    pub fn builder() -> BulkRequestBuilder {
        BulkRequestBuilder::default()
    }
}

/// Builder for [`BulkRequest`].
#[derive(Debug, Clone, Default)]
pub struct BulkRequestBuilder {
    urls: Vec<BulkUrlRequest>,
    defaults: Option<BulkDefaults>,
    webhook_url: Option<String>,
    webhook_secret: Option<String>,
}

impl BulkRequestBuilder {
    /// Appends a URL with no per-URL overrides.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(BulkUrlRequest::new(url));
        self
    }

    /// Appends a URL entry with options.
    pub fn url_request(mut self, request: BulkUrlRequest) -> Self {
        self.urls.push(request);
        self
    }

    pub fn defaults(mut self, defaults: BulkDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }

    /// Validates and builds the request: at least one URL, at most 100.
    pub fn build(self) -> Result<BulkRequest> {
        if self.urls.is_empty() {
            return Err(AllscreenshotsError::invalid_request(
                "At least one URL is required",
            ));
        }
        if self.urls.len() > MAX_BULK_URLS {
            return Err(AllscreenshotsError::invalid_request(format!(
                "Maximum {} URLs allowed",
                MAX_BULK_URLS
            )));
        }

        Ok(BulkRequest {
            urls: self.urls,
            defaults: self.defaults,
            webhook_url: self.webhook_url,
            webhook_secret: self.webhook_secret,
        })
    }
}

/// Bulk job creation response with per-URL job entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkResponse {
    pub id: String,
    pub status: String,
    pub total_jobs: Option<u32>,
    pub completed_jobs: Option<u32>,
    pub failed_jobs: Option<u32>,
    pub progress: Option<u32>,
    pub jobs: Option<Vec<BulkJobInfo>>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Minimal per-URL job entry in a bulk creation response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkJobInfo {
    pub id: String,
    pub url: Option<String>,
    pub status: String,
}

/// One row in the bulk job listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkJobSummary {
    pub id: String,
    pub status: String,
    pub total_jobs: Option<u32>,
    pub completed_jobs: Option<u32>,
    pub failed_jobs: Option<u32>,
    pub progress: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-URL detail in a bulk status response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkJobDetailInfo {
    pub id: String,
    pub url: Option<String>,
    pub status: String,
    pub result_url: Option<String>,
    pub storage_url: Option<String>,
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub file_size: Option<u64>,
    pub render_time_ms: Option<u64>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Detailed status of a bulk job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkStatusResponse {
    pub id: String,
    pub status: String,
    pub total_jobs: Option<u32>,
    pub completed_jobs: Option<u32>,
    pub failed_jobs: Option<u32>,
    pub progress: Option<u32>,
    pub jobs: Option<Vec<BulkJobDetailInfo>>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_string_urls() {
        let request = BulkRequest::builder()
            .url("https://example.com")
            .url("https://github.com")
            .build()
            .unwrap();

        assert_eq!(request.urls.len(), 2);
        assert_eq!(request.urls[0].url, "https://example.com");
        assert_eq!(request.urls[1].url, "https://github.com");
    }

    #[test]
    fn builds_with_url_requests() {
        let request = BulkRequest::builder()
            .url_request(BulkUrlRequest::new("https://example.com").with_options(
                BulkUrlOptions {
                    device: Some("iPhone 14".to_string()),
                    full_page: Some(true),
                    ..Default::default()
                },
            ))
            .build()
            .unwrap();

        assert_eq!(request.urls.len(), 1);
        let options = request.urls[0].options.as_ref().unwrap();
        assert_eq!(options.device.as_deref(), Some("iPhone 14"));
        assert_eq!(options.full_page, Some(true));
    }

    #[test]
    fn builds_with_defaults() {
        let request = BulkRequest::builder()
            .url("https://example.com")
            .defaults(BulkDefaults {
                device: Some("Desktop HD".to_string()),
                full_page: Some(true),
                format: Some(ImageFormat::Png),
                ..Default::default()
            })
            .build()
            .unwrap();

        let defaults = request.defaults.unwrap();
        assert_eq!(defaults.device.as_deref(), Some("Desktop HD"));
        assert_eq!(defaults.full_page, Some(true));
        assert_eq!(defaults.format, Some(ImageFormat::Png));
    }

    #[test]
    fn requires_at_least_one_url() {
        assert!(BulkRequest::builder().build().is_err());
    }

    #[test]
    fn limited_to_100_urls() {
        let mut builder = BulkRequest::builder();
        for i in 0..101 {
            builder = builder.url(format!("https://example.com/{}", i));
        }
        assert!(builder.build().is_err());

        let mut builder = BulkRequest::builder();
        for i in 0..100 {
            builder = builder.url(format!("https://example.com/{}", i));
        }
        assert!(builder.build().is_ok());
    }

    #[test]
    fn serializes_to_json() {
        let request = BulkRequest::builder()
            .url("https://example.com")
            .defaults(BulkDefaults {
                device: Some("Desktop HD".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""url":"https://example.com""#));
        assert!(json.contains(r#""device":"Desktop HD""#));
        assert!(!json.contains("webhookUrl"));
    }

    #[test]
    fn status_response_deserializes() {
        let json = r#"{
            "id": "bulk-1",
            "status": "PROCESSING",
            "totalJobs": 3,
            "completedJobs": 1,
            "failedJobs": 0,
            "progress": 33,
            "jobs": [
                {"id": "job-1", "url": "https://example.com", "status": "COMPLETED",
                 "resultUrl": "https://storage.example.com/1.png", "fileSize": 12345}
            ]
        }"#;

        let response: BulkStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "bulk-1");
        assert_eq!(response.total_jobs, Some(3));
        let jobs = response.jobs.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].file_size, Some(12345));
    }
}
