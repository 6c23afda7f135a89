//! Scheduled screenshot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AllscreenshotsError, Result};
use crate::model::screenshot::{BlockLevel, ImageFormat, ViewportConfig, WaitUntil};

/// Capture options stored with a schedule and applied on every execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleScreenshotOptions {
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
    pub hide_selectors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,
}

/// Request to create a recurring screenshot schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub name: String,
    pub url: String,
    /// Cron expression evaluated in `timezone`.
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScheduleScreenshotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl CreateScheduleRequest {
    pub fn builder() -> CreateScheduleRequestBuilder {
        CreateScheduleRequestBuilder::default()
    }
}

/// Builder for [`CreateScheduleRequest`].
#[derive(Debug, Clone, Default)]
pub struct CreateScheduleRequestBuilder {
    name: Option<String>,
    url: Option<String>,
    schedule: Option<String>,
    timezone: Option<String>,
    options: Option<ScheduleScreenshotOptions>,
    webhook_url: Option<String>,
    webhook_secret: Option<String>,
    retention_days: Option<u32>,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
}

impl CreateScheduleRequestBuilder {
    /// Sets the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the URL to capture (required).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the cron expression (required).
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    /// IANA timezone the cron expression is evaluated in.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn options(mut self, options: ScheduleScreenshotOptions) -> Self {
        self.options = Some(options);
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

    /// How long captured results are retained.
    pub fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(days);
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Validates and builds the request: name, url, and schedule are required.
    pub fn build(self) -> Result<CreateScheduleRequest> {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(AllscreenshotsError::invalid_request("Name is required")),
        };
        let url = match self.url {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err(AllscreenshotsError::invalid_request("URL is required")),
        };
        let schedule = match self.schedule {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                return Err(AllscreenshotsError::invalid_request(
                    "Schedule is required",
                ))
            }
        };

        Ok(CreateScheduleRequest {
            name,
            url,
            schedule,
            timezone: self.timezone,
            options: self.options,
            webhook_url: self.webhook_url,
            webhook_secret: self.webhook_secret,
            retention_days: self.retention_days,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        })
    }
}

/// Partial update of an existing schedule; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScheduleScreenshotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// A schedule as stored by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleResponse {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub schedule: Option<String>,
    pub schedule_description: Option<String>,
    pub timezone: Option<String>,
    pub status: Option<String>,
    pub options: Option<serde_json::Value>,
    pub webhook_url: Option<String>,
    pub retention_days: Option<u32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub last_executed_at: Option<DateTime<Utc>>,
    pub next_execution_at: Option<DateTime<Utc>>,
    pub execution_count: Option<u32>,
    pub success_count: Option<u32>,
    pub failure_count: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Paged list of schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleListResponse {
    pub schedules: Vec<ScheduleResponse>,
    pub total: Option<u32>,
}

/// One past execution of a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleExecutionResponse {
    pub id: String,
    pub executed_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub result_url: Option<String>,
    pub storage_url: Option<String>,
    pub file_size: Option<u64>,
    pub render_time_ms: Option<u64>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Execution history of a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleHistoryResponse {
    pub schedule_id: String,
    pub total_executions: Option<u64>,
    pub executions: Vec<ScheduleExecutionResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_schedule_request() {
        let request = CreateScheduleRequest::builder()
            .name("Daily homepage capture")
            .url("https://example.com")
            .schedule("0 9 * * *")
            .timezone("America/New_York")
            .retention_days(30)
            .build()
            .unwrap();

        assert_eq!(request.name, "Daily homepage capture");
        assert_eq!(request.schedule, "0 9 * * *");
        assert_eq!(request.timezone.as_deref(), Some("America/New_York"));
        assert_eq!(request.retention_days, Some(30));
    }

    #[test]
    fn name_url_and_schedule_are_required() {
        assert!(CreateScheduleRequest::builder()
            .url("https://example.com")
            .schedule("0 9 * * *")
            .build()
            .is_err());
        assert!(CreateScheduleRequest::builder()
            .name("n")
            .schedule("0 9 * * *")
            .build()
            .is_err());
        assert!(CreateScheduleRequest::builder()
            .name("n")
            .url("https://example.com")
            .build()
            .is_err());
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateScheduleRequest {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"Renamed"}"#);
    }

    #[test]
    fn schedule_response_deserializes() {
        let json = r#"{
            "id": "sched-1",
            "name": "Daily",
            "url": "https://example.com",
            "schedule": "0 9 * * *",
            "status": "ACTIVE",
            "executionCount": 12,
            "successCount": 11,
            "failureCount": 1,
            "nextExecutionAt": "2024-02-01T09:00:00Z"
        }"#;

        let response: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "sched-1");
        assert_eq!(response.status.as_deref(), Some("ACTIVE"));
        assert_eq!(response.execution_count, Some(12));
        assert!(response.next_execution_at.is_some());
    }
}
