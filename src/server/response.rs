//! Request and response types for the sample web application.

use serde::{Deserialize, Serialize};

/// Capture form submitted by the demo front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureForm {
    /// URL to capture. Validated by the client library before any API call.
    pub url: Option<String>,
    /// Optional device preset.
    pub device: Option<String>,
    /// Capture the full page instead of the viewport.
    pub full_page: Option<bool>,
}

/// Result of a capture forwarded through the demo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureResponse {
    /// Whether the capture succeeded.
    pub success: bool,
    /// Base64 data URL of the captured image (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Error message (present on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaptureResponse {
    /// Creates a successful response carrying the image data URL.
    pub fn ok(image: String) -> Self {
        Self {
            success: true,
            image: Some(image),
            error: None,
        }
    }

    /// Creates a failed response with an error message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    /// Health status, always "ok" while the process is serving.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Capture requests handled since start.
    pub captures_total: u64,
    /// Captures that succeeded.
    pub captures_success: u64,
    /// Captures that failed.
    pub captures_failed: u64,
}
