//! Single screenshot operations.

use crate::client::http::HttpTransport;
use crate::error::Result;
use crate::model::{AsyncJobCreatedResponse, JobResponse, ScreenshotRequest};

/// API for screenshot capture and job tracking.
///
/// Obtained from [`AllscreenshotsClient::screenshots`].
///
/// [`AllscreenshotsClient::screenshots`]: crate::client::AllscreenshotsClient::screenshots
#[derive(Debug, Clone, Copy)]
pub struct ScreenshotsApi<'a> {
    http: &'a HttpTransport,
}

impl<'a> ScreenshotsApi<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Captures a screenshot synchronously and returns the image bytes.
    pub async fn capture(&self, request: &ScreenshotRequest) -> Result<Vec<u8>> {
        self.http.post_bytes("/v1/screenshots", request).await
    }

    /// Submits a capture to be rendered asynchronously.
    pub async fn capture_async(
        &self,
        request: &ScreenshotRequest,
    ) -> Result<AsyncJobCreatedResponse> {
        self.http.post_json("/v1/screenshots/async", request).await
    }

    /// Lists all screenshot jobs.
    pub async fn list_jobs(&self) -> Result<Vec<JobResponse>> {
        self.http.get_json("/v1/screenshots/jobs").await
    }

    /// Gets a specific job's status.
    pub async fn get_job(&self, job_id: &str) -> Result<JobResponse> {
        self.http
            .get_json(&format!("/v1/screenshots/jobs/{}", job_id))
            .await
    }

    /// Gets the result image of a completed job.
    pub async fn get_job_result(&self, job_id: &str) -> Result<Vec<u8>> {
        self.http
            .get_bytes(&format!("/v1/screenshots/jobs/{}/result", job_id))
            .await
    }

    /// Cancels a pending or processing job.
    pub async fn cancel_job(&self, job_id: &str) -> Result<JobResponse> {
        self.http
            .post_empty(&format!("/v1/screenshots/jobs/{}/cancel", job_id))
            .await
    }
}
