//! Bulk screenshot operations.

use crate::client::http::HttpTransport;
use crate::error::Result;
use crate::model::{BulkJobSummary, BulkRequest, BulkResponse, BulkStatusResponse};

/// API for batch screenshot jobs.
#[derive(Debug, Clone, Copy)]
pub struct BulkApi<'a> {
    http: &'a HttpTransport,
}

impl<'a> BulkApi<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Creates a bulk screenshot job.
    pub async fn create(&self, request: &BulkRequest) -> Result<BulkResponse> {
        self.http.post_json("/v1/screenshots/bulk", request).await
    }

    /// Lists all bulk jobs.
    pub async fn list(&self) -> Result<Vec<BulkJobSummary>> {
        self.http.get_json("/v1/screenshots/bulk").await
    }

    /// Gets detailed status of a bulk job, including per-URL results.
    pub async fn status(&self, bulk_id: &str) -> Result<BulkStatusResponse> {
        self.http
            .get_json(&format!("/v1/screenshots/bulk/{}", bulk_id))
            .await
    }

    /// Cancels a bulk job.
    pub async fn cancel(&self, bulk_id: &str) -> Result<BulkJobSummary> {
        self.http
            .post_empty(&format!("/v1/screenshots/bulk/{}/cancel", bulk_id))
            .await
    }
}
