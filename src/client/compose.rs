//! Compose operations: combining several captures into one image.

use crate::client::http::HttpTransport;
use crate::error::Result;
use crate::model::{
    ComposeJobStatusResponse, ComposeJobSummaryResponse, ComposeRequest, ComposeResponse,
    LayoutPreviewResponse,
};

/// Query parameters for a layout preview.
#[derive(Debug, Clone, Default)]
pub struct LayoutPreviewQuery {
    /// Layout name (e.g. "GRID", "AUTO").
    pub layout: String,
    /// Number of images to place.
    pub image_count: u32,
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
    /// Comma-separated aspect ratios, e.g. "16:9,4:3".
    pub aspect_ratios: Option<String>,
}

/// API for composed screenshots.
#[derive(Debug, Clone, Copy)]
pub struct ComposeApi<'a> {
    http: &'a HttpTransport,
}

impl<'a> ComposeApi<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Creates a composed screenshot from multiple captures.
    pub async fn create(&self, request: &ComposeRequest) -> Result<ComposeResponse> {
        self.http
            .post_json("/v1/screenshots/compose", request)
            .await
    }

    /// Creates a composed screenshot asynchronously.
    ///
    /// The request is sent with the `async` flag forced on regardless of its
    /// current value.
    pub async fn create_async(
        &self,
        request: &ComposeRequest,
    ) -> Result<ComposeJobStatusResponse> {
        let request = request.clone().into_async();
        self.http
            .post_json("/v1/screenshots/compose", &request)
            .await
    }

    /// Previews a layout without capturing anything.
    pub async fn preview(&self, query: &LayoutPreviewQuery) -> Result<LayoutPreviewResponse> {
        let mut params = vec![
            format!("layout={}", query.layout),
            format!("image_count={}", query.image_count),
        ];
        if let Some(width) = query.canvas_width {
            params.push(format!("canvas_width={}", width));
        }
        if let Some(height) = query.canvas_height {
            params.push(format!("canvas_height={}", height));
        }
        if let Some(ratios) = &query.aspect_ratios {
            params.push(format!("aspect_ratios={}", ratios));
        }

        let path = format!("/v1/screenshots/compose/preview?{}", params.join("&"));
        self.http.get_json(&path).await
    }

    /// Lists all compose jobs.
    pub async fn list_jobs(&self) -> Result<Vec<ComposeJobSummaryResponse>> {
        self.http.get_json("/v1/screenshots/compose/jobs").await
    }

    /// Gets a compose job's status.
    pub async fn get_job(&self, job_id: &str) -> Result<ComposeJobStatusResponse> {
        self.http
            .get_json(&format!("/v1/screenshots/compose/jobs/{}", job_id))
            .await
    }
}
