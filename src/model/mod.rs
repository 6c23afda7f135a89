//! Request and response types mirroring the Allscreenshots JSON API.
//!
//! Wire names are camelCase; optional fields are omitted from serialized
//! output rather than sent as null, and unknown fields in responses are
//! ignored. Requests with required fields are constructed through builders
//! that validate before any network call is made.

mod bulk;
mod compose;
mod job;
mod schedule;
mod screenshot;
mod usage;

pub use bulk::{
    BulkDefaults, BulkJobDetailInfo, BulkJobInfo, BulkJobSummary, BulkRequest, BulkRequestBuilder,
    BulkResponse, BulkStatusResponse, BulkUrlOptions, BulkUrlRequest,
};
pub use compose::{
    Alignment, BorderConfig, CaptureDefaults, CaptureItem, ComposeJobStatusResponse,
    ComposeJobSummaryResponse, ComposeOutputConfig, ComposeRequest, ComposeRequestBuilder,
    ComposeResponse, LabelConfig, LayoutPreviewResponse, LayoutType, PlacementPreview,
    ShadowConfig, VariantConfig,
};
pub use job::{AsyncJobCreatedResponse, JobResponse, JobStatus};
pub use schedule::{
    CreateScheduleRequest, CreateScheduleRequestBuilder, ScheduleExecutionResponse,
    ScheduleHistoryResponse, ScheduleListResponse, ScheduleResponse, ScheduleScreenshotOptions,
    UpdateScheduleRequest,
};
pub use screenshot::{
    BlockLevel, ImageFormat, ResponseType, ScreenshotRequest, ScreenshotRequestBuilder,
    ViewportConfig, WaitUntil,
};
pub use usage::{
    BandwidthQuotaResponse, PeriodUsageResponse, QuotaDetailResponse, QuotaResponse,
    QuotaStatusResponse, TotalsResponse, UsageResponse,
};

use serde::{Deserialize, Serialize};

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Short error identifier.
    pub error: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Machine-readable error code.
    pub code: Option<String>,
    /// Additional error context.
    pub details: Option<serde_json::Value>,
}
