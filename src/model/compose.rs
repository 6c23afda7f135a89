//! Compose job types: several captures combined into one output image.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::screenshot::{ImageFormat, ViewportConfig};

/// Canvas layout used when combining captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutType {
    Grid,
    Horizontal,
    Vertical,
    Masonry,
    Mondrian,
    Partitioning,
    Auto,
}

/// Vertical alignment of images within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Top,
    Center,
    Bottom,
}

/// One page to capture for the composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureItem {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

impl CaptureItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One rendering variant of a single URL (e.g. desktop vs. mobile).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

/// Default capture options applied to every item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<String>,
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
    pub block_level: Option<String>,
}

/// Label rendering options for the composed image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

/// Border drawn around each placed image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

/// Drop shadow under each placed image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Output canvas options for a compose job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowConfig>,
}

/// Request to compose multiple captures into a single image.
///
/// Either `captures` lists distinct URLs, or `url` plus `variants` renders
/// one URL under several configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captures: Option<Vec<CaptureItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<CaptureDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ComposeOutputConfig>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captures_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants_mode: Option<bool>,
}

impl ComposeRequest {
    pub fn builder() -> ComposeRequestBuilder {
        ComposeRequestBuilder::default()
    }

    /// Returns a copy of this request with `async` forced on.
    pub fn into_async(mut self) -> Self {
        self.async_mode = Some(true);
        self
    }
}

/// Builder for [`ComposeRequest`].
#[derive(Debug, Clone, Default)]
pub struct ComposeRequestBuilder {
    request: ComposeRequest,
}

impl ComposeRequestBuilder {
    /// Appends a capture item.
    pub fn capture(mut self, item: CaptureItem) -> Self {
        self.request
            .captures
            .get_or_insert_with(Vec::new)
            .push(item);
        self
    }

    /// Replaces the capture list.
    pub fn captures(mut self, captures: Vec<CaptureItem>) -> Self {
        self.request.captures = Some(captures);
        self
    }

    /// Sets the single URL for variants mode.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.request.url = Some(url.into());
        self
    }

    /// Appends a variant.
    pub fn variant(mut self, variant: VariantConfig) -> Self {
        self.request
            .variants
            .get_or_insert_with(Vec::new)
            .push(variant);
        self
    }

    /// Replaces the variant list.
    pub fn variants(mut self, variants: Vec<VariantConfig>) -> Self {
        self.request.variants = Some(variants);
        self
    }

    pub fn defaults(mut self, defaults: CaptureDefaults) -> Self {
        self.request.defaults = Some(defaults);
        self
    }

    pub fn output(mut self, output: ComposeOutputConfig) -> Self {
        self.request.output = Some(output);
        self
    }

    pub fn async_mode(mut self, async_mode: bool) -> Self {
        self.request.async_mode = Some(async_mode);
        self
    }

    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.request.webhook_url = Some(url.into());
        self
    }

    pub fn webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.request.webhook_secret = Some(secret.into());
        self
    }

    pub fn build(self) -> ComposeRequest {
        self.request
    }
}

/// Result of a synchronous compose call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeResponse {
    pub url: Option<String>,
    pub storage_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub file_size: Option<u64>,
    pub render_time_ms: Option<u64>,
    pub layout: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Status of an asynchronous compose job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeJobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub progress: Option<u32>,
    pub total_captures: Option<u32>,
    pub completed_captures: Option<u32>,
    pub result: Option<ComposeResponse>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// One row in the compose job listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeJobSummaryResponse {
    pub job_id: String,
    pub status: String,
    pub total_captures: Option<u32>,
    pub completed_captures: Option<u32>,
    pub failed_captures: Option<u32>,
    pub progress: Option<u32>,
    pub layout_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Computed placement of one image in a layout preview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementPreview {
    pub index: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub label: Option<String>,
}

/// Layout preview: where images would land without capturing anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPreviewResponse {
    pub layout: Option<String>,
    pub resolved_layout: Option<String>,
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
    pub placements: Option<Vec<PlacementPreview>>,
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_captures_mode_request() {
        let request = ComposeRequest::builder()
            .capture(CaptureItem::new("https://example.com").with_device("Desktop HD"))
            .capture(CaptureItem::new("https://github.com").with_device("iPhone 14"))
            .output(ComposeOutputConfig {
                layout: Some(LayoutType::Grid),
                columns: Some(2),
                ..Default::default()
            })
            .build();

        let captures = request.captures.unwrap();
        assert_eq!(captures.len(), 2);
        assert_eq!(captures[1].device.as_deref(), Some("iPhone 14"));
        assert_eq!(request.output.unwrap().layout, Some(LayoutType::Grid));
    }

    #[test]
    fn async_is_renamed_on_the_wire() {
        let request = ComposeRequest::builder()
            .url("https://example.com")
            .async_mode(true)
            .build();

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""async":true"#));
        assert!(!json.contains("asyncMode"));
    }

    #[test]
    fn into_async_forces_async_flag() {
        let request = ComposeRequest::builder().url("https://example.com").build();
        assert_eq!(request.async_mode, None);
        assert_eq!(request.into_async().async_mode, Some(true));
    }

    #[test]
    fn layout_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&LayoutType::Mondrian).unwrap(),
            r#""MONDRIAN""#
        );
        assert_eq!(
            serde_json::to_string(&Alignment::Center).unwrap(),
            r#""center""#
        );
    }

    #[test]
    fn job_status_deserializes_with_nested_result() {
        let json = r#"{
            "jobId": "compose-1",
            "status": "COMPLETED",
            "progress": 100,
            "totalCaptures": 2,
            "completedCaptures": 2,
            "result": {
                "url": "https://storage.example.com/composed.png",
                "width": 2400,
                "height": 1200,
                "layout": "GRID"
            }
        }"#;

        let response: ComposeJobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.job_id, "compose-1");
        let result = response.result.unwrap();
        assert_eq!(result.width, Some(2400));
        assert_eq!(result.layout.as_deref(), Some("GRID"));
    }
}
