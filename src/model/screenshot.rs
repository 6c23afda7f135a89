//! Single screenshot capture request and its option types.

use serde::{Deserialize, Serialize};

use crate::error::{AllscreenshotsError, Result};

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Jpg,
    Webp,
    Pdf,
}

/// Page readiness event to wait for before capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    Load,
    DomContentLoaded,
    NetworkIdle,
    Commit,
}

/// Aggressiveness of request blocking applied while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockLevel {
    None,
    Light,
    Normal,
    Pro,
    ProPlus,
    Ultimate,
}

/// How the server should deliver the capture result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseType {
    Binary,
    Json,
}

/// Browser viewport dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<u32>,
}

impl ViewportConfig {
    /// Creates a viewport with explicit dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            device_scale_factor: None,
        }
    }
}

/// Parameters for a single screenshot capture.
///
/// Built through [`ScreenshotRequest::builder`]; the target URL is required
/// and validated before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotRequest {
    pub url: String,
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
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
}

impl ScreenshotRequest {
    /// Starts building a capture request.
    pub fn builder() -> ScreenshotRequestBuilder {
        ScreenshotRequestBuilder::default()
    }
}

/// Builder for [`ScreenshotRequest`].
#[derive(Debug, Clone, Default)]
pub struct ScreenshotRequestBuilder {
    url: Option<String>,
    viewport: Option<ViewportConfig>,
    device: Option<String>,
    format: Option<ImageFormat>,
    full_page: Option<bool>,
    quality: Option<u32>,
    delay: Option<u32>,
    wait_for: Option<String>,
    wait_until: Option<WaitUntil>,
    timeout: Option<u32>,
    dark_mode: Option<bool>,
    custom_css: Option<String>,
    hide_selectors: Option<Vec<String>>,
    selector: Option<String>,
    block_ads: Option<bool>,
    block_cookie_banners: Option<bool>,
    block_level: Option<BlockLevel>,
    webhook_url: Option<String>,
    webhook_secret: Option<String>,
    response_type: Option<ResponseType>,
}

impl ScreenshotRequestBuilder {
    /// Sets the URL to capture (required).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets an explicit viewport. Ignored if a device preset is given.
    pub fn viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Sets a device preset (e.g. "Desktop HD", "iPhone 14").
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Captures the full scrollable page instead of the viewport.
    pub fn full_page(mut self, full_page: bool) -> Self {
        self.full_page = Some(full_page);
        self
    }

    /// Image quality 1-100 (lossy formats only).
    pub fn quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Fixed delay in milliseconds before capturing.
    pub fn delay(mut self, delay: u32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// CSS selector to wait for before capturing.
    pub fn wait_for(mut self, selector: impl Into<String>) -> Self {
        self.wait_for = Some(selector.into());
        self
    }

    pub fn wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = Some(wait_until);
        self
    }

    /// Navigation timeout in milliseconds.
    pub fn timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }

    /// CSS injected into the page before capturing.
    pub fn custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Replaces the set of selectors hidden before capturing.
    pub fn hide_selectors(mut self, selectors: Vec<String>) -> Self {
        self.hide_selectors = Some(selectors);
        self
    }

    /// Appends a single selector to hide before capturing.
    pub fn hide_selector(mut self, selector: impl Into<String>) -> Self {
        self.hide_selectors
            .get_or_insert_with(Vec::new)
            .push(selector.into());
        self
    }

    /// Captures only the element matching this selector.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn block_ads(mut self, block_ads: bool) -> Self {
        self.block_ads = Some(block_ads);
        self
    }

    pub fn block_cookie_banners(mut self, block: bool) -> Self {
        self.block_cookie_banners = Some(block);
        self
    }

    pub fn block_level(mut self, level: BlockLevel) -> Self {
        self.block_level = Some(level);
        self
    }

    /// Webhook notified when an async capture completes.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Secret used to sign webhook deliveries.
    pub fn webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Validates and builds the request.
    ///
    /// Fails with [`AllscreenshotsError::InvalidRequest`] when the URL is
    /// missing or blank, before any network call happens.
    pub fn build(self) -> Result<ScreenshotRequest> {
        let url = match self.url {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err(AllscreenshotsError::invalid_request("URL is required")),
        };

        Ok(ScreenshotRequest {
            url,
            viewport: self.viewport,
            device: self.device,
            format: self.format,
            full_page: self.full_page,
            quality: self.quality,
            delay: self.delay,
            wait_for: self.wait_for,
            wait_until: self.wait_until,
            timeout: self.timeout,
            dark_mode: self.dark_mode,
            custom_css: self.custom_css,
            hide_selectors: self.hide_selectors,
            selector: self.selector,
            block_ads: self.block_ads,
            block_cookie_banners: self.block_cookie_banners,
            block_level: self.block_level,
            webhook_url: self.webhook_url,
            webhook_secret: self.webhook_secret,
            response_type: self.response_type,
        })
    }
}
