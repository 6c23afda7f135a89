//! Allscreenshots API client.
//!
//! The [`AllscreenshotsClient`] owns the HTTP transport and hands out
//! per-resource facades:
//!
//! ```no_run
//! use allscreenshots::client::AllscreenshotsClient;
//! use allscreenshots::model::ScreenshotRequest;
//!
//! # async fn demo() -> allscreenshots::Result<()> {
//! let client = AllscreenshotsClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let image = client
//!     .screenshots()
//!     .capture(
//!         &ScreenshotRequest::builder()
//!             .url("https://example.com")
//!             .device("Desktop HD")
//!             .full_page(true)
//!             .build()?,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod bulk;
mod compose;
mod http;
mod schedules;
mod screenshots;
mod usage;

#[cfg(test)]
mod http_tests;

pub use bulk::BulkApi;
pub use compose::{ComposeApi, LayoutPreviewQuery};
pub use schedules::SchedulesApi;
pub use screenshots::ScreenshotsApi;
pub use usage::UsageApi;

use std::time::Duration;

use crate::config::{ClientConfig, Config, RetryConfig, TimeoutConfig, DEFAULT_BASE_URL};
use crate::error::Result;
use http::HttpTransport;

/// Client for the Allscreenshots API.
///
/// Cheap to clone; configuration is set once at construction and read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct AllscreenshotsClient {
    http: HttpTransport,
}

impl AllscreenshotsClient {
    /// Starts building a client.
    ///
    /// When no API key is set explicitly, the `ALLSCREENSHOTS_API_KEY`
    /// environment variable is used as a fallback.
    pub fn builder() -> AllscreenshotsClientBuilder {
        AllscreenshotsClientBuilder::default()
    }

    /// Builds a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = AllscreenshotsClientBuilder::default()
            .base_url(&config.client.base_url)
            .connect_timeout(config.timeout.connect_timeout())
            .timeout(config.timeout.request_timeout())
            .retry(config.retry.clone());
        if let Some(key) = &config.client.api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Single screenshot capture and job tracking.
    pub fn screenshots(&self) -> ScreenshotsApi<'_> {
        ScreenshotsApi::new(&self.http)
    }

    /// Batch screenshot jobs.
    pub fn bulk(&self) -> BulkApi<'_> {
        BulkApi::new(&self.http)
    }

    /// Composed (multi-capture) screenshots.
    pub fn compose(&self) -> ComposeApi<'_> {
        ComposeApi::new(&self.http)
    }

    /// Recurring screenshot schedules.
    pub fn schedules(&self) -> SchedulesApi<'_> {
        SchedulesApi::new(&self.http)
    }

    /// Usage statistics and quota status.
    pub fn usage(&self) -> UsageApi<'_> {
        UsageApi::new(&self.http)
    }
}

/// Builder for [`AllscreenshotsClient`].
#[derive(Debug, Clone)]
pub struct AllscreenshotsClientBuilder {
    api_key: Option<String>,
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
    retry: RetryConfig,
}

impl Default for AllscreenshotsClientBuilder {
    fn default() -> Self {
        let timeouts = TimeoutConfig::default();
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: timeouts.connect_timeout(),
            timeout: timeouts.request_timeout(),
            retry: RetryConfig::default(),
        }
    }
}

impl AllscreenshotsClientBuilder {
    /// Sets the API key explicitly.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL (defaults to the production API).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Connection establishment timeout (default 30s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Total per-request timeout (default 120s; synchronous captures block
    /// until the page has rendered).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for transient failures (default: 3 retries, exponential
    /// backoff starting at 1s).
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<AllscreenshotsClient> {
        let api_key = ClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key,
        }
        .resolve_api_key();

        let http = HttpTransport::new(
            self.base_url,
            api_key,
            self.connect_timeout,
            self.timeout,
            self.retry,
        )?;

        Ok(AllscreenshotsClient { http })
    }
}
