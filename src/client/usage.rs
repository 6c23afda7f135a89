//! Usage and quota queries.

use crate::client::http::HttpTransport;
use crate::error::Result;
use crate::model::{QuotaStatusResponse, UsageResponse};

/// API for usage statistics and quota status.
#[derive(Debug, Clone, Copy)]
pub struct UsageApi<'a> {
    http: &'a HttpTransport,
}

impl<'a> UsageApi<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Gets usage statistics for the account.
    pub async fn usage(&self) -> Result<UsageResponse> {
        self.http.get_json("/v1/usage").await
    }

    /// Gets the current quota status.
    pub async fn quota(&self) -> Result<QuotaStatusResponse> {
        self.http.get_json("/v1/usage/quota").await
    }
}
