//! Scheduled screenshot operations.

use crate::client::http::HttpTransport;
use crate::error::Result;
use crate::model::{
    CreateScheduleRequest, ScheduleHistoryResponse, ScheduleListResponse, ScheduleResponse,
    UpdateScheduleRequest,
};

/// API for recurring screenshot schedules.
#[derive(Debug, Clone, Copy)]
pub struct SchedulesApi<'a> {
    http: &'a HttpTransport,
}

impl<'a> SchedulesApi<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Creates a new schedule.
    pub async fn create(&self, request: &CreateScheduleRequest) -> Result<ScheduleResponse> {
        self.http.post_json("/v1/schedules", request).await
    }

    /// Lists all schedules.
    pub async fn list(&self) -> Result<ScheduleListResponse> {
        self.http.get_json("/v1/schedules").await
    }

    /// Gets a specific schedule.
    pub async fn get(&self, schedule_id: &str) -> Result<ScheduleResponse> {
        self.http
            .get_json(&format!("/v1/schedules/{}", schedule_id))
            .await
    }

    /// Updates an existing schedule; absent fields are left unchanged.
    pub async fn update(
        &self,
        schedule_id: &str,
        request: &UpdateScheduleRequest,
    ) -> Result<ScheduleResponse> {
        self.http
            .put_json(&format!("/v1/schedules/{}", schedule_id), request)
            .await
    }

    /// Deletes a schedule.
    pub async fn delete(&self, schedule_id: &str) -> Result<()> {
        self.http
            .delete(&format!("/v1/schedules/{}", schedule_id))
            .await
    }

    /// Pauses a schedule.
    pub async fn pause(&self, schedule_id: &str) -> Result<ScheduleResponse> {
        self.http
            .post_empty(&format!("/v1/schedules/{}/pause", schedule_id))
            .await
    }

    /// Resumes a paused schedule.
    pub async fn resume(&self, schedule_id: &str) -> Result<ScheduleResponse> {
        self.http
            .post_empty(&format!("/v1/schedules/{}/resume", schedule_id))
            .await
    }

    /// Manually triggers a schedule execution.
    pub async fn trigger(&self, schedule_id: &str) -> Result<ScheduleResponse> {
        self.http
            .post_empty(&format!("/v1/schedules/{}/trigger", schedule_id))
            .await
    }

    /// Gets the execution history for a schedule, newest first.
    pub async fn history(
        &self,
        schedule_id: &str,
        limit: Option<u32>,
    ) -> Result<ScheduleHistoryResponse> {
        let path = match limit {
            Some(limit) => format!("/v1/schedules/{}/history?limit={}", schedule_id, limit),
            None => format!("/v1/schedules/{}/history", schedule_id),
        };
        self.http.get_json(&path).await
    }
}
