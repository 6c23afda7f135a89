//! Asynchronous job status types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a server-side job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    Cancelled,
}

impl JobStatus {
    /// Whether the job has reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled
        )
    }
}

impl FromStr for JobStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(JobStatus::Queued),
            "PROCESSING" => Ok(JobStatus::Processing),
            "COMPLETED" => Ok(JobStatus::Completed),
            "FAILED" => Ok(JobStatus::Failed),
            "CANCELLED" => Ok(JobStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Response to an asynchronous capture submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsyncJobCreatedResponse {
    pub id: String,
    pub status: String,
    pub status_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Status of a screenshot job.
///
/// The raw `status` string is kept as delivered by the server; use
/// [`JobResponse::status_enum`] or the predicate helpers for typed checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobResponse {
    pub id: String,
    pub status: String,
    pub url: Option<String>,
    pub result_url: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub metadata: Option<serde_json::Value>,
}

impl JobResponse {
    /// The status parsed into [`JobStatus`], if it is a known value.
    pub fn status_enum(&self) -> Option<JobStatus> {
        self.status.parse().ok()
    }

    pub fn is_queued(&self) -> bool {
        self.status_enum() == Some(JobStatus::Queued)
    }

    pub fn is_processing(&self) -> bool {
        self.status_enum() == Some(JobStatus::Processing)
    }

    pub fn is_completed(&self) -> bool {
        self.status_enum() == Some(JobStatus::Completed)
    }

    pub fn is_failed(&self) -> bool {
        self.status_enum() == Some(JobStatus::Failed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status_enum() == Some(JobStatus::Cancelled)
    }

    /// Whether the job has reached a final state.
    pub fn is_terminal(&self) -> bool {
        self.status_enum().map(|s| s.is_terminal()).unwrap_or(false)
    }
}
