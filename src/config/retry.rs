//! Retry and timeout configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration for transient failures (network errors, rate limits,
/// 5xx responses) with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt (0 disables retries).
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds.
    pub initial_delay_ms: u64,

    /// Cap on the delay between retries in milliseconds.
    pub max_delay_ms: u64,

    /// Backoff multiplier applied per attempt.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Returns a configuration with retries disabled.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Calculates the backoff delay for a retry attempt (0-based):
    /// `min(initial_delay * multiplier^attempt, max_delay)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.initial_delay_ms as f64 * self.multiplier.powi(attempt as i32);
        Duration::from_millis((delay as u64).min(self.max_delay_ms))
    }
}

/// Timeout configuration for the HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_seconds: u64,

    /// Total per-request timeout in seconds. Generous by default because
    /// synchronous captures block until the page has rendered.
    pub request_seconds: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_seconds: 30,
            request_seconds: 120,
        }
    }
}

impl TimeoutConfig {
    /// Connection timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_seconds)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_seconds)
    }
}
