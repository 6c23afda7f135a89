//! Application state for the sample web application.

use crate::client::AllscreenshotsClient;
use crate::config::Config;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared application state.
pub struct AppState {
    /// Configured Allscreenshots client.
    pub client: AllscreenshotsClient,
    /// Application start time.
    pub start_time: Instant,
    /// Statistics counters.
    pub stats: Stats,
}

impl AppState {
    /// Creates the application state from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = AllscreenshotsClient::from_config(config)?;

        Ok(Self {
            client,
            start_time: Instant::now(),
            stats: Stats::default(),
        })
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Increments the capture request counter.
    pub fn increment_requests(&self) {
        self.stats.captures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the successful capture counter.
    pub fn increment_success(&self) {
        self.stats.captures_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the failed capture counter.
    pub fn increment_failed(&self) {
        self.stats.captures_failed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Statistics counters.
#[derive(Default)]
pub struct Stats {
    /// Total capture requests received.
    pub captures_total: AtomicU64,
    /// Successful captures.
    pub captures_success: AtomicU64,
    /// Failed captures.
    pub captures_failed: AtomicU64,
}

impl Stats {
    /// Gets the current statistics as a snapshot.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            captures_total: self.captures_total.load(Ordering::Relaxed),
            captures_success: self.captures_success.load(Ordering::Relaxed),
            captures_failed: self.captures_failed.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of statistics counters.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub captures_total: u64,
    pub captures_success: u64,
    pub captures_failed: u64,
}
