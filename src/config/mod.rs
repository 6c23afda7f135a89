//! Configuration for the demo application and client defaults.
//!
//! Configuration is loaded from YAML files; the API key additionally falls
//! back to the `ALLSCREENSHOTS_API_KEY` environment variable when absent.

mod client;
mod logging;
mod retry;
mod server;

pub use client::{ClientConfig, API_KEY_ENV_VAR, DEFAULT_BASE_URL};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use retry::{RetryConfig, TimeoutConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AllscreenshotsError;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Demo web application server settings.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Allscreenshots API connection settings.
    pub client: ClientConfig,

    /// Retry configuration.
    pub retry: RetryConfig,

    /// Timeout configuration.
    pub timeout: TimeoutConfig,
}

impl Config {
    /// Loads configuration from an optional path.
    /// If path is None, uses default search paths.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, AllscreenshotsError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => {
                let default_paths = [
                    "/etc/allscreenshots/config.yaml",
                    "/etc/allscreenshots/config.yml",
                    "config.yaml",
                    "config.yml",
                ];

                for path in &default_paths {
                    if Path::new(path).exists() {
                        return Self::load_from_path(path);
                    }
                }

                // No config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, AllscreenshotsError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AllscreenshotsError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::load_from_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self, AllscreenshotsError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| AllscreenshotsError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    fn validate(&self) -> Result<(), AllscreenshotsError> {
        if self.server.port == 0 {
            return Err(AllscreenshotsError::config("server.port must be > 0"));
        }

        let base_url = self.client.base_url.trim();
        if base_url.is_empty() {
            return Err(AllscreenshotsError::config("client.base_url is required"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AllscreenshotsError::config(
                "client.base_url must start with http:// or https://",
            ));
        }

        if self.retry.multiplier < 1.0 {
            return Err(AllscreenshotsError::config(
                "retry.multiplier must be >= 1.0",
            ));
        }
        if self.retry.max_delay_ms < self.retry.initial_delay_ms {
            return Err(AllscreenshotsError::config(
                "retry.max_delay_ms must be >= retry.initial_delay_ms",
            ));
        }

        if self.timeout.request_seconds == 0 {
            return Err(AllscreenshotsError::config(
                "timeout.request_seconds must be > 0",
            ));
        }

        Ok(())
    }
}
