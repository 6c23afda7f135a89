//! Client connection configuration.

use serde::{Deserialize, Serialize};

/// Default base URL of the Allscreenshots API.
pub const DEFAULT_BASE_URL: &str = "https://api.allscreenshots.com";

/// Environment variable consulted when no API key is configured explicitly.
pub const API_KEY_ENV_VAR: &str = "ALLSCREENSHOTS_API_KEY";

/// Connection settings for the Allscreenshots API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API.
    pub base_url: String,

    /// API key. When absent, the `ALLSCREENSHOTS_API_KEY` environment
    /// variable is used as a fallback at client construction time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    /// Resolves the API key: explicit configuration first, then the
    /// environment variable fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => Some(key.clone()),
            _ => std::env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty()),
        }
    }
}
