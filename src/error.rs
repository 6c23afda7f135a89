//! Error types for the Allscreenshots client.
//!
//! Every non-2xx response is translated into a typed error carrying the
//! API-supplied message and error code where the server provides them.
//! Callers can inspect the variant (or [`AllscreenshotsError::is_retryable`])
//! to decide whether to retry, surface to a user, or treat as fatal.

use std::time::Duration;
use thiserror::Error;

/// Default error codes used when the server response carries none.
pub mod error_code {
    /// Request was rejected by server-side validation (400).
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    /// Missing or invalid API key (401).
    pub const AUTHENTICATION_ERROR: &str = "AUTHENTICATION_ERROR";
    /// API key is valid but not allowed to perform the operation (403).
    pub const FORBIDDEN: &str = "FORBIDDEN";
    /// Too many requests (429).
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    /// Any other non-2xx response.
    pub const API_ERROR: &str = "API_ERROR";
    /// Transport-level failure, no response received.
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
}

/// CLI exit codes.
pub mod exit_code {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// General error
    pub const GENERAL_ERROR: i32 = 1;
    /// Configuration error
    pub const CONFIG_ERROR: i32 = 2;
    /// Network error
    pub const NETWORK_ERROR: i32 = 3;
    /// Authentication error
    pub const AUTH_ERROR: i32 = 5;
    /// Command line argument error
    pub const CLI_ERROR: i32 = 64;
}

/// The main error type for the Allscreenshots client.
#[derive(Debug, Error)]
pub enum AllscreenshotsError {
    /// The server rejected the request as invalid (HTTP 400).
    #[error("validation error: {message}")]
    Validation { message: String, error_code: String },

    /// Authentication or authorization failed (HTTP 401/403).
    #[error("authentication error: {message}")]
    Authentication {
        message: String,
        error_code: String,
        status: u16,
    },

    /// The account's rate limit was exceeded (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimited {
        message: String,
        /// Server-provided wait hint from the `Retry-After` header.
        retry_after: Option<Duration>,
    },

    /// Any other non-2xx response.
    #[error("API error (status {status}): {message}")]
    Api {
        message: String,
        error_code: String,
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A 2xx response body could not be deserialized.
    #[error("failed to decode response: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request failed client-side validation before any network call.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Client or application configuration is invalid.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error (CLI file output, config loading).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error (configuration files).
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AllscreenshotsError {
    /// Returns true if a retry may succeed: network failures, rate limits,
    /// and 5xx server errors. Client errors (4xx other than 429) are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            AllscreenshotsError::Network { .. } => true,
            AllscreenshotsError::RateLimited { .. } => true,
            AllscreenshotsError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AllscreenshotsError::Validation { .. } => Some(400),
            AllscreenshotsError::Authentication { status, .. } => Some(*status),
            AllscreenshotsError::RateLimited { .. } => Some(429),
            AllscreenshotsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// API error code associated with this error, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            AllscreenshotsError::Validation { error_code, .. } => Some(error_code),
            AllscreenshotsError::Authentication { error_code, .. } => Some(error_code),
            AllscreenshotsError::RateLimited { .. } => Some(error_code::RATE_LIMIT_EXCEEDED),
            AllscreenshotsError::Api { error_code, .. } => Some(error_code),
            AllscreenshotsError::Network { .. } => Some(error_code::NETWORK_ERROR),
            _ => None,
        }
    }

    /// Returns the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AllscreenshotsError::Config { .. } | AllscreenshotsError::Yaml(_) => {
                exit_code::CONFIG_ERROR
            }
            AllscreenshotsError::Network { .. } => exit_code::NETWORK_ERROR,
            AllscreenshotsError::Authentication { .. } => exit_code::AUTH_ERROR,
            _ => exit_code::GENERAL_ERROR,
        }
    }

    /// Creates a network error with a message and source.
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AllscreenshotsError::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error with a message and source.
    pub fn decode_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AllscreenshotsError::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        AllscreenshotsError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        AllscreenshotsError::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error with a message and source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AllscreenshotsError::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for Allscreenshots operations.
pub type Result<T> = std::result::Result<T, AllscreenshotsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_retryable() {
        let err = AllscreenshotsError::Validation {
            message: "Invalid URL format".to_string(),
            error_code: "INVALID_URL".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.error_code(), Some("INVALID_URL"));
    }

    #[test]
    fn authentication_errors_are_not_retryable() {
        let err = AllscreenshotsError::Authentication {
            message: "Invalid API key".to_string(),
            error_code: error_code::AUTHENTICATION_ERROR.to_string(),
            status: 401,
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.exit_code(), exit_code::AUTH_ERROR);
    }

    #[test]
    fn rate_limit_and_network_errors_are_retryable() {
        let err = AllscreenshotsError::RateLimited {
            message: "Rate limit exceeded".to_string(),
            retry_after: Some(Duration::from_secs(60)),
        };
        assert!(err.is_retryable());
        assert_eq!(err.status(), Some(429));

        let err = AllscreenshotsError::Network {
            message: "connection refused".to_string(),
            source: None,
        };
        assert!(err.is_retryable());
        assert_eq!(err.status(), None);
        assert_eq!(err.exit_code(), exit_code::NETWORK_ERROR);
    }

    #[test]
    fn api_errors_retry_only_on_5xx() {
        let server = AllscreenshotsError::Api {
            message: "Internal server error".to_string(),
            error_code: error_code::API_ERROR.to_string(),
            status: 500,
            body: String::new(),
        };
        assert!(server.is_retryable());

        let not_found = AllscreenshotsError::Api {
            message: "Not found".to_string(),
            error_code: error_code::API_ERROR.to_string(),
            status: 404,
            body: String::new(),
        };
        assert!(!not_found.is_retryable());
    }

    #[test]
    fn error_display() {
        let err = AllscreenshotsError::Validation {
            message: "URL is required".to_string(),
            error_code: error_code::VALIDATION_ERROR.to_string(),
        };
        assert_eq!(format!("{}", err), "validation error: URL is required");

        let err = AllscreenshotsError::Api {
            message: "boom".to_string(),
            error_code: error_code::API_ERROR.to_string(),
            status: 502,
            body: String::new(),
        };
        assert_eq!(format!("{}", err), "API error (status 502): boom");
    }

    #[test]
    fn config_errors_map_to_config_exit_code() {
        let err = AllscreenshotsError::config("bad yaml");
        assert_eq!(err.exit_code(), exit_code::CONFIG_ERROR);
    }
}
