//! allscreenshots - client library for the Allscreenshots screenshot API
//!
//! This crate provides a typed client for the Allscreenshots REST API:
//! single and bulk screenshot capture, composed (multi-capture) images,
//! recurring schedules, and usage/quota queries. Transient failures
//! (network errors, rate limits, 5xx responses) are retried with
//! exponential backoff.
//!
//! # Modules
//!
//! - [`client`] - API client and per-resource facades
//! - [`model`] - request/response types mirroring the JSON API
//! - [`config`] - configuration loading for the demo application
//! - [`server`] - sample web application forwarding capture calls
//! - [`cli`] - command-line interface definitions
//! - [`error`] - error types and error handling

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod server;

// Re-exports for convenience
pub use client::AllscreenshotsClient;
pub use config::Config;
pub use error::{AllscreenshotsError, Result};
