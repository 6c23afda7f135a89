//! Sample web application - a thin axum app demonstrating client usage.
//!
//! One endpoint forwards a capture call to the Allscreenshots API and
//! returns the image as a base64 data URL; a health endpoint reports
//! uptime and capture counters.

pub mod handlers;
pub mod response;
pub mod state;


use crate::config::Config;
use crate::error::{AllscreenshotsError, Result};
use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the demo application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/screenshot", post(handlers::capture))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the demo web application.
pub async fn serve(config: &Config) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let router = create_router(state);

    let addr = SocketAddr::new(
        config.server.bind.parse().map_err(|e| {
            AllscreenshotsError::config(format!("Invalid bind address: {}", e))
        })?,
        config.server.port,
    );

    info!("Starting demo web application on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AllscreenshotsError::config(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(AllscreenshotsError::Io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_router_from_default_config() {
        let state = Arc::new(AppState::new(&Config::default()).unwrap());
        let _router = create_router(state);
        // Router creation should not panic
    }
}
