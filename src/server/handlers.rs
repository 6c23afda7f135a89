//! HTTP request handlers for the sample web application.
//!
//! The capture endpoint forwards a single client call and returns the image
//! as a base64 data URL, the way a browser front end expects it.

use crate::error::AllscreenshotsError;
use crate::model::ScreenshotRequest;
use crate::server::response::{CaptureForm, CaptureResponse, HealthData};
use crate::server::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use base64::Engine;
use std::sync::Arc;
use tracing::{error, info};

/// Version string for the application.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check handler.
///
/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.stats.snapshot();

    let data = HealthData {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        captures_total: snapshot.captures_total,
        captures_success: snapshot.captures_success,
        captures_failed: snapshot.captures_failed,
    };

    (StatusCode::OK, Json(data))
}

/// Capture handler - forwards one capture call to the API.
///
/// POST /api/screenshot
pub async fn capture(
    State(state): State<Arc<AppState>>,
    Json(form): Json<CaptureForm>,
) -> impl IntoResponse {
    state.increment_requests();

    let mut builder = ScreenshotRequest::builder().url(form.url.unwrap_or_default());
    if let Some(device) = form.device {
        builder = builder.device(device);
    }
    if let Some(full_page) = form.full_page {
        builder = builder.full_page(full_page);
    }

    let request = match builder.build() {
        Ok(request) => request,
        Err(e) => {
            state.increment_failed();
            return (
                StatusCode::BAD_REQUEST,
                Json(CaptureResponse::err(e.to_string())),
            );
        }
    };

    info!(url = %request.url, "Forwarding capture request");

    match state.client.screenshots().capture(&request).await {
        Ok(image) => {
            state.increment_success();
            let encoded = base64::engine::general_purpose::STANDARD.encode(&image);
            let data_url = format!("data:image/png;base64,{}", encoded);
            (StatusCode::OK, Json(CaptureResponse::ok(data_url)))
        }
        Err(e) => {
            state.increment_failed();
            error!(error = %e, "Capture failed");
            (status_for_error(&e), Json(CaptureResponse::err(e.to_string())))
        }
    }
}

/// Maps a client error onto the status the demo endpoint responds with.
fn status_for_error(err: &AllscreenshotsError) -> StatusCode {
    match err {
        AllscreenshotsError::Validation { .. } | AllscreenshotsError::InvalidRequest { .. } => {
            StatusCode::BAD_REQUEST
        }
        AllscreenshotsError::Authentication { .. } => StatusCode::UNAUTHORIZED,
        AllscreenshotsError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        AllscreenshotsError::Network { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
