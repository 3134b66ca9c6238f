//! Service status endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use super::AppState;

/// Status endpoint response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Process start time, ISO-8601.
    pub startup_time: String,
    /// Whole seconds since startup.
    pub uptime_seconds: i64,
}

/// Report process start time and uptime.
///
/// GET /
pub async fn service_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let now = Utc::now();
    Json(StatusResponse {
        startup_time: state.started_at.to_rfc3339(),
        uptime_seconds: (now - state.started_at).num_seconds(),
    })
}
