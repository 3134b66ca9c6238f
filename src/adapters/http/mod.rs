//! HTTP adapters - REST API implementations.
//!
//! Exposes the message endpoint under `/v1` and a service status endpoint
//! at the root. Error taxonomy mapping to status codes lives in the
//! message handlers; this module assembles the router and its layers.

pub mod message;
pub mod status;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::TranslateHandler;
use crate::config::ServerConfig;

pub use message::message_router;

/// Shared state for all HTTP handlers.
///
/// Everything here is read-only for the process lifetime, so cloning per
/// request is cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// The translate operation handler.
    pub translate: Arc<TranslateHandler>,
    /// Process start time, reported by the status endpoint.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates state with the start time captured now.
    pub fn new(translate: Arc<TranslateHandler>) -> Self {
        Self {
            translate,
            started_at: Utc::now(),
        }
    }
}

/// Builds the complete application router.
///
/// # Routes
///
/// - `GET /` - service status (startup time and uptime)
/// - `POST /v1/message` - relay a chat message
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(status::service_status))
        .nest("/v1", message_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
