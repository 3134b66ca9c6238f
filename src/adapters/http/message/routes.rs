//! Axum router configuration for the message endpoint.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::create_message;

/// Create the message API router.
///
/// Suitable for nesting under `/v1`.
///
/// # Routes
///
/// - `POST /message` - relay a chat message
pub fn message_router() -> Router<AppState> {
    Router::new().route("/message", post(create_message))
}
