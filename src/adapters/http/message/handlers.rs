//! HTTP handlers for the message endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::TranslateError;

use super::dto::{CreateMessageRequest, ErrorBody};
use super::super::AppState;

/// Relay a chat message to the model and return the validated response.
///
/// POST /v1/message
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> Response {
    match state.translate.handle(request.into()).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            tracing::warn!(error = %err, kind = err.kind(), %status, "message request failed");
            (
                status,
                Json(ErrorBody {
                    error: err.kind().to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Maps the error taxonomy onto status codes.
///
/// A bad request is the caller's fault; everything downstream of the
/// provider call is an upstream failure from this service's perspective.
fn status_for(err: &TranslateError) -> StatusCode {
    match err {
        TranslateError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TranslateError::InvalidModelOutput(_)
        | TranslateError::MalformedOutput(_)
        | TranslateError::Provider(_) => StatusCode::BAD_GATEWAY,
    }
}
