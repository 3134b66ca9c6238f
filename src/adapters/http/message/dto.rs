//! Data transfer objects for the message endpoint.
//!
//! The response body is the domain [`TranslationResponse`] itself, which
//! already serializes to the wire format; only the inbound request and the
//! error body need dedicated DTOs.
//!
//! [`TranslationResponse`]: crate::domain::translation::TranslationResponse

use serde::{Deserialize, Serialize};

use crate::domain::translation::{ConversationMessage, TranslationRequest};

/// A conversation turn as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub role: String,
    pub content: String,
}

/// Request to relay a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// The new user message.
    pub new_message: String,
    /// Prior conversation turns, in chronological order. May be empty.
    pub history: Vec<MessageDto>,
}

impl From<CreateMessageRequest> for TranslationRequest {
    fn from(request: CreateMessageRequest) -> Self {
        TranslationRequest::new(
            request.new_message,
            request
                .history
                .into_iter()
                .map(|m| ConversationMessage::new(m.role, m.content))
                .collect(),
        )
    }
}

/// Machine-readable error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind tag ("schema_validation", "malformed_output", "provider").
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}
