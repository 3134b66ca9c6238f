//! Inbound conversation types.

use serde::{Deserialize, Serialize};

use super::errors::SchemaValidationError;

/// A single turn in the conversation.
///
/// The role is a free-form tag ("user", "assistant", "system"); content is
/// the message text. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

impl ConversationMessage {
    /// Creates a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Whether this entry claims the system role.
    pub fn is_system(&self) -> bool {
        self.role == "system"
    }
}

/// The inbound chat request: a new message plus prior conversation turns.
///
/// `history` preserves chronological order and may be empty. The service
/// itself retains no conversation state between calls; the caller supplies
/// the full history every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub new_message: String,
    pub history: Vec<ConversationMessage>,
}

impl TranslationRequest {
    /// Creates a new request.
    pub fn new(new_message: impl Into<String>, history: Vec<ConversationMessage>) -> Self {
        Self {
            new_message: new_message.into(),
            history,
        }
    }

    /// Validates the request before it reaches the model.
    ///
    /// Presence of `role`/`content` keys is already enforced at
    /// deserialization; this additionally rejects an empty `new_message`
    /// and history entries with an empty role tag.
    pub fn validate(&self) -> Result<(), SchemaValidationError> {
        if self.new_message.is_empty() {
            return Err(SchemaValidationError::EmptyNewMessage);
        }
        for (index, entry) in self.history.iter().enumerate() {
            if entry.role.is_empty() {
                return Err(SchemaValidationError::EmptyRole { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(ConversationMessage::system("a").role, "system");
        assert_eq!(ConversationMessage::user("b").role, "user");
        assert_eq!(ConversationMessage::assistant("c").role, "assistant");
        assert!(ConversationMessage::system("a").is_system());
        assert!(!ConversationMessage::user("b").is_system());
    }

    #[test]
    fn request_deserializes_from_wire_shape() {
        let json = r#"{"new_message": "你好", "history": [{"role": "user", "content": "hi"}]}"#;
        let request: TranslationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.new_message, "你好");
        assert_eq!(request.history.len(), 1);
        assert_eq!(request.history[0].role, "user");
    }

    #[test]
    fn request_rejects_history_entry_without_content() {
        let json = r#"{"new_message": "你好", "history": [{"role": "user"}]}"#;
        let result: Result<TranslationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_empty_new_message() {
        let request = TranslationRequest::new("", vec![]);
        assert_eq!(
            request.validate(),
            Err(SchemaValidationError::EmptyNewMessage)
        );
    }

    #[test]
    fn validate_rejects_empty_role() {
        let request = TranslationRequest::new(
            "你好",
            vec![ConversationMessage::new("", "orphaned")],
        );
        assert_eq!(
            request.validate(),
            Err(SchemaValidationError::EmptyRole { index: 0 })
        );
    }

    #[test]
    fn validate_accepts_empty_history() {
        let request = TranslationRequest::new("你好", vec![]);
        assert!(request.validate().is_ok());
    }
}
