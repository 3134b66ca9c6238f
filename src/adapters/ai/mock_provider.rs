//! Mock chat provider for testing.
//!
//! Configurable to return canned raw responses or inject errors, with call
//! capture so tests can assert on the assembled prompt.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChatProvider::new().with_response("{\"output\": ...}");
//! let raw = provider.complete(&messages).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::translation::ConversationMessage;
use crate::ports::{ChatProvider, ProviderError};

/// A configured mock reply, consumed in order.
#[derive(Debug, Clone)]
enum MockReply {
    /// Return this raw text.
    Raw(String),
    /// Return this error.
    Error(ProviderError),
}

/// Mock chat provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockChatProvider {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<Vec<ConversationMessage>>>>,
}

impl MockChatProvider {
    /// Creates a new mock with no configured replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw text reply.
    pub fn with_response(self, raw: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Raw(raw.into()));
        self
    }

    /// Queues an error reply.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Returns the message lists this mock has been called with.
    pub fn calls(&self) -> Vec<Vec<ConversationMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ConversationMessage]) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Raw(raw)) => Ok(raw),
            Some(MockReply::Error(error)) => Err(error),
            None => Err(ProviderError::network("mock has no replies configured")),
        }
    }
}
