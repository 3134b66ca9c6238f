//! Chat Provider Port - interface to the external completion service.
//!
//! The provider receives the fully assembled message list and returns the
//! model's raw text reply. Interpretation of that text belongs to the
//! translation domain, not to provider adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::ConversationMessage;

/// Port for language-model completion providers.
///
/// Implementations connect to an external completion endpoint and must be
/// safe to share across concurrent requests: configuration is read-only
/// for the process lifetime and no call mutates shared state.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the ordered message list and returns the raw response text.
    ///
    /// One attempt per call; resilience policy (retries, failover) is a
    /// deliberate non-feature of the current design.
    async fn complete(&self, messages: &[ConversationMessage]) -> Result<String, ProviderError>;
}

/// Transport or provider-side failure.
///
/// Treated as opaque by the orchestrator and propagated unchanged; the
/// variants exist for logging and status mapping, not for recovery logic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request to provider timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("provider response could not be decoded: {0}")]
    Decode(String),

    #[error("provider returned no choices")]
    EmptyResponse,
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
