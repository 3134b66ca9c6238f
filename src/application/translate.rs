//! Translate - the single public chat operation.
//!
//! Request in, validated structured response out: validate the request,
//! build the prompt, call the provider, parse and validate the output.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::translation::{
    build_prompt, parse_response, MalformedOutputError, OutputParseError, SchemaValidationError,
    TranslationRequest, TranslationResponse,
};
use crate::ports::{ChatProvider, ProviderError};

/// Errors surfaced by [`TranslateHandler::handle`].
///
/// All three kinds propagate to the HTTP boundary uncaught; none is
/// swallowed or converted into a default response. Request-side and
/// output-side schema failures are tagged separately so the boundary can
/// map them to different status codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The caller's request failed schema validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] SchemaValidationError),

    /// The model produced parseable JSON of the wrong shape.
    #[error("invalid model output: {0}")]
    InvalidModelOutput(#[source] SchemaValidationError),

    /// The model output was not valid JSON at all.
    #[error(transparent)]
    MalformedOutput(#[from] MalformedOutputError),

    /// Transport or provider-side failure, passed through opaquely.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl TranslateError {
    /// Machine-readable error kind for the HTTP error body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::InvalidModelOutput(_) => "schema_validation",
            Self::MalformedOutput(_) => "malformed_output",
            Self::Provider(_) => "provider",
        }
    }
}

/// Handler for the translate operation.
///
/// Stateless aside from the shared read-only provider; each call is
/// independent and safe to run concurrently with others.
pub struct TranslateHandler {
    provider: Arc<dyn ChatProvider>,
}

impl TranslateHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Relays one chat message and returns the validated response.
    pub async fn handle(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        request.validate().map_err(TranslateError::InvalidRequest)?;

        let messages = build_prompt(&request);
        tracing::debug!(
            history_len = request.history.len(),
            prompt_len = messages.len(),
            "dispatching chat completion"
        );

        let raw = self.provider.complete(&messages).await?;

        let response = parse_response(&raw, &request.new_message).map_err(|e| match e {
            OutputParseError::Malformed(err) => TranslateError::MalformedOutput(err),
            OutputParseError::Schema(err) => TranslateError::InvalidModelOutput(err),
        })?;

        tracing::debug!(
            corrected = response.corrections.is_some(),
            "completed translation exchange"
        );
        Ok(response)
    }
}
