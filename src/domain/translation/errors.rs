//! Error types for the translation contract layer.

use thiserror::Error;

/// A malformed request or malformed-but-parseable model output.
///
/// Recoverable only by the caller retrying with corrected input (request
/// side) or by the operator noticing the model produced the wrong shape
/// (output side). Never retried internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaValidationError {
    #[error("model output was valid JSON but not a JSON object")]
    NotAnObject,

    #[error("missing section `{0}`")]
    MissingSection(&'static str),

    #[error("section `{0}` must be a JSON object")]
    SectionNotObject(&'static str),

    #[error("section `{section}` is missing required field `{field}`")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("field `{field}` in section `{section}` must be a string")]
    WrongType {
        section: &'static str,
        field: &'static str,
    },

    #[error("`input.raw` does not match the submitted message")]
    RawMismatch,

    #[error("`new_message` must not be empty")]
    EmptyNewMessage,

    #[error("history entry {index} has an empty role")]
    EmptyRole { index: usize },
}

/// Model output was not valid JSON at all.
///
/// Kept distinct from [`SchemaValidationError`] so operators can tell
/// "model ignored instructions entirely" from "model produced the wrong
/// shape".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("model output was not valid JSON: {reason}")]
pub struct MalformedOutputError {
    pub reason: String,
}

impl MalformedOutputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure while turning raw provider text into a [`TranslationResponse`].
///
/// [`TranslationResponse`]: super::TranslationResponse
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutputParseError {
    #[error(transparent)]
    Malformed(#[from] MalformedOutputError),

    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
}
