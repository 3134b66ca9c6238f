//! Translation domain - the request/response contract layer.
//!
//! This module owns the shapes the rest of the application can trust:
//! the inbound conversation request, the fixed prompt assembly, and the
//! strict parse-then-validate pipeline that turns free-form model output
//! into a [`TranslationResponse`].

mod errors;
mod message;
mod parser;
mod prompt;
mod response;

pub use errors::{MalformedOutputError, OutputParseError, SchemaValidationError};
pub use message::{ConversationMessage, TranslationRequest};
pub use parser::parse_response;
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use response::{
    TranslationCorrections, TranslationInput, TranslationOutput, TranslationResponse,
};
