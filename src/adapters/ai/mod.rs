//! AI Provider Adapters.
//!
//! Implementations of the ChatProvider port.
//!
//! ## Available Adapters
//!
//! - `OpenAiProvider` - OpenAI chat completions API
//! - `MockChatProvider` - Configurable mock for testing

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockChatProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
