//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `translation` - Conversation schema types, prompt assembly, and strict
//!   parsing/validation of model output
pub mod translation;
