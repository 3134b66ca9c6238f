//! Ming Le - Mandarin-learning conversational assistant backend
//!
//! This crate relays chat-style messages to a language-model provider and
//! enforces a strict response schema, so callers receive a validated,
//! strongly-shaped translation object instead of free-form model output.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
