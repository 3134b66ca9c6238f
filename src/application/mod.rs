//! Application layer - operation handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod translate;

pub use translate::{TranslateError, TranslateHandler};
