//! Adapters - implementations of ports plus the HTTP boundary.

pub mod ai;
pub mod http;
