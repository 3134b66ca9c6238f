//! Message HTTP adapter - the chat relay endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CreateMessageRequest, ErrorBody, MessageDto};
pub use routes::message_router;
