//! Chat completion client for OpenAI-compatible inference endpoints.

mod ai_types;
mod client;
pub mod error;


pub use ai_types::{ChatRequest, Message};
pub use client::{DEFAULT_TIMEOUT, LlmClient, truncate};
pub use error::LlmError;
