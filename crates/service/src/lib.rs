//! Service layer for the Caramel gallery
//!
//! Centralizes the endpoint logic between HTTP handlers and storage/llm.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod chat_service;
mod error;
mod gallery_service;
mod visitor_service;

pub use chat_service::{ChatFailure, ChatOutcome, ChatService};
pub use error::ServiceError;
pub use gallery_service::{GalleryService, content_type_for};
pub use visitor_service::VisitorService;
