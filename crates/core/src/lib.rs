//! Core types and configuration for the Caramel gallery
//!
//! This crate contains domain and wire types shared across all other crates.

mod chat;
mod config;
pub mod constants;
mod env_config;
mod error;
mod metadata;
pub mod persona;
mod visitor;

pub use chat::*;
pub use config::*;
pub use env_config::*;
pub use error::*;
pub use metadata::*;
pub use visitor::*;
