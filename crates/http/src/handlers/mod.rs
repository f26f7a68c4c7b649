#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod chat;
pub mod images;
pub mod media;
pub mod visitors;
