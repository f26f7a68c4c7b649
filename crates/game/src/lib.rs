//! Treat catcher engine.
//!
//! Treats fall from the top of the canvas and are caught in a bowl the player
//! slides left and right. Caught treats pile up inside the bowl, missed ones
//! settle on the floor, and catching a chocolate ends the game. The engine is
//! renderer-agnostic: callers feed elapsed time and input, then draw whatever
//! [`World::sprites`] returns.

#![allow(clippy::cast_possible_truncation, reason = "Pixel coordinates fit in i64")]
#![allow(clippy::cast_precision_loss, reason = "Mask dimensions are small")]
#![allow(clippy::cast_sign_loss, reason = "Indices are checked before use")]

mod assets;
pub mod autopilot;
mod config;
mod entity;
mod error;
mod mask;
mod support;
mod world;


pub use assets::{GameAssets, TREAT_FRAME_COUNT};
pub use config::GameConfig;
pub use entity::{Bowl, BowlItem, Chocolate, Direction, FloorItem, Treat};
pub use error::GameError;
pub use mask::{ALPHA_THRESHOLD, AlphaMask, Bounds, Contact, find_contact, pixel_overlap};
pub use support::{Offset, Support, find_supporting_offset};
pub use world::{EndReason, GamePhase, Sprite, SpriteKind, Sprites, World};
