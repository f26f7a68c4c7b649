//! Typed error enum for the game crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("mask buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    MaskSize { width: usize, height: usize, expected: usize, actual: usize },

    #[error("invalid viewport: width {width}, pixel ratio {dpr}")]
    InvalidViewport { width: f64, dpr: f64 },
}
