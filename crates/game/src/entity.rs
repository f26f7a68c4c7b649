//! Objects on the canvas. Positions are sprite centers in canvas pixels.

use serde::Serialize;

/// The player's bowl. `w`/`h` are the bare rectangle; a loaded bowl image
/// is drawn scaled up from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bowl {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Treat {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Half the unstretched size; large treats score more.
    pub r: f64,
    /// Canvas pixels per 16 ms.
    pub speed: f64,
    pub frame: Option<usize>,
}

impl Treat {
    #[must_use]
    pub const fn points(&self) -> u32 {
        if self.r > 12.0 { 5 } else { 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chocolate {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub speed: f64,
}

/// Treat resting in the bowl, positioned relative to the bowl so the pile
/// moves with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BowlItem {
    /// Resting horizontal offset from the bowl center.
    pub target_dx: f64,
    pub current_dx: f64,
    /// Resting center height below the bowl top.
    pub local_y: f64,
    pub current_local_y: f64,
    pub w: f64,
    pub h: f64,
    pub frame: Option<usize>,
    pub animating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloorItem {
    pub x: f64,
    /// Resting center height.
    pub y: f64,
    pub current_y: f64,
    pub w: f64,
    pub h: f64,
    pub frame: Option<usize>,
    pub animating: bool,
    /// Horizontal drift from spreading and jitter.
    pub vx: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}
