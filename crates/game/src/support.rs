//! Resting-position search used when a treat settles onto a pile.

use crate::mask::{AlphaMask, Bounds, pixel_overlap};

/// Something a settling treat may rest on.
#[derive(Debug, Clone, Copy)]
pub struct Support<'a> {
    pub mask: Option<&'a AlphaMask>,
    pub bounds: Bounds,
}

/// Adjustment applied to a proposed center so the treat rests on a support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Vertical search step in canvas pixels.
const STEP_DOWN: usize = 2;

/// Finds the smallest shift that puts `bounds` in contact with a support.
///
/// Rows are tried from `0` to `max_down` in steps of two; within a row the
/// horizontal shifts go `0, 1, -1, 2, -2, …` up to `max_side`. Contact is a
/// pixel overlap when both masks exist, otherwise the boxes must touch with
/// the shifted bottom at or below the support's top.
#[must_use]
pub fn find_supporting_offset(
    mask: Option<&AlphaMask>,
    bounds: Bounds,
    supports: &[Support<'_>],
    max_down: u32,
    max_side: u32,
) -> Option<Offset> {
    let side = i32::try_from(max_side).unwrap_or(i32::MAX);
    let side_order: Vec<i32> = std::iter::once(0).chain((1..=side).flat_map(|s| [s, -s])).collect();

    for dy in (0..=max_down).step_by(STEP_DOWN) {
        let dy = f64::from(dy);
        for &dx in &side_order {
            let dx = f64::from(dx);
            let candidate = bounds.shifted(dx, dy);
            let supported = supports.iter().any(|support| match (mask, support.mask) {
                (Some(own), Some(other)) => pixel_overlap(own, candidate, other, support.bounds),
                _ => rests_on(&candidate, &support.bounds),
            });
            if supported {
                return Some(Offset { dx, dy });
            }
        }
    }
    None
}

fn rests_on(candidate: &Bounds, support: &Bounds) -> bool {
    candidate.bottom() >= support.top()
        && candidate.top() < support.bottom()
        && !(candidate.right() < support.left() || candidate.left() > support.right())
}
