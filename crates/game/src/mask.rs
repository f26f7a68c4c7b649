//! Alpha masks and pixel-accurate overlap tests.
//!
//! Sprites are drawn scaled, so both masks are sampled through their own
//! scale factor over the integer pixel rectangle where the two draw boxes
//! intersect. A pixel is solid when its alpha exceeds [`ALPHA_THRESHOLD`].

use crate::GameError;

pub const ALPHA_THRESHOLD: u8 = 10;

/// Per-pixel alpha channel of a sprite image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Extracts the alpha channel from tightly packed RGBA8 pixels.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Self, GameError> {
        let expected = width.saturating_mul(height).saturating_mul(4);
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(GameError::MaskSize { width, height, expected, actual: rgba.len() });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self { width, height, alpha })
    }

    /// Builds a mask by evaluating `alpha_at(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, alpha_at: impl Fn(usize, usize) -> u8) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let alpha = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| alpha_at(x, y))
            .collect();
        Self { width, height, alpha }
    }

    /// Fully opaque rectangle.
    #[must_use]
    pub fn opaque(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| u8::MAX)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Source pixel at `(x, y)` when it is solid; out-of-range samples are transparent.
    fn solid_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let alpha = self.alpha.get(y * self.width + x).copied().unwrap_or(0);
        (alpha > ALPHA_THRESHOLD).then_some((x, y))
    }
}

/// Axis-aligned draw box given by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self { cx, cy, w, h }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.cx - self.w / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.cy - self.h / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left() + self.w
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top() + self.h
    }

    #[must_use]
    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self { cx: self.cx + dx, cy: self.cy + dy, ..self }
    }

    /// Box overlap where shared edges count as touching.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

/// First solid-on-solid pixel found by [`find_contact`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Canvas position of the pixel center.
    pub canvas_x: f64,
    pub canvas_y: f64,
    /// Matching pixel in the first mask.
    pub a_src_x: usize,
    pub a_src_y: usize,
    /// Matching pixel in the second mask.
    pub b_src_x: usize,
    pub b_src_y: usize,
}

/// Scans the intersection top to bottom, left to right, for the first pixel
/// that is solid in both masks.
#[must_use]
pub fn find_contact(a: &AlphaMask, a_box: Bounds, b: &AlphaMask, b_box: Bounds) -> Option<Contact> {
    let left = a_box.left().max(b_box.left()) as i64;
    let top = a_box.top().max(b_box.top()) as i64;
    let right = a_box.right().min(b_box.right()) as i64;
    let bottom = a_box.bottom().min(b_box.bottom()) as i64;
    if right <= left || bottom <= top {
        return None;
    }

    let (a_sx, a_sy) = (a.width as f64 / a_box.w, a.height as f64 / a_box.h);
    let (b_sx, b_sy) = (b.width as f64 / b_box.w, b.height as f64 / b_box.h);

    for py in top..bottom {
        let y = py as f64;
        for px in left..right {
            let x = px as f64;
            let Some((a_src_x, a_src_y)) =
                a.solid_at(((x - a_box.left()) * a_sx).floor(), ((y - a_box.top()) * a_sy).floor())
            else {
                continue;
            };
            let Some((b_src_x, b_src_y)) =
                b.solid_at(((x - b_box.left()) * b_sx).floor(), ((y - b_box.top()) * b_sy).floor())
            else {
                continue;
            };
            return Some(Contact {
                canvas_x: x + 0.5,
                canvas_y: y + 0.5,
                a_src_x,
                a_src_y,
                b_src_x,
                b_src_y,
            });
        }
    }
    None
}

/// Whether any pixel is solid in both masks at their draw positions.
#[must_use]
pub fn pixel_overlap(a: &AlphaMask, a_box: Bounds, b: &AlphaMask, b_box: Bounds) -> bool {
    find_contact(a, a_box, b, b_box).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Solid only in the bottom half.
    fn bottom_half(size: usize) -> AlphaMask {
        AlphaMask::from_fn(size, size, |_, y| if y >= size / 2 { 255 } else { 0 })
    }

    #[test]
    fn test_from_rgba_takes_alpha_channel() {
        let rgba = [10, 20, 30, 0, 10, 20, 30, 200];
        let mask = AlphaMask::from_rgba(2, 1, &rgba).unwrap();
        assert_eq!(mask.solid_at(0.0, 0.0), None);
        assert_eq!(mask.solid_at(1.0, 0.0), Some((1, 0)));
    }

    #[test]
    fn test_from_rgba_rejects_wrong_length() {
        let err = AlphaMask::from_rgba(2, 2, &[0; 12]).unwrap_err();
        assert!(matches!(err, GameError::MaskSize { expected: 16, actual: 12, .. }));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mask = AlphaMask::from_fn(2, 1, |x, _| if x == 0 { ALPHA_THRESHOLD } else { 11 });
        assert_eq!(mask.solid_at(0.0, 0.0), None);
        assert!(mask.solid_at(1.0, 0.0).is_some());
    }

    #[test]
    fn test_disjoint_boxes_never_overlap() {
        let mask = AlphaMask::opaque(4, 4);
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(!pixel_overlap(&mask, a, &mask, a.shifted(20.0, 0.0)));
    }

    #[test]
    fn test_transparent_region_does_not_collide() {
        let solid = AlphaMask::opaque(8, 8);
        let half = bottom_half(8);
        // Solid square overlapping only the empty top half of `half`.
        let a = Bounds::new(50.0, 44.0, 16.0, 16.0);
        let b = Bounds::new(50.0, 58.0, 16.0, 16.0);
        assert!(a.touches(&b));
        assert!(!pixel_overlap(&solid, a, &half, b));
        // Pushed down into the solid half it collides.
        assert!(pixel_overlap(&solid, a.shifted(0.0, 10.0), &half, b));
    }

    #[test]
    fn test_contact_reports_scaled_source_pixels() {
        let a = AlphaMask::opaque(4, 4);
        let b = AlphaMask::opaque(2, 2);
        // `a` drawn 8px wide (scale 0.5), `b` drawn 8px wide (scale 0.25).
        let contact =
            find_contact(&a, Bounds::new(4.0, 4.0, 8.0, 8.0), &b, Bounds::new(8.0, 8.0, 8.0, 8.0))
                .unwrap();
        assert_eq!((contact.canvas_x, contact.canvas_y), (4.5, 4.5));
        assert_eq!((contact.a_src_x, contact.a_src_y), (2, 2));
        assert_eq!((contact.b_src_x, contact.b_src_y), (0, 0));
    }

    #[test]
    fn test_touches_counts_shared_edges() {
        let a = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.touches(&Bounds::new(15.0, 5.0, 10.0, 10.0)));
        assert!(!a.touches(&Bounds::new(15.5, 5.0, 10.0, 10.0)));
    }
}
