use crate::mask::AlphaMask;

/// Number of treat sprite variants.
pub const TREAT_FRAME_COUNT: usize = 6;

/// Frames drawn stretched horizontally.
const WIDE_FRAMES: [usize; 2] = [4, 5];

/// Sprite masks available to the engine.
///
/// Missing masks are normal (images still loading or absent); collisions
/// then fall back to box tests.
#[derive(Debug, Clone)]
pub struct GameAssets {
    treat_masks: Vec<Option<AlphaMask>>,
    bowl: Option<AlphaMask>,
    chocolate: Option<AlphaMask>,
}

impl Default for GameAssets {
    /// Every treat frame available, no masks.
    fn default() -> Self {
        Self { treat_masks: vec![None; TREAT_FRAME_COUNT], bowl: None, chocolate: None }
    }
}

impl GameAssets {
    #[must_use]
    pub const fn new(
        treat_masks: Vec<Option<AlphaMask>>,
        bowl: Option<AlphaMask>,
        chocolate: Option<AlphaMask>,
    ) -> Self {
        Self { treat_masks, bowl, chocolate }
    }

    #[must_use]
    pub fn treat_frames(&self) -> usize {
        self.treat_masks.len()
    }

    #[must_use]
    pub fn treat_mask(&self, frame: Option<usize>) -> Option<&AlphaMask> {
        frame.and_then(|i| self.treat_masks.get(i)).and_then(Option::as_ref)
    }

    #[must_use]
    pub const fn bowl_mask(&self) -> Option<&AlphaMask> {
        self.bowl.as_ref()
    }

    #[must_use]
    pub const fn chocolate_mask(&self) -> Option<&AlphaMask> {
        self.chocolate.as_ref()
    }

    /// A loaded bowl image is drawn larger than the bare bowl rectangle.
    #[must_use]
    pub const fn bowl_ready(&self) -> bool {
        self.bowl.is_some()
    }

    #[must_use]
    pub fn is_wide(frame: Option<usize>) -> bool {
        frame.is_some_and(|i| WIDE_FRAMES.contains(&i))
    }
}
