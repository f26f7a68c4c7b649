//! Game state and the per-frame update.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::entity::{Bowl, BowlItem, Chocolate, Direction, FloorItem, Treat};
use crate::mask::{Bounds, find_contact, pixel_overlap};
use crate::support::{Support, find_supporting_offset};
use crate::GameError;

const MAX_DISPLAY_WIDTH: f64 = 900.0;
const ASPECT: f64 = 0.65;
const BOWL_WIDTH: f64 = 140.0;
const BOWL_HEIGHT: f64 = 60.0;
const BOWL_LIFT: f64 = 60.0;
const BOWL_IMAGE_WIDTH_SCALE: f64 = 1.2;
const BOWL_IMAGE_HEIGHT_SCALE: f64 = 1.9;
const SMALL_TREAT: f64 = 22.0;
const LARGE_TREAT: f64 = 32.0;
const TREAT_SCALE: f64 = 1.6;
const WIDE_STRETCH: f64 = 1.6;
const CHOCOLATE_SCALE: f64 = 1.2;
const CHOCOLATE_SPEEDUP: f64 = 1.2;
/// Frame time the fall speeds are expressed in.
const FRAME_MS: f64 = 16.0;
const BOWL_PADDING: f64 = 6.0;
const FLOOR_MARGIN: f64 = 6.0;
const CEILING_MARGIN: f64 = 2.0;
const SEARCH_DOWN: u32 = 18;
const SEARCH_SIDE: u32 = 8;
const ENTRY_RISE: f64 = 12.0;
const MOTION_EPSILON: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// A chocolate landed in the bowl.
    Chocolate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Ready,
    Running,
    Ended(EndReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    FloorTreat,
    Chocolate,
    Bowl,
    BowlTreat,
    FallingTreat,
}

/// One thing to draw, centered at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub frame: Option<usize>,
}

/// Sprites in back-to-front order.
pub type Sprites = Vec<Sprite>;

/// Bowl rectangle as drawn this frame.
#[derive(Debug, Clone, Copy)]
struct BowlGeometry {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl BowlGeometry {
    fn top(&self) -> f64 {
        self.y - self.h / 2.0
    }

    fn left(&self) -> f64 {
        self.x - self.w / 2.0
    }

    fn right(&self) -> f64 {
        self.left() + self.w
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.w, self.h)
    }

    fn overlaps_column(&self, x: f64, w: f64) -> bool {
        !(x + w / 2.0 < self.left() || x - w / 2.0 > self.right())
    }
}

/// `max(lo, min(hi, value))`: prefers `lo` when the range is empty.
fn clamp_low(value: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(value))
}

/// Eases toward zero difference with a floor on the step size.
fn ease_step(diff: f64, rate: f64, min_step: f64) -> f64 {
    if diff == 0.0 {
        return 0.0;
    }
    diff.signum() * min_step.max(diff.abs() * rate)
}

pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) assets: GameAssets,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) bowl: Bowl,
    pub(crate) treats: Vec<Treat>,
    pub(crate) chocolates: Vec<Chocolate>,
    pub(crate) bowl_pile: Vec<BowlItem>,
    pub(crate) floor_pile: Vec<FloorItem>,
    pub(crate) spawn_timer: f64,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) treats_spawned: u64,
    pub(crate) phase: GamePhase,
    pub(crate) last_bowl_x: f64,
    pub(crate) rng: StdRng,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("treats", &self.treats.len())
            .field("bowl_pile", &self.bowl_pile.len())
            .field("floor_pile", &self.floor_pile.len())
            .finish_non_exhaustive()
    }
}

impl World {
    /// New world sized from the config. `seed` makes spawns reproducible.
    pub fn new(config: GameConfig, assets: GameAssets, seed: Option<u64>) -> Result<Self, GameError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (display_width, dpr) = (config.display_width, config.dpr);
        let mut world = Self {
            bowl: Bowl { x: 0.0, y: 0.0, w: BOWL_WIDTH, h: BOWL_HEIGHT, speed: config.bowl_speed },
            config,
            assets,
            width: 0.0,
            height: 0.0,
            treats: Vec::new(),
            chocolates: Vec::new(),
            bowl_pile: Vec::new(),
            floor_pile: Vec::new(),
            spawn_timer: 0.0,
            score: 0,
            high_score: 0,
            treats_spawned: 0,
            phase: GamePhase::Ready,
            last_bowl_x: 0.0,
            rng,
        };
        world.resize(display_width, dpr)?;
        world.bowl.x = world.width / 2.0;
        world.last_bowl_x = world.bowl.x;
        Ok(world)
    }

    /// Carries a previously saved best score.
    #[must_use]
    pub const fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Fits the canvas to a display width: capped at 900 CSS pixels,
    /// 0.65 aspect, scaled by the device pixel ratio. The bowl keeps its
    /// horizontal position and sits 60 CSS pixels above the bottom.
    pub fn resize(&mut self, display_width: f64, dpr: f64) -> Result<(), GameError> {
        if !(display_width.is_finite() && display_width > 0.0 && dpr.is_finite() && dpr > 0.0) {
            return Err(GameError::InvalidViewport { width: display_width, dpr });
        }
        let display_width = display_width.min(MAX_DISPLAY_WIDTH);
        self.width = (display_width * dpr).round();
        self.height = (display_width * ASPECT * dpr).round();
        self.bowl.y = self.height - BOWL_LIFT * dpr;
        self.bowl.w = (BOWL_WIDTH * dpr).round();
        self.bowl.h = (BOWL_HEIGHT * dpr).round();
        tracing::debug!(width = self.width, height = self.height, "canvas resized");
        Ok(())
    }

    /// Clears every pile and starts a fresh round.
    pub fn start(&mut self) {
        self.treats.clear();
        self.chocolates.clear();
        self.bowl_pile.clear();
        self.floor_pile.clear();
        self.score = 0;
        self.treats_spawned = 0;
        self.spawn_timer = self.config.first_spawn_ms;
        self.last_bowl_x = self.bowl.x;
        self.phase = GamePhase::Running;
        tracing::info!(high_score = self.high_score, "treat catcher started");
    }

    pub fn nudge_bowl(&mut self, direction: Direction) {
        let step = match direction {
            Direction::Left => -self.bowl.speed,
            Direction::Right => self.bowl.speed,
        };
        self.set_bowl_x(self.bowl.x + step);
    }

    /// Moves the bowl center, kept on the canvas.
    pub fn set_bowl_x(&mut self, x: f64) {
        self.bowl.x = x.clamp(0.0, self.width);
    }

    /// Advances the simulation by `dt_ms` milliseconds. Does nothing unless running.
    pub fn update(&mut self, dt_ms: f64) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.spawn_timer -= dt_ms;
        if self.spawn_timer <= 0.0 {
            self.spawn();
            self.spawn_timer =
                self.config.spawn_min_ms + self.rng.random::<f64>() * self.config.spawn_jitter_ms;
        }

        let bowl = self.bowl_geometry();
        let bowl_dx = self.bowl.x - self.last_bowl_x;
        self.last_bowl_x = self.bowl.x;

        self.update_treats(bowl, dt_ms);
        self.update_chocolates(bowl, dt_ms);
        self.ease_bowl_pile();
        self.settle_floor_pile(bowl, bowl_dx);
    }

    fn bowl_geometry(&self) -> BowlGeometry {
        let (w, h) = if self.assets.bowl_ready() {
            ((self.bowl.w * BOWL_IMAGE_WIDTH_SCALE).round(), (self.bowl.h * BOWL_IMAGE_HEIGHT_SCALE).round())
        } else {
            (self.bowl.w, self.bowl.h)
        };
        BowlGeometry { x: self.bowl.x, y: self.bowl.y, w, h }
    }

    pub(crate) fn spawn(&mut self) {
        if self.treats.len() >= self.config.max_treats {
            return;
        }
        let base = if self.rng.random::<f64>() < self.config.large_treat_chance {
            LARGE_TREAT
        } else {
            SMALL_TREAT
        };
        let size = (base * TREAT_SCALE).round();
        let frames = self.assets.treat_frames();
        let frame = (frames > 0).then(|| self.rng.random_range(0..frames));
        let stretch = if GameAssets::is_wide(frame) { WIDE_STRETCH } else { 1.0 };
        let (w, h) = ((size * stretch).round(), size);
        let x = self.rng.random::<f64>() * (self.width - w) + w / 2.0;
        let speed = 1.2 + self.rng.random::<f64>() * 1.6;
        self.treats.push(Treat { x, y: -h, w, h, r: size / 2.0, speed, frame });
        self.treats_spawned += 1;

        if self.rng.random::<f64>() < self.config.chocolate_chance {
            let side = (size * CHOCOLATE_SCALE).round();
            self.chocolates.push(Chocolate {
                x,
                y: -side,
                w: side,
                h: side,
                speed: speed * CHOCOLATE_SPEEDUP,
            });
            tracing::debug!(x, "chocolate dropped");
        }
    }

    fn update_treats(&mut self, bowl: BowlGeometry, dt_ms: f64) {
        for i in (0..self.treats.len()).rev() {
            let t = self.treats[i];
            let next_y = t.y + t.speed * (dt_ms / FRAME_MS);

            // Past the bowl's middle it can no longer be caught.
            if next_y - t.h / 2.0 > bowl.y {
                self.treats.remove(i);
                self.place_on_floor(&t);
                continue;
            }

            if self.hits_bowl(&t, bowl) {
                self.treats.remove(i);
                self.catch_in_bowl(&t, bowl);
                self.award(&t);
                continue;
            }

            if let Some((x, y)) = self.pile_landing(&t, next_y, bowl) {
                self.treats.remove(i);
                self.settle_in_bowl(&t, x, y, bowl);
                self.award(&t);
                continue;
            }

            if next_y - t.h / 2.0 > self.height {
                self.treats.remove(i);
                self.place_on_floor(&t);
            } else {
                self.treats[i].y = next_y;
            }
        }
    }

    fn hits_bowl(&self, t: &Treat, bowl: BowlGeometry) -> bool {
        let treat_box = Bounds::new(t.x, t.y, t.w, t.h);
        if !treat_box.touches(&bowl.bounds()) {
            return false;
        }
        match (self.assets.bowl_mask(), self.assets.treat_mask(t.frame)) {
            (Some(bowl_mask), Some(treat_mask)) => {
                pixel_overlap(treat_mask, treat_box, bowl_mask, bowl.bounds())
            },
            _ => true,
        }
    }

    /// Drops a caught treat into the bowl, stacking by how many are already in.
    fn catch_in_bowl(&mut self, t: &Treat, bowl: BowlGeometry) {
        let inner_left = bowl.left() + BOWL_PADDING;
        let inner_right = bowl.right() - BOWL_PADDING;
        let jitter = (self.rng.random::<f64>() - 0.5) * (t.w * 0.08);
        let dest_x = clamp_low(bowl.x + jitter, inner_left + t.w / 2.0, inner_right - t.w / 2.0);

        let base_y = bowl.y - t.h / 2.0;
        let pile_lift = (bowl.h * 0.09).round();
        let per_row = ((inner_right - inner_left) / t.w.max(1.0)).floor().max(1.0);
        let row = (self.bowl_pile.len() as f64 / per_row).floor();
        let dest_y = ((t.h / 2.0).round() + 4.0).max(base_y - row * (t.h * 0.25) - pile_lift);

        self.settle_in_bowl(t, dest_x, dest_y, bowl);
    }

    /// Where a falling treat lands on the bowl pile, if it is coming down onto
    /// the top of a piled treat this frame.
    fn pile_landing(&self, t: &Treat, next_y: f64, bowl: BowlGeometry) -> Option<(f64, f64)> {
        let next_box = Bounds::new(t.x, next_y, t.w, t.h);
        let half = (t.h / 2.0).round();
        let clamp_y = |y: f64| clamp_low(y, half + 4.0, self.height - half - 4.0);

        for item in &self.bowl_pile {
            let item_box = Bounds::new(
                bowl.x + item.current_dx,
                bowl.top() + item.current_local_y,
                item.w,
                item.h,
            );
            if !next_box.touches(&item_box) || t.y >= item_box.cy {
                continue;
            }

            let masks = (self.assets.treat_mask(t.frame), self.assets.treat_mask(item.frame));
            let (Some(own), Some(other)) = masks else {
                return Some((t.x, clamp_y(item_box.top() - (t.h * 0.9).round())));
            };
            let Some(contact) = find_contact(own, next_box, other, item_box) else {
                continue;
            };
            // Lower part of the falling treat on the very top of the piled one.
            let own_y = contact.a_src_y as f64 / own.height() as f64;
            let other_y = contact.b_src_y as f64 / other.height() as f64;
            if own_y < 0.6 || other_y > 0.12 {
                continue;
            }
            let center_x =
                contact.canvas_x - (contact.a_src_x as f64 + 0.5) * (t.w / own.width() as f64) + t.w / 2.0;
            let center_y =
                contact.canvas_y - (contact.a_src_y as f64 + 0.5) * (t.h / own.height() as f64) + t.h / 2.0;
            return Some((center_x, clamp_y(center_y.round())));
        }
        None
    }

    /// Searches for support near `(x, y)` and adds the treat to the bowl pile,
    /// falling back to the floor when nothing holds it.
    fn settle_in_bowl(&mut self, t: &Treat, x: f64, y: f64, bowl: BowlGeometry) {
        let half = (t.h / 2.0).round();
        if y <= CEILING_MARGIN + half + 2.0 {
            self.place_on_floor(t);
            return;
        }

        let offset = {
            let mut supports = Vec::with_capacity(self.bowl_pile.len() + 1);
            if let Some(mask) = self.assets.bowl_mask() {
                supports.push(Support { mask: Some(mask), bounds: bowl.bounds() });
            }
            supports.extend(self.bowl_pile.iter().map(|item| Support {
                mask: self.assets.treat_mask(item.frame),
                bounds: Bounds::new(
                    bowl.x + item.current_dx,
                    bowl.top() + item.current_local_y,
                    item.w,
                    item.h,
                ),
            }));
            find_supporting_offset(
                self.assets.treat_mask(t.frame),
                Bounds::new(x, y, t.w, t.h),
                &supports,
                SEARCH_DOWN,
                SEARCH_SIDE,
            )
        };
        let Some(offset) = offset else {
            self.place_on_floor(t);
            return;
        };

        let overlap = (t.h * 0.05).round().min(2.0);
        let slide = (t.h * 0.03).round().min(2.0);
        let lower = (t.h * 0.06).round().min(6.0);
        let local_y = y + offset.dy - bowl.top() + overlap + slide + lower;
        self.bowl_pile.push(BowlItem {
            target_dx: x + offset.dx - bowl.x,
            current_dx: t.x - bowl.x,
            local_y,
            current_local_y: local_y - ENTRY_RISE,
            w: t.w,
            h: t.h,
            frame: t.frame,
            animating: true,
        });
    }

    /// Rests a missed treat on the floor, stacking on nearby floor treats
    /// unless the stack would reach up near the bowl.
    pub(crate) fn place_on_floor(&mut self, t: &Treat) {
        let clamped_x = clamp_low(t.x, t.w / 2.0, self.width - t.w / 2.0);
        let floor_y = self.height - t.h / 2.0 - FLOOR_MARGIN;
        let entry = (t.h * 0.25).round().min(16.0);

        let nearby_top = self
            .floor_pile
            .iter()
            .filter(|f| (f.x - clamped_x).abs() <= f.w.max(t.w))
            .map(|f| f.y - f.h / 2.0)
            .reduce(f64::min);
        let dest_y = match nearby_top {
            None => floor_y,
            Some(top) => ((t.h / 2.0).round() + 4.0).max(top - (t.h * 0.9).round()),
        };

        let bowl = self.bowl_geometry();
        let offset = {
            let mut supports = Vec::with_capacity(self.floor_pile.len() + 1);
            if let Some(mask) = self.assets.bowl_mask() {
                supports.push(Support { mask: Some(mask), bounds: bowl.bounds() });
            }
            supports.extend(self.floor_pile.iter().map(|f| Support {
                mask: self.assets.treat_mask(f.frame),
                bounds: Bounds::new(f.x, f.y, f.w, f.h),
            }));
            find_supporting_offset(
                self.assets.treat_mask(t.frame),
                Bounds::new(clamped_x, dest_y, t.w, t.h),
                &supports,
                SEARCH_DOWN,
                SEARCH_SIDE,
            )
        };
        let (final_x, final_y) = match offset {
            Some(offset) => (clamped_x + offset.dx, dest_y + offset.dy),
            None => (clamped_x, dest_y),
        };

        let min_gap = self.config.min_floor_stack_gap + (bowl.h * 0.06).round();
        if final_y - t.h / 2.0 < bowl.top() + min_gap {
            let spread = (t.w * 2.0).min(60.0);
            let scatter_x = clamped_x + (self.rng.random::<f64>() - 0.5) * spread;
            self.floor_pile.push(FloorItem {
                x: clamp_low(scatter_x, t.w / 2.0, self.width - t.w / 2.0),
                y: floor_y,
                current_y: floor_y - entry,
                w: t.w,
                h: t.h,
                frame: t.frame,
                animating: true,
                vx: 0.0,
            });
            return;
        }

        self.floor_pile.push(FloorItem {
            x: final_x,
            y: final_y,
            current_y: final_y - entry,
            w: t.w,
            h: t.h,
            frame: t.frame,
            animating: true,
            vx: 0.0,
        });
    }

    fn update_chocolates(&mut self, bowl: BowlGeometry, dt_ms: f64) {
        for i in (0..self.chocolates.len()).rev() {
            let c = &mut self.chocolates[i];
            c.y += c.speed * (dt_ms / FRAME_MS);
            let c = *c;
            if c.y - c.h / 2.0 > self.height {
                self.chocolates.remove(i);
                continue;
            }
            let choc_box = Bounds::new(c.x, c.y, c.w, c.h);
            if !choc_box.touches(&bowl.bounds()) {
                continue;
            }
            let collide = match (self.assets.bowl_mask(), self.assets.chocolate_mask()) {
                (Some(bowl_mask), Some(choc_mask)) => {
                    pixel_overlap(choc_mask, choc_box, bowl_mask, bowl.bounds())
                },
                _ => true,
            };
            if collide {
                self.chocolates.remove(i);
                self.end(EndReason::Chocolate);
                break;
            }
        }
    }

    fn ease_bowl_pile(&mut self) {
        for item in self.bowl_pile.iter_mut().filter(|item| item.animating) {
            item.current_local_y += ease_step(item.local_y - item.current_local_y, 0.18, 0.5);
            item.current_dx += ease_step(item.target_dx - item.current_dx, 0.2, 0.3);
            if (item.local_y - item.current_local_y).abs() < 0.5
                && (item.target_dx - item.current_dx).abs() < 0.5
            {
                item.current_local_y = item.local_y;
                item.current_dx = item.target_dx;
                item.animating = false;
            }
        }
    }

    fn settle_floor_pile(&mut self, bowl: BowlGeometry, bowl_dx: f64) {
        let nudging = bowl_dx.abs() > MOTION_EPSILON;
        let width = self.width;

        for i in 0..self.floor_pile.len() {
            let item = &mut self.floor_pile[i];
            if item.animating {
                item.current_y += ease_step(item.y - item.current_y, 0.18, 0.5);
                if (item.y - item.current_y).abs() < 0.5 {
                    item.current_y = item.y;
                    item.animating = false;
                }
            }
            let (x, w) = (item.x, item.w);
            let under_bowl = bowl.overlaps_column(x, w);

            if !nudging || !under_bowl {
                let mut push = 0.0;
                for (j, other) in self.floor_pile.iter().enumerate() {
                    if j == i {
                        continue;
                    }
                    let dx = x - other.x;
                    let dist = dx.abs();
                    let want = (w + other.w) * 0.45;
                    if dist > 0.0 && dist < want {
                        push += (dx / dist) * (want - dist) * 0.02;
                    }
                }
                if self.rng.random::<f64>() < self.config.floor_jitter_chance {
                    push += (self.rng.random::<f64>() - 0.5) * self.config.floor_jitter;
                }
                self.floor_pile[i].vx += push;
            }

            let damp = self.config.floor_spread_damp;
            let item = &mut self.floor_pile[i];
            if nudging && under_bowl {
                item.x = clamp_low(item.x + bowl_dx * 0.25 * 0.85, item.w / 2.0, width - item.w / 2.0);
            }
            if item.vx.abs() > MOTION_EPSILON {
                item.x = clamp_low(item.x + item.vx, item.w / 2.0, width - item.w / 2.0);
                item.vx *= damp;
                if item.vx.abs() < 0.03 {
                    item.vx = 0.0;
                }
            }
        }
    }

    fn award(&mut self, t: &Treat) {
        self.score = self.score.saturating_add(t.points());
    }

    fn end(&mut self, reason: EndReason) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Ended(reason);
        let new_best = self.score > self.high_score;
        if new_best {
            self.high_score = self.score;
        }
        tracing::info!(score = self.score, new_best, ?reason, "treat catcher ended");
    }

    /// Everything to draw this frame: floor pile, chocolates, bowl, bowl pile
    /// (shallowest first), then falling treats. The bowl is only drawn once
    /// its image is loaded.
    #[must_use]
    pub fn sprites(&self) -> Sprites {
        let bowl = self.bowl_geometry();
        let mut sprites = Vec::with_capacity(
            self.floor_pile.len() + self.chocolates.len() + 1 + self.bowl_pile.len() + self.treats.len(),
        );
        sprites.extend(self.floor_pile.iter().map(|f| Sprite {
            kind: SpriteKind::FloorTreat,
            x: f.x,
            y: f.current_y,
            w: f.w,
            h: f.h,
            frame: f.frame,
        }));
        sprites.extend(self.chocolates.iter().map(|c| Sprite {
            kind: SpriteKind::Chocolate,
            x: c.x,
            y: c.y,
            w: c.w,
            h: c.h,
            frame: None,
        }));
        if self.assets.bowl_ready() {
            sprites.push(Sprite {
                kind: SpriteKind::Bowl,
                x: bowl.x,
                y: bowl.y,
                w: bowl.w,
                h: bowl.h,
                frame: None,
            });
        }

        let mut pile: Vec<&BowlItem> = self.bowl_pile.iter().collect();
        pile.sort_by(|a, b| a.local_y.total_cmp(&b.local_y));
        sprites.extend(pile.into_iter().map(|p| Sprite {
            kind: SpriteKind::BowlTreat,
            x: bowl.x + p.current_dx,
            y: bowl.top() + p.current_local_y,
            w: p.w,
            h: p.h,
            frame: p.frame,
        }));
        sprites.extend(self.treats.iter().map(|t| Sprite {
            kind: SpriteKind::FallingTreat,
            x: t.x,
            y: t.y,
            w: t.w,
            h: t.h,
            frame: t.frame,
        }));
        sprites
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn bowl(&self) -> &Bowl {
        &self.bowl
    }

    #[must_use]
    pub fn treats(&self) -> &[Treat] {
        &self.treats
    }

    #[must_use]
    pub fn chocolates(&self) -> &[Chocolate] {
        &self.chocolates
    }

    #[must_use]
    pub fn bowl_pile(&self) -> &[BowlItem] {
        &self.bowl_pile
    }

    #[must_use]
    pub fn floor_pile(&self) -> &[FloorItem] {
        &self.floor_pile
    }

    /// Treats spawned since `start`; each is either falling or in exactly one pile.
    #[must_use]
    pub const fn treats_spawned(&self) -> u64 {
        self.treats_spawned
    }
}
