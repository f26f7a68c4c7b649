/// Gameplay tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// CSS width of the canvas element before the 900px cap.
    pub display_width: f64,
    /// Device pixel ratio.
    pub dpr: f64,
    /// Active falling treats never exceed this.
    pub max_treats: usize,
    /// Delay before the first spawn after `start`.
    pub first_spawn_ms: f64,
    /// Spawn interval is `spawn_min_ms + random * spawn_jitter_ms`.
    pub spawn_min_ms: f64,
    pub spawn_jitter_ms: f64,
    /// Probability that a spawn also drops a chocolate.
    pub chocolate_chance: f64,
    /// Probability that a treat is the large size.
    pub large_treat_chance: f64,
    /// Keyboard bowl speed in canvas pixels per step.
    pub bowl_speed: f64,
    /// Floor stacks stay at least this far below the bowl top, plus 6% of the bowl height.
    pub min_floor_stack_gap: f64,
    pub floor_spread_damp: f64,
    pub floor_jitter: f64,
    pub floor_jitter_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            display_width: 800.0,
            dpr: 1.0,
            max_treats: 6,
            first_spawn_ms: 120.0,
            spawn_min_ms: 400.0,
            spawn_jitter_ms: 400.0,
            chocolate_chance: 0.08,
            large_treat_chance: 0.12,
            bowl_speed: 8.0,
            min_floor_stack_gap: 12.0,
            floor_spread_damp: 0.86,
            floor_jitter: 0.6,
            floor_jitter_chance: 0.02,
        }
    }
}
