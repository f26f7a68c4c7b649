use std::path::PathBuf;

use anyhow::Result;
use caramel_client::LocalState;
use caramel_game::{GameAssets, GameConfig, GamePhase, World, autopilot};
use serde::Serialize;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundSummary {
    frames: u32,
    phase: GamePhase,
    score: u32,
    high_score: u32,
    new_high_score: bool,
    treats_spawned: u64,
    bowl_pile: usize,
    floor_pile: usize,
}

pub(crate) fn run(state_path: PathBuf, seed: Option<u64>, frames: u32) -> Result<()> {
    let mut state = LocalState::load(&state_path)?;
    let mut world = World::new(GameConfig::default(), GameAssets::default(), seed)?
        .with_high_score(state.treat_high_score);
    world.start();

    let mut played = 0;
    while played < frames && world.phase() == GamePhase::Running {
        autopilot::steer(&mut world);
        world.update(FRAME_MS);
        played += 1;
    }

    let new_high_score = state.record_high_score(world.high_score().max(world.score()));
    if new_high_score {
        state.save(&state_path)?;
    }

    let summary = RoundSummary {
        frames: played,
        phase: world.phase(),
        score: world.score(),
        high_score: state.treat_high_score,
        new_high_score,
        treats_spawned: world.treats_spawned(),
        bowl_pile: world.bowl_pile().len(),
        floor_pile: world.floor_pile().len(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
