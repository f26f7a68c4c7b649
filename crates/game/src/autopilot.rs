//! Scripted player for headless runs and soak tests.

use crate::entity::Direction;
use crate::world::World;

/// Bowl position that catches the lowest falling treat whose column is
/// clear of chocolates.
#[must_use]
pub fn target_x(world: &World) -> Option<f64> {
    let bowl = world.bowl();
    let near_chocolate = |x: f64| {
        world.chocolates().iter().any(|c| (c.x - x).abs() < (c.w + bowl.w) / 2.0)
    };
    world
        .treats()
        .iter()
        .filter(|t| !near_chocolate(t.x))
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|t| t.x)
}

/// Moves the bowl one keyboard step toward [`target_x`], snapping when close.
pub fn steer(world: &mut World) {
    let Some(target) = target_x(world) else {
        return;
    };
    let bowl = world.bowl();
    let delta = target - bowl.x;
    if delta.abs() <= bowl.speed {
        world.set_bowl_x(target);
    } else if delta < 0.0 {
        world.nudge_bowl(Direction::Left);
    } else {
        world.nudge_bowl(Direction::Right);
    }
}
