//! Per-frame simulation step
//!
//! Time is measured in frames: one call to `tick` is one frame, whatever the
//! host's refresh rate.

use super::collision::first_collision;
use super::spawner::try_spawn;
use super::state::{GameEvent, Mode, World};
use crate::consts::DASH_PERIOD;

/// Held input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub steer_left: bool,
    pub steer_right: bool,
}

/// Advance the world by one frame.
///
/// Does nothing unless the world is `Playing`.
pub fn tick(world: &mut World, input: &TickInput) {
    if world.mode != Mode::Playing {
        return;
    }

    world.frame_count += 1;

    // Difficulty ramp
    if world.frame_count % world.tuning.ramp_period == 0 {
        world.speed += world.tuning.speed_step;
        world.spawn_interval = world
            .spawn_interval
            .saturating_sub(world.tuning.spawn_interval_step)
            .max(world.tuning.min_spawn_interval);
        log::info!(
            "Difficulty up at frame {}: speed={}, spawn every {} frames",
            world.frame_count,
            world.speed,
            world.spawn_interval
        );
        world.events.push(GameEvent::DifficultyIncreased {
            speed: world.speed,
            spawn_interval: world.spawn_interval,
        });
    }

    steer_player(world, input);

    for obstacle in &mut world.obstacles {
        obstacle.pos.y += obstacle.speed;
    }
    let height = world.height;
    world.obstacles.retain(|o| o.pos.y < height);

    world.road_offset = (world.road_offset + world.speed).rem_euclid(DASH_PERIOD);

    let obstacle_speed = world.speed + world.tuning.obstacle_speed_bonus;
    if let Some((lane, obstacle)) = try_spawn(
        world.frame_count,
        world.spawn_interval,
        &world.lanes,
        obstacle_speed,
        &mut world.rng,
    ) {
        world.obstacles.push(obstacle);
        world.events.push(GameEvent::ObstacleSpawned { lane });
    }

    let collided = first_collision(&world.player, &world.obstacles).is_some();

    world.score = world.frame_count / world.tuning.frames_per_point;

    if collided {
        world.mode = Mode::GameOver;
        log::info!(
            "Collision at frame {}, final score {}",
            world.frame_count,
            world.score
        );
        world.events.push(GameEvent::Collision {
            final_score: world.score,
        });
    }
}

/// Apply held steering, each direction clamped against its own shoulder
fn steer_player(world: &mut World, input: &TickInput) {
    let (min_x, max_x) = world.player_x_range();
    let player = &mut world.player;
    if input.steer_left {
        player.pos.x = (player.pos.x - player.speed).max(min_x);
    }
    if input.steer_right {
        player.pos.x = (player.pos.x + player.speed).min(max_x);
    }
}
