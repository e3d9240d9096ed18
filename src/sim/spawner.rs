//! Obstacle spawning on a frame cadence

use rand::Rng;

use super::state::Obstacle;

/// Spawn one obstacle on a random lane when `frame_count` lands on the cadence.
///
/// Returns the chosen lane index with the new obstacle.
pub fn try_spawn<R: Rng>(
    frame_count: u64,
    spawn_interval: u64,
    lanes: &[f32],
    speed: f32,
    rng: &mut R,
) -> Option<(usize, Obstacle)> {
    if lanes.is_empty() || spawn_interval == 0 || frame_count % spawn_interval != 0 {
        return None;
    }
    let lane = rng.random_range(0..lanes.len());
    Some((lane, Obstacle::in_lane(lanes[lane], speed)))
}
