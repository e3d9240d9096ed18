//! World state and core simulation types
//!
//! The world is an explicit value: the tick mutates it, the renderer reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::lane_centers;
use crate::settings::{Settings, Tuning};

/// Body colors
pub const PLAYER_COLOR: &str = "#e74c3c";
pub const OBSTACLE_COLOR: &str = "#3498db";

/// Global game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Waiting for the first start command
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen, resumable
    Paused,
    /// Run ended by a collision
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned { lane: usize },
    DifficultyIncreased { speed: f32, spawn_interval: u64 },
    Collision { final_score: u64 },
}

/// The player's car
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Lateral speed (pixels/frame)
    pub speed: f32,
    pub color: &'static str,
}

impl Player {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                Self::start_x(canvas_width),
                canvas_height - PLAYER_BOTTOM_OFFSET,
            ),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed: PLAYER_SPEED,
            color: PLAYER_COLOR,
        }
    }

    /// Horizontal position that centers the car on the road
    pub fn start_x(canvas_width: f32) -> f32 {
        canvas_width / 2.0 - CAR_WIDTH / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// An oncoming car
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed, fixed at spawn time
    pub speed: f32,
    pub color: &'static str,
}

impl Obstacle {
    /// An obstacle centered on `lane_x`, just above the visible area
    pub fn in_lane(lane_x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(lane_x - CAR_WIDTH / 2.0, -CAR_HEIGHT),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed,
            color: OBSTACLE_COLOR,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    pub mode: Mode,
    /// Simulated frames since the last start
    pub frame_count: u64,
    /// Always `frame_count / tuning.frames_per_point`
    pub score: u64,
    /// Current base speed (pixels/frame)
    pub speed: f32,
    /// Frames between spawns
    pub spawn_interval: u64,
    /// Lane marking animation offset (cosmetic), kept within one dash period
    pub road_offset: f32,
    pub player: Player,
    /// Active obstacles (unordered)
    pub obstacles: Vec<Obstacle>,
    pub lanes: [f32; LANE_COUNT],
    pub width: f32,
    pub height: f32,
    pub tuning: Tuning,
    /// Events recorded by ticks since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world in `Menu` mode
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let tuning = settings.tuning.clone().sanitized();
        Self {
            mode: Mode::Menu,
            frame_count: 0,
            score: 0,
            speed: tuning.base_speed,
            spawn_interval: tuning.spawn_interval,
            road_offset: 0.0,
            player: Player::new(settings.canvas_width, settings.canvas_height),
            obstacles: Vec::new(),
            lanes: lane_centers(settings.canvas_width),
            width: settings.canvas_width,
            height: settings.canvas_height,
            tuning,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Horizontal range the player's left edge may occupy
    pub fn player_x_range(&self) -> (f32, f32) {
        (
            SHOULDER_WIDTH,
            self.width - SHOULDER_WIDTH - self.player.size.x,
        )
    }

    /// Begin a fresh run from any mode
    pub fn start(&mut self) {
        self.mode = Mode::Playing;
        self.frame_count = 0;
        self.score = 0;
        self.speed = self.tuning.base_speed;
        self.spawn_interval = self.tuning.spawn_interval;
        self.obstacles.clear();
        self.player.pos.x = Player::start_x(self.width);
        self.road_offset = 0.0;
        self.events.clear();
        log::info!("Run started");
    }

    /// Same as `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Toggle between `Playing` and `Paused`.
    ///
    /// Returns false when the command was ignored (Menu or GameOver).
    pub fn pause(&mut self) -> bool {
        match self.mode {
            Mode::Playing => {
                self.mode = Mode::Paused;
                log::info!("Paused at frame {}", self.frame_count);
                true
            }
            Mode::Paused => {
                self.mode = Mode::Playing;
                log::info!("Resumed at frame {}", self.frame_count);
                true
            }
            Mode::Menu | Mode::GameOver => {
                log::debug!("Pause ignored in {:?}", self.mode);
                false
            }
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(&Settings::default(), 1)
    }

    #[test]
    fn test_initial_state_is_menu() {
        let w = world();
        assert_eq!(w.mode, Mode::Menu);
        assert_eq!(w.player.pos, Vec2::new(175.0, 480.0));
        assert_eq!(w.player_x_range(), (100.0, 250.0));
        assert!(w.obstacles.is_empty());
    }

    #[test]
    fn test_pause_toggles_only_while_running() {
        let mut w = world();
        assert!(!w.pause());
        assert_eq!(w.mode, Mode::Menu);

        w.start();
        assert!(w.pause());
        assert_eq!(w.mode, Mode::Paused);
        assert!(w.pause());
        assert_eq!(w.mode, Mode::Playing);

        w.mode = Mode::GameOver;
        assert!(!w.pause());
        assert_eq!(w.mode, Mode::GameOver);
    }

    #[test]
    fn test_start_from_game_over_resets_world() {
        let mut w = world();
        w.start();
        w.mode = Mode::GameOver;
        w.frame_count = 1234;
        w.score = 123;
        w.speed = 3.0;
        w.spawn_interval = 100;
        w.road_offset = 77.0;
        w.player.pos.x = 100.0;
        w.obstacles.push(Obstacle::in_lane(200.0, 4.0));

        w.start();
        assert_eq!(w.mode, Mode::Playing);
        assert_eq!(w.frame_count, 0);
        assert_eq!(w.score, 0);
        assert_eq!(w.speed, 2.0);
        assert_eq!(w.spawn_interval, 120);
        assert_eq!(w.road_offset, 0.0);
        assert_eq!(w.player.pos.x, 175.0);
        assert!(w.obstacles.is_empty());
    }

    #[test]
    fn test_restart_from_paused() {
        let mut w = world();
        w.start();
        w.pause();
        w.frame_count = 50;
        w.restart();
        assert_eq!(w.mode, Mode::Playing);
        assert_eq!(w.frame_count, 0);
    }

    #[test]
    fn test_obstacle_spawns_above_view() {
        let o = Obstacle::in_lane(150.0, 3.0);
        assert_eq!(o.pos, Vec2::new(125.0, -80.0));
        assert_eq!(o.speed, 3.0);
    }
}
