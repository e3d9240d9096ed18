//! Lane Dodger - An arcade lane dodger on a 2D canvas
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (world state, spawner, collisions)
//! - `renderer`: Canvas 2D drawing of the road and cars
//! - `game`: Command interface and per-frame driver glue
//! - `settings`: Data-driven configuration and game balance

pub mod driver;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Width of the grass margin on each side of the road
    pub const SHOULDER_WIDTH: f32 = 100.0;

    /// Car footprint (player and obstacles share it)
    pub const CAR_WIDTH: f32 = 50.0;
    pub const CAR_HEIGHT: f32 = 80.0;

    /// Player lateral speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the player's top edge to the bottom of the canvas
    pub const PLAYER_BOTTOM_OFFSET: f32 = 120.0;

    /// Lane layout: 5 centers spaced around the road center
    pub const LANE_COUNT: usize = 5;
    pub const LANE_SPACING: f32 = 50.0;

    /// Center line dash: 20px stroke every 40px
    pub const DASH_PERIOD: f32 = 40.0;
    pub const DASH_LENGTH: f32 = 20.0;
}

/// Lane center x-coordinates for a canvas of the given width
pub fn lane_centers(canvas_width: f32) -> [f32; consts::LANE_COUNT] {
    let center = canvas_width / 2.0;
    let half = (consts::LANE_COUNT / 2) as f32;
    std::array::from_fn(|i| center + (i as f32 - half) * consts::LANE_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_centers_default_canvas() {
        assert_eq!(lane_centers(400.0), [100.0, 150.0, 200.0, 250.0, 300.0]);
    }
}
