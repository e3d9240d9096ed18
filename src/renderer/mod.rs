//! Canvas rendering module
//!
//! Every frame is repainted from scratch out of the current `World`. The
//! renderer only issues 2D primitive calls through `Surface`.

pub mod car;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod road;

pub use recording::{DrawCall, RecordingSurface};

use glam::Vec2;

use crate::sim::World;

/// Colors for game elements
pub mod colors {
    pub const GRASS: &str = "#27ae60";
    pub const ASPHALT: &str = "#34495e";
    pub const CENTER_LINE: &str = "#f1c40f";
    pub const EDGE_LINE: &str = "#ffffff";
    pub const WINDOW: &str = "#87ceeb";
    pub const WHEEL: &str = "#2c3e50";
    pub const HEADLIGHT: &str = "#ffff00";
}

/// The 2D drawing primitives the game needs from its host
pub trait Surface {
    /// Erase the whole drawing area
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    /// Stroke a single segment with the current stroke style
    fn stroke_line(&mut self, from: Vec2, to: Vec2);

    /// Stroke several segments as one path
    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)]) {
        for &(from, to) in segments {
            self.stroke_line(from, to);
        }
    }
}

/// Paint a full frame: road, obstacles, then the player on top
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, world: &World) {
    surface.clear(world.width, world.height);
    road::draw_road(surface, world.width, world.height, world.road_offset);
    for obstacle in &world.obstacles {
        car::draw_car(surface, obstacle.pos, obstacle.size, obstacle.color, false);
    }
    let player = &world.player;
    car::draw_car(surface, player.pos, player.size, player.color, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Obstacle, World};

    #[test]
    fn test_frame_starts_with_clear() {
        let world = World::new(&Settings::default(), 1);
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &world);
        assert_eq!(
            surface.calls.first(),
            Some(&DrawCall::Clear {
                width: 400.0,
                height: 600.0
            })
        );
        assert_eq!(surface.clears(), 1);
    }

    #[test]
    fn test_player_drawn_after_obstacles() {
        let mut world = World::new(&Settings::default(), 1);
        world.obstacles.push(Obstacle::in_lane(100.0, 3.0));
        world.obstacles.push(Obstacle::in_lane(300.0, 3.0));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &world);

        let bodies = surface.rects_with_fill(crate::sim::state::OBSTACLE_COLOR);
        assert_eq!(bodies.len(), 2);
        let player_body = surface.rects_with_fill(crate::sim::state::PLAYER_COLOR);
        assert_eq!(player_body.len(), 1);
        assert_eq!(player_body[0].1, [175.0, 480.0, 50.0, 80.0]);

        let last_obstacle = bodies.iter().map(|(i, _)| *i).max().unwrap_or(0);
        assert!(player_body[0].0 > last_obstacle);
    }

    #[test]
    fn test_repaint_is_identical_for_same_world() {
        let mut world = World::new(&Settings::default(), 1);
        world.road_offset = 13.0;
        world.obstacles.push(Obstacle::in_lane(150.0, 3.0));

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        draw_frame(&mut first, &world);
        draw_frame(&mut second, &world);
        assert_eq!(first.calls, second.calls);
        assert_eq!(world.road_offset, 13.0);
    }
}
