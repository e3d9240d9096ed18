//! Axis-aligned collision detection
//!
//! Cars are rectangles that never rotate, so a box overlap test is exact.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Half-open overlap on both axes; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Index of the first obstacle overlapping the player
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let bounds = player.bounds();
    obstacles.iter().position(|o| bounds.overlaps(&o.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

    fn car(x: f32, y: f32) -> Aabb {
        Aabb::from_rect(Vec2::new(x, y), Vec2::new(CAR_WIDTH, CAR_HEIGHT))
    }

    #[test]
    fn test_overlapping_cars_collide() {
        assert!(car(175.0, 480.0).overlaps(&car(175.0, 500.0)));
    }

    #[test]
    fn test_no_horizontal_overlap_misses() {
        assert!(!car(175.0, 480.0).overlaps(&car(260.0, 500.0)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Right edge of one at 225 meets left edge of the other
        assert!(!car(175.0, 480.0).overlaps(&car(225.0, 480.0)));
        // Bottom edge of the obstacle at 480 meets the player's top edge
        assert!(!car(175.0, 480.0).overlaps(&car(175.0, 400.0)));
        assert!(car(175.0, 480.0).overlaps(&car(175.0, 400.5)));
    }

    #[test]
    fn test_first_collision_finds_index() {
        let player = Player::new(400.0, 600.0);
        let mut far = Obstacle::in_lane(300.0, 3.0);
        far.pos.y = 480.0;
        let mut hit = Obstacle::in_lane(200.0, 3.0);
        hit.pos.y = 500.0;

        assert_eq!(first_collision(&player, &[far.clone()]), None);
        assert_eq!(first_collision(&player, &[far, hit]), Some(1));
    }
}
