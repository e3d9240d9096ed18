//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Time advances in whole frames only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_collision};
pub use spawner::try_spawn;
pub use state::{GameEvent, Mode, Obstacle, Player, World};
pub use tick::{TickInput, tick};
