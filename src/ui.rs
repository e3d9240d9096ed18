//! HUD sinks the game pushes to
//!
//! The page shell implements these with DOM updates; headless runs log.

use crate::sim::Mode;

pub trait Hud {
    /// Live score, pushed every frame while playing
    fn show_score(&mut self, score: u64);
    /// Final score, pushed once when a run ends
    fn show_final_score(&mut self, score: u64);
    /// Mode changed (button visibility, pause label, game-over panel)
    fn mode_changed(&mut self, mode: Mode);
    /// Difficulty ramped up; nothing on the page shows it
    fn difficulty_changed(&mut self, _speed: f32, _spawn_interval: u64) {}
}

/// HUD for headless runs
#[derive(Debug, Default)]
pub struct LogHud {
    pub last_score: u64,
}

impl Hud for LogHud {
    fn show_score(&mut self, score: u64) {
        if score != self.last_score {
            log::trace!("Score: {}", score);
        }
        self.last_score = score;
    }

    fn show_final_score(&mut self, score: u64) {
        log::info!("Game over! Final score: {}", score);
    }

    fn mode_changed(&mut self, mode: Mode) {
        log::debug!("Mode: {:?}", mode);
    }

    fn difficulty_changed(&mut self, speed: f32, spawn_interval: u64) {
        log::debug!("Speed {}, spawning every {} frames", speed, spawn_interval);
    }
}
