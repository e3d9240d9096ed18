//! Synchronous frame driving for headless hosts and tests
//!
//! The browser paces `Game::frame` with `requestAnimationFrame`; here the
//! caller does, one frame per loop iteration.

use crate::game::Game;
use crate::renderer::Surface;
use crate::sim::Mode;
use crate::ui::Hud;

/// Drive ticks until the run ends or `max_frames` is reached.
///
/// Returns the number of frames driven.
pub fn run_until_game_over<H: Hud, S: Surface + ?Sized>(
    game: &mut Game<H>,
    surface: &mut S,
    max_frames: u64,
) -> u64 {
    let mut driven = 0;
    while driven < max_frames && game.mode() != Mode::GameOver {
        game.frame(surface);
        driven += 1;
    }
    driven
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::settings::Settings;
    use crate::ui::LogHud;

    #[test]
    fn test_idle_player_is_eventually_hit() {
        let mut game = Game::new(Settings::default(), 2024, LogHud::default());
        let mut surface = RecordingSurface::default();
        game.start();
        let frames = run_until_game_over(&mut game, &mut surface, 100_000);
        assert_eq!(game.mode(), Mode::GameOver);
        assert_eq!(game.world().frame_count, frames);
        assert_eq!(game.world().score, frames / 10);
    }

    #[test]
    fn test_menu_runs_to_frame_limit_without_simulating() {
        let mut game = Game::new(Settings::default(), 1, LogHud::default());
        let mut surface = RecordingSurface::default();
        assert_eq!(run_until_game_over(&mut game, &mut surface, 3), 3);
        assert_eq!(surface.clears(), 3);
        assert_eq!(game.mode(), Mode::Menu);
        assert_eq!(game.world().frame_count, 0);
    }
}
