//! Game facade: the command interface the page shell drives
//!
//! Owns the world, the held-key state and the HUD. `frame` is one tick of the
//! run loop; the host decides when to call it.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::renderer::{Surface, draw_frame};
use crate::settings::{KeyAction, KeyBindings, Settings};
use crate::sim::{GameEvent, Mode, TickInput, World, tick};
use crate::ui::Hud;

/// Currently held steering keys.
///
/// Key handlers flip these flags between frames; the tick reads a snapshot.
#[derive(Debug, Default)]
pub struct InputState {
    left: AtomicBool,
    right: AtomicBool,
}

impl InputState {
    pub fn set_left(&self, held: bool) {
        self.left.store(held, Ordering::Relaxed);
    }

    pub fn set_right(&self, held: bool) {
        self.right.store(held, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            steer_left: self.left.load(Ordering::Relaxed),
            steer_right: self.right.load(Ordering::Relaxed),
        }
    }
}

/// What a routed key asks of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Not bound to anything
    Unbound,
    /// A steering flag was updated
    Steered,
    /// The caller should toggle pause
    TogglePause,
    /// Bound, but nothing to do (pause release or auto-repeat)
    Ignored,
}

/// Maps keys onto the shared input flags without touching the game.
///
/// Only `KeyRoute::TogglePause` needs the game itself.
#[derive(Debug, Clone)]
pub struct KeyRouter {
    input: Rc<InputState>,
    keys: KeyBindings,
}

impl KeyRouter {
    pub fn route(&self, key: &str, pressed: bool, repeat: bool) -> KeyRoute {
        match self.keys.action_for(key) {
            Some(KeyAction::SteerLeft) => {
                self.input.set_left(pressed);
                KeyRoute::Steered
            }
            Some(KeyAction::SteerRight) => {
                self.input.set_right(pressed);
                KeyRoute::Steered
            }
            Some(KeyAction::Pause) if pressed && !repeat => KeyRoute::TogglePause,
            Some(KeyAction::Pause) => KeyRoute::Ignored,
            None => KeyRoute::Unbound,
        }
    }
}

pub struct Game<H: Hud> {
    world: World,
    input: Rc<InputState>,
    router: KeyRouter,
    hud: H,
    auto_pause: bool,
}

impl<H: Hud> Game<H> {
    pub fn new(settings: Settings, seed: u64, hud: H) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        let input = Rc::new(InputState::default());
        Self {
            world: World::new(&settings, seed),
            router: KeyRouter {
                input: Rc::clone(&input),
                keys: settings.keys,
            },
            input,
            hud,
            auto_pause: settings.auto_pause,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mode(&self) -> Mode {
        self.world.mode
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    /// Router for key handlers that shouldn't borrow the game
    pub fn key_router(&self) -> KeyRouter {
        self.router.clone()
    }

    /// Start a fresh run from any mode
    pub fn start(&mut self) {
        self.world.start();
        self.hud.show_score(self.world.score);
        self.hud.mode_changed(self.world.mode);
    }

    /// Same as `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Toggle pause; returns false when ignored
    pub fn pause(&mut self) -> bool {
        let toggled = self.world.pause();
        if toggled {
            self.hud.mode_changed(self.world.mode);
        }
        toggled
    }

    pub fn set_steer_left(&self, held: bool) {
        self.input.set_left(held);
    }

    pub fn set_steer_right(&self, held: bool) {
        self.input.set_right(held);
    }

    /// Route a key press/release through the configured bindings.
    ///
    /// Returns true when the key is bound.
    pub fn key_event(&mut self, key: &str, pressed: bool, repeat: bool) -> bool {
        let route = self.router.route(key, pressed, repeat);
        if route == KeyRoute::TogglePause {
            self.pause();
        }
        route != KeyRoute::Unbound
    }

    /// Pause if a run is in progress (tab hidden, window blur)
    pub fn auto_pause(&mut self) {
        if self.auto_pause && self.world.mode == Mode::Playing {
            self.pause();
            log::info!("Auto-paused");
        }
    }

    /// One tick of the run loop: simulate, push HUD updates, repaint
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let input = self.input.snapshot();
        tick(&mut self.world, &input);

        for event in self.world.drain_events() {
            match event {
                GameEvent::ObstacleSpawned { lane } => {
                    log::debug!("Obstacle in lane {} at frame {}", lane, self.world.frame_count);
                }
                GameEvent::DifficultyIncreased {
                    speed,
                    spawn_interval,
                } => self.hud.difficulty_changed(speed, spawn_interval),
                GameEvent::Collision { final_score } => {
                    self.hud.show_final_score(final_score);
                    self.hud.mode_changed(self.world.mode);
                }
            }
        }
        if self.world.mode == Mode::Playing {
            self.hud.show_score(self.world.score);
        }

        draw_frame(surface, &self.world);
    }
}
