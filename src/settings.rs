//! Game settings and balance tuning
//!
//! Loaded from JSON (a settings file natively, the canvas `data-settings`
//! attribute on the web). Every field is optional in the document.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Difficulty and scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll and obstacle base speed at the start of a run (pixels/frame)
    pub base_speed: f32,
    /// Speed added at every difficulty ramp
    pub speed_step: f32,
    /// Frames between difficulty ramps
    pub ramp_period: u64,
    /// Frames between spawns at the start of a run
    pub spawn_interval: u64,
    /// Spawn interval reduction at every difficulty ramp
    pub spawn_interval_step: u64,
    /// Spawn interval floor
    pub min_spawn_interval: u64,
    /// Obstacles move this much faster than the world speed at spawn time
    pub obstacle_speed_bonus: f32,
    /// Frames per score point
    pub frames_per_point: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            speed_step: 0.5,
            ramp_period: 600,
            spawn_interval: 120,
            spawn_interval_step: 10,
            min_spawn_interval: 60,
            obstacle_speed_bonus: 1.0,
            frames_per_point: 10,
        }
    }
}

impl Tuning {
    /// Clamp values that would break the frame arithmetic (zero divisors)
    pub fn sanitized(mut self) -> Self {
        self.ramp_period = self.ramp_period.max(1);
        self.min_spawn_interval = self.min_spawn_interval.max(1);
        self.spawn_interval = self.spawn_interval.max(self.min_spawn_interval);
        self.frames_per_point = self.frames_per_point.max(1);
        self
    }
}

/// Key bindings, matched against `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub pause: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".to_string()],
            right: vec!["ArrowRight".to_string()],
            pause: vec!["Escape".to_string(), "p".to_string()],
        }
    }
}

/// What a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SteerLeft,
    SteerRight,
    Pause,
}

impl KeyBindings {
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        let matches = |keys: &[String]| keys.iter().any(|k| k == key);
        if matches(&self.left) {
            Some(KeyAction::SteerLeft)
        } else if matches(&self.right) {
            Some(KeyAction::SteerRight)
        } else if matches(&self.pause) {
            Some(KeyAction::Pause)
        } else {
            None
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Fixed RNG seed; the host clock is used when absent
    pub seed: Option<u64>,
    pub keys: KeyBindings,
    /// Pause when the tab is hidden or the window loses focus
    pub auto_pause: bool,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: None,
            keys: KeyBindings::default(),
            auto_pause: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a (possibly partial) JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"seed": 7, "tuning": {"base_speed": 3.0}}"#)
            .expect("valid json");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.base_speed, 3.0);
        assert_eq!(settings.tuning.spawn_interval, 120);
        assert_eq!(settings.canvas_width, 400.0);
        assert!(settings.auto_pause);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(Settings::from_json("{not json").is_err());
        assert_eq!(Settings::from_json_or_default("{not json"), Settings::default());
    }

    #[test]
    fn test_zero_divisors_are_sanitized() {
        let settings =
            Settings::from_json(r#"{"tuning": {"ramp_period": 0, "min_spawn_interval": 0, "spawn_interval": 0, "frames_per_point": 0}}"#)
                .expect("valid json");
        assert_eq!(settings.tuning.ramp_period, 1);
        assert_eq!(settings.tuning.min_spawn_interval, 1);
        assert_eq!(settings.tuning.spawn_interval, 1);
        assert_eq!(settings.tuning.frames_per_point, 1);
    }

    #[test]
    fn test_key_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for("ArrowLeft"), Some(KeyAction::SteerLeft));
        assert_eq!(keys.action_for("ArrowRight"), Some(KeyAction::SteerRight));
        assert_eq!(keys.action_for("Escape"), Some(KeyAction::Pause));
        assert_eq!(keys.action_for("x"), None);
    }
}
