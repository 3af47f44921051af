//! Tunable game settings, loaded from `dinorun.json` when present.
//!
//! Every field has a default, so a partial file only overrides what it
//! names. A missing or unreadable file yields `GameConfig::default()`.

use crate::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Jump physics, per frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame (positive = downward).
    pub gravity: f64,
    /// Vertical velocity set on jump (negative = upward).
    pub jump_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
        }
    }
}

/// Obstacle scroll speed and its ramp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub initial: f64,
    pub step: f64,
    pub max: f64,
    /// Score ticks between speed steps.
    pub ramp_interval: u64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial: INITIAL_SPEED,
            step: SPEED_STEP,
            max: MAX_SPEED,
            ramp_interval: SPEED_RAMP_INTERVAL,
        }
    }
}

/// Spawn timers and spawn-time randomness.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Obstacle threshold is drawn from `obstacle_min..obstacle_max` frames.
    pub obstacle_min: u32,
    pub obstacle_max: u32,
    pub cloud_interval: u32,
    /// Chance that a new obstacle is a cactus rather than a bird.
    pub cactus_probability: f64,
    pub cloud_min_speed: f64,
    pub cloud_max_speed: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacle_min: OBSTACLE_SPAWN_MIN,
            obstacle_max: OBSTACLE_SPAWN_MAX,
            cloud_interval: CLOUD_SPAWN_INTERVAL,
            cactus_probability: CACTUS_PROBABILITY,
            cloud_min_speed: CLOUD_MIN_SPEED,
            cloud_max_speed: CLOUD_MAX_SPEED,
        }
    }
}

/// Where images and sounds are looked up, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub image_dir: PathBuf,
    pub sound_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(IMAGE_DIR),
            sound_dir: PathBuf::from(SOUND_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub speed: SpeedConfig,
    pub spawn: SpawnConfig,
    pub assets: AssetConfig,
    pub high_score_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            speed: SpeedConfig::default(),
            spawn: SpawnConfig::default(),
            assets: AssetConfig::default(),
            high_score_file: PathBuf::from(HIGH_SCORE_FILE),
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, falling back to defaults, then repair any
    /// values the game loop cannot run with.
    pub fn load(path: &Path) -> Self {
        let config: GameConfig = load_json_or_default(path);
        config.sanitized()
    }

    /// Clamp inconsistent settings back into a playable range.
    pub fn sanitized(mut self) -> Self {
        if self.spawn.obstacle_min == 0 {
            log::warn!("spawn.obstacle_min must be positive, using 1");
            self.spawn.obstacle_min = 1;
        }
        if self.spawn.obstacle_max <= self.spawn.obstacle_min {
            log::warn!(
                "spawn.obstacle_max ({}) must exceed obstacle_min ({}), adjusting",
                self.spawn.obstacle_max,
                self.spawn.obstacle_min
            );
            self.spawn.obstacle_max = self.spawn.obstacle_min + 1;
        }
        if self.spawn.cloud_interval == 0 {
            self.spawn.cloud_interval = CLOUD_SPAWN_INTERVAL;
        }
        if self.spawn.cloud_max_speed < self.spawn.cloud_min_speed {
            self.spawn.cloud_max_speed = self.spawn.cloud_min_speed;
        }
        self.spawn.cactus_probability = self.spawn.cactus_probability.clamp(0.0, 1.0);
        if self.physics.gravity <= 0.0 {
            log::warn!(
                "physics.gravity ({}) must be positive, using default",
                self.physics.gravity
            );
            self.physics.gravity = GRAVITY;
        }
        if self.physics.jump_impulse >= 0.0 {
            log::warn!(
                "physics.jump_impulse ({}) must be negative, using default",
                self.physics.jump_impulse
            );
            self.physics.jump_impulse = JUMP_IMPULSE;
        }
        if self.speed.initial <= 0.0 {
            log::warn!(
                "speed.initial ({}) must be positive, using default",
                self.speed.initial
            );
            self.speed.initial = INITIAL_SPEED;
        }
        if self.speed.step < 0.0 {
            log::warn!("speed.step ({}) must not be negative, using default", self.speed.step);
            self.speed.step = SPEED_STEP;
        }
        if self.speed.ramp_interval == 0 {
            log::warn!("speed.ramp_interval must be positive, using default");
            self.speed.ramp_interval = SPEED_RAMP_INTERVAL;
        }
        if self.speed.max < self.speed.initial {
            log::warn!(
                "speed.max ({}) is below speed.initial ({}), raising it",
                self.speed.max,
                self.speed.initial
            );
            self.speed.max = self.speed.initial;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert!((config.physics.gravity - 0.6).abs() < f64::EPSILON);
        assert!((config.physics.jump_impulse - (-12.0)).abs() < f64::EPSILON);
        assert_eq!(config.spawn.obstacle_min, 40);
        assert_eq!(config.spawn.obstacle_max, 100);
        assert_eq!(config.spawn.cloud_interval, 100);
        assert_eq!(config.speed.ramp_interval, 500);
        assert_eq!(config.high_score_file, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GameConfig::load(Path::new("definitely_not_here_dinorun.json"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinorun.json");
        fs::write(
            &path,
            r#"{ "physics": { "gravity": 0.8 }, "high_score_file": "best.txt" }"#,
        )
        .unwrap();

        let config = GameConfig::load(&path);
        assert!((config.physics.gravity - 0.8).abs() < f64::EPSILON);
        // Untouched sibling keeps its default
        assert!((config.physics.jump_impulse - JUMP_IMPULSE).abs() < f64::EPSILON);
        assert_eq!(config.high_score_file, PathBuf::from("best.txt"));
        assert_eq!(config.speed, SpeedConfig::default());
    }

    #[test]
    fn test_invalid_json_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinorun.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(GameConfig::load(&path), GameConfig::default());
    }

    #[test]
    fn test_sanitize_repairs_spawn_range_and_speed() {
        let mut config = GameConfig::default();
        config.spawn.obstacle_min = 50;
        config.spawn.obstacle_max = 20;
        config.speed.max = 1.0;
        config.speed.ramp_interval = 0;
        config.spawn.cactus_probability = 3.0;

        let config = config.sanitized();
        assert_eq!(config.spawn.obstacle_max, 51);
        assert!((config.speed.max - config.speed.initial).abs() < f64::EPSILON);
        assert_eq!(config.speed.ramp_interval, SPEED_RAMP_INTERVAL);
        assert!((config.spawn.cactus_probability - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitize_repairs_physics_and_speed_signs() {
        let mut config = GameConfig::default();
        config.physics.gravity = 0.0;
        config.physics.jump_impulse = 4.0;
        config.speed.initial = -5.0;
        config.speed.step = -1.0;
        config.speed.max = -5.0;

        let config = config.sanitized();
        assert!((config.physics.gravity - GRAVITY).abs() < f64::EPSILON);
        assert!((config.physics.jump_impulse - JUMP_IMPULSE).abs() < f64::EPSILON);
        assert!((config.speed.initial - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!((config.speed.step - SPEED_STEP).abs() < f64::EPSILON);
        // Max is raised to the repaired initial speed
        assert!((config.speed.max - INITIAL_SPEED).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_repairs_zero_gravity_and_negative_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinorun.json");
        fs::write(
            &path,
            r#"{ "physics": { "gravity": 0.0 }, "speed": { "initial": -5.0, "max": -5.0 } }"#,
        )
        .unwrap();

        let config = GameConfig::load(&path);
        assert!(config.physics.gravity > 0.0);
        assert!(config.speed.initial > 0.0);
        assert!(config.speed.max >= config.speed.initial);
    }
}
