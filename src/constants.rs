//! Fixed game constants.
//!
//! All motion values are expressed per frame, so their real-time meaning
//! depends on the loop holding `FPS`.

// Frame pacing
pub const FPS: u32 = 60;

// Canvas (conceptual units, scaled into the terminal at render time)
pub const CANVAS_WIDTH: f64 = 1100.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Walking surface. Player and cacti rest their bottom edge here.
pub const GROUND_Y: f64 = CANVAS_HEIGHT - 100.0;

// Player
pub const PLAYER_X: f64 = 50.0;
pub const PLAYER_WIDTH: f64 = 60.0;
pub const PLAYER_HEIGHT: f64 = 70.0;
pub const GRAVITY: f64 = 0.6;
pub const JUMP_IMPULSE: f64 = -12.0;
/// Frames per run-cycle image while grounded.
pub const RUN_ANIM_PERIOD: u32 = 6;

// Obstacles
pub const CACTUS_WIDTH: f64 = 30.0;
pub const CACTUS_HEIGHT: f64 = 70.0;
pub const BIRD_WIDTH: f64 = 50.0;
pub const BIRD_HEIGHT: f64 = 30.0;
/// Gap between the ground line and a bird's bottom edge.
pub const BIRD_CLEARANCE: f64 = 30.0;
pub const CACTUS_PROBABILITY: f64 = 0.7;

// Clouds
pub const CLOUD_WIDTH: f64 = 80.0;
pub const CLOUD_HEIGHT: f64 = 30.0;
pub const CLOUD_MIN_Y: f64 = 60.0;
pub const CLOUD_MAX_Y: f64 = 220.0;
pub const CLOUD_MIN_SPEED: f64 = 1.0;
pub const CLOUD_MAX_SPEED: f64 = 3.0;

// Spawn timers (frames)
pub const OBSTACLE_SPAWN_MIN: u32 = 40;
pub const OBSTACLE_SPAWN_MAX: u32 = 100;
pub const CLOUD_SPAWN_INTERVAL: u32 = 100;

// Speed ramp
pub const INITIAL_SPEED: f64 = 10.0;
pub const SPEED_STEP: f64 = 1.0;
pub const MAX_SPEED: f64 = 20.0;
pub const SPEED_RAMP_INTERVAL: u64 = 500;

// Scoring
pub const SCORE_DIVISOR: u64 = 10;

// Files
pub const CONFIG_FILE: &str = "dinorun.json";
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
pub const IMAGE_DIR: &str = "images";
pub const SOUND_DIR: &str = "sounds";
