//! The dino run itself: entities, spawning, and the per-frame state machine.

pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::{check_collision, process_input, step_frame, DinoInput, GameEvent};
pub use spawner::{SpawnInterval, SpawnTimer, Spawner};
pub use types::{Cloud, DinoGame, GameStatus, Obstacle, ObstacleKind, Player, PlayerPose, Rect};
