//! Dino run game logic: input, per-frame update, collision, scoring.

use super::types::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinoInput {
    Action, // Space: jump while active, restart after game over
    Quit,   // Esc, q, Ctrl-C
    Other,
}

/// Things that happened during input handling or a frame. The caller turns
/// these into sound and persistence side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    /// The run ended with this raw score.
    Crashed { score: u64 },
    /// The run that just ended beat the loaded high score.
    NewHighScore(u64),
    Restarted,
}

/// Apply one input. Quit is handled by the caller and ignored here.
pub fn process_input<R: Rng>(
    game: &mut DinoGame,
    input: DinoInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    match (game.status, input) {
        (GameStatus::Active, DinoInput::Action) => {
            if game.player.jump() {
                vec![GameEvent::Jumped]
            } else {
                Vec::new()
            }
        }
        (GameStatus::GameOver, DinoInput::Action) => {
            game.reset(rng);
            log::info!("Run restarted");
            vec![GameEvent::Restarted]
        }
        _ => Vec::new(),
    }
}

/// Advance one active frame. Does nothing after game over.
pub fn step_frame<R: Rng>(game: &mut DinoGame, rng: &mut R) -> Vec<GameEvent> {
    if game.status != GameStatus::Active {
        return Vec::new();
    }
    game.frame_count += 1;

    // 1. Spawn
    game.spawner.tick(rng, &mut game.obstacles, &mut game.clouds);

    // 2. Player physics and animation
    game.player.update();

    // 3. Scroll, then prune whatever left the canvas
    let speed = game.speed;
    for obstacle in &mut game.obstacles {
        obstacle.update(speed);
    }
    for cloud in &mut game.clouds {
        cloud.update();
    }
    game.obstacles.retain(|o| !o.is_off_screen());
    game.clouds.retain(|c| !c.is_off_screen());

    // 4. Score and speed ramp; every active frame counts, the crash frame included
    game.score += 1;
    apply_speed_ramp(game);

    // 5. Collision
    if check_collision(game).is_some() {
        return end_run(game);
    }

    Vec::new()
}

/// Index of the first obstacle overlapping the player, in spawn order.
pub fn check_collision(game: &DinoGame) -> Option<usize> {
    let player = game.player.rect();
    game.obstacles.iter().position(|o| o.rect().intersects(&player))
}

/// Step the speed up on every multiple of the ramp interval, capped at max.
fn apply_speed_ramp(game: &mut DinoGame) {
    let ramp = &game.config.speed;
    if game.score % ramp.ramp_interval == 0 {
        game.speed = (game.speed + ramp.step).min(ramp.max);
    }
}

fn end_run(game: &mut DinoGame) -> Vec<GameEvent> {
    game.status = GameStatus::GameOver;
    let mut events = vec![GameEvent::Crashed { score: game.score }];
    log::info!(
        "Run over: score {} (display {}), speed {:.1}",
        game.score,
        game.display_score(),
        game.speed
    );

    if game.score > game.high_score {
        game.high_score = game.score;
        game.new_high_score = true;
        events.push(GameEvent::NewHighScore(game.score));
    }
    events
}
