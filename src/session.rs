//! One play session: the game plus the side effects its events trigger.
//!
//! Game logic stays pure and emits `GameEvent`s. The session turns them into
//! sounds and high-score writes, and owns the RNG so the loop in `main` only
//! feeds input and asks for frames.

use crate::audio::{AudioOutput, SoundEffect};
use crate::config::GameConfig;
use crate::game::{process_input, step_frame, DinoGame, DinoInput, GameEvent};
use crate::utils::persistence::HighScoreStore;
use rand::Rng;

/// Whether the main loop should keep going after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

pub struct Session<R: Rng> {
    game: DinoGame,
    audio: Box<dyn AudioOutput>,
    store: HighScoreStore,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Load the high score, build a fresh run and start the music.
    pub fn new(
        config: GameConfig,
        store: HighScoreStore,
        mut audio: Box<dyn AudioOutput>,
        mut rng: R,
    ) -> Self {
        let high_score = store.load();
        log::info!(
            "High score {} loaded from {}",
            high_score,
            store.path().display()
        );
        let game = DinoGame::new(config, high_score, &mut rng);
        audio.start_music();
        Self {
            game,
            audio,
            store,
            rng,
        }
    }

    pub fn game(&self) -> &DinoGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut DinoGame {
        &mut self.game
    }

    pub fn handle_input(&mut self, input: DinoInput) -> SessionControl {
        if input == DinoInput::Quit {
            return SessionControl::Quit;
        }
        let events = process_input(&mut self.game, input, &mut self.rng);
        self.dispatch(events);
        SessionControl::Continue
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let events = step_frame(&mut self.game, &mut self.rng);
        self.dispatch(events);
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::Crashed { .. } => {
                    self.audio.play(SoundEffect::Hit);
                    self.audio.stop_music();
                }
                GameEvent::NewHighScore(score) => {
                    if let Err(e) = self.store.save(score) {
                        log::error!(
                            "Failed to save high score to {}: {}",
                            self.store.path().display(),
                            e
                        );
                    } else {
                        log::info!("New high score {}", score);
                    }
                }
                GameEvent::Restarted => self.audio.start_music(),
            }
        }
    }

    /// Stop sound before the terminal is torn down.
    pub fn shutdown(&mut self) {
        self.audio.stop_music();
        log::info!(
            "Session ended after {} frames, high score {}",
            self.game.frame_count,
            self.game.high_score
        );
    }
}
