//! Terminal rendering.

pub mod dino_scene;
pub mod game_common;

use crate::assets::SpriteSet;
use crate::game::DinoGame;
use ratatui::Frame;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, game: &DinoGame, sprites: &SpriteSet) {
    let area = frame.size();
    dino_scene::render_dino_scene(frame, area, game, sprites);
}
