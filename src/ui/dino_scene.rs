//! Dino run scene rendering.
//!
//! Entities live on the fixed canvas. The play field is rasterized into a
//! pixel grid two pixels tall per terminal cell, sprites are sampled into it,
//! and each vertical pixel pair becomes one half-block cell. The cell buffer
//! is then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    render_game_frame, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameOverText, KeyHint,
};
use crate::assets::{Sprite, SpriteId, SpriteSet};
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_Y};
use crate::game::{DinoGame, Rect as CanvasRect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const UPPER_HALF: char = '\u{2580}'; // ▀
const LOWER_HALF: char = '\u{2584}'; // ▄

const GROUND_COLOR: [u8; 3] = [83, 83, 83];
const PEBBLE_COLOR: [u8; 3] = [60, 60, 60];

/// Render the whole game screen.
pub fn render_dino_scene(frame: &mut Frame, area: Rect, game: &DinoGame, sprites: &SpriteSet) {
    let layout = render_game_frame(frame, area, " VIP Dino Game ", Color::LightYellow, 18);

    render_play_field(frame, layout.content, game, sprites);
    render_status_bar_content(frame, layout.status_bar, game);
    if layout.info_panel.width > 0 {
        render_info_panel(frame, layout.info_panel, game);
    }

    if !game.is_active() {
        render_dino_game_over(frame, layout.content, game);
    }
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Canvas-space drawing surface at terminal pixel resolution.
struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<[u8; 3]>>,
    sx: f64,
    sy: f64,
}

impl PixelCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
            sx: width as f64 / CANVAS_WIDTH,
            sy: height as f64 / CANVAS_HEIGHT,
        }
    }

    fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, color: [u8; 3]) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = Some(color);
        }
    }

    /// Stretch `sprite` over a canvas rectangle. Every touched pixel samples
    /// the sprite at its center, so even a tiny entity shows up.
    fn blit(&mut self, sprite: &Sprite, rect: &CanvasRect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let x0 = (rect.x * self.sx).floor().max(0.0) as usize;
        let x1 = ((rect.right() * self.sx).ceil().max(0.0) as usize).min(self.width);
        let y0 = (rect.y * self.sy).floor().max(0.0) as usize;
        let y1 = ((rect.bottom() * self.sy).ceil().max(0.0) as usize).min(self.height);

        for py in y0..y1 {
            let v = ((py as f64 + 0.5) / self.sy - rect.y) / rect.height;
            for px in x0..x1 {
                let u = ((px as f64 + 0.5) / self.sx - rect.x) / rect.width;
                if let Some(color) = sprite.sample(u, v) {
                    self.set(px, py, color);
                }
            }
        }
    }
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Rasterize the play field into `width` x `height` terminal cells.
fn build_cells(game: &DinoGame, sprites: &SpriteSet, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let mut canvas = PixelCanvas::new(width, height * 2);

    for cloud in &game.clouds {
        canvas.blit(sprites.get(SpriteId::Cloud), &cloud.rect());
    }

    // ── Ground ────────────────────────────────────────────────────────
    let ground_py = ((GROUND_Y * canvas.sy) as usize).min(canvas.height.saturating_sub(1));
    for px in 0..canvas.width {
        canvas.set(px, ground_py, GROUND_COLOR);
    }
    // Pebbles scroll with the obstacles
    let scroll = (game.frame_count as f64 * game.speed * canvas.sx) as usize;
    for py in (ground_py + 2..canvas.height).step_by(3) {
        for px in 0..canvas.width {
            if (px + scroll + py * 5) % 13 == 0 {
                canvas.set(px, py, PEBBLE_COLOR);
            }
        }
    }

    for obstacle in &game.obstacles {
        canvas.blit(
            sprites.get(SpriteId::for_obstacle(obstacle.kind)),
            &obstacle.rect(),
        );
    }
    canvas.blit(
        sprites.get(SpriteId::for_pose(game.player.pose())),
        &game.player.rect(),
    );

    // ── Pixels to half-block cells ────────────────────────────────────
    let mut buffer = vec![vec![Cell::default(); width]; height];
    for (row, cells) in buffer.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let top = canvas.get(col, row * 2);
            let bottom = canvas.get(col, row * 2 + 1);
            *cell = match (top, bottom) {
                (None, None) => Cell::default(),
                (Some(t), None) => Cell {
                    ch: UPPER_HALF,
                    fg: rgb(t),
                    bg: Color::Reset,
                },
                (None, Some(b)) => Cell {
                    ch: LOWER_HALF,
                    fg: rgb(b),
                    bg: Color::Reset,
                },
                (Some(t), Some(b)) => Cell {
                    ch: UPPER_HALF,
                    fg: rgb(t),
                    bg: rgb(b),
                },
            };
        }
    }

    // ── Score (top-left) ──────────────────────────────────────────────
    if let Some(top_row) = buffer.first_mut() {
        let score = format!(" Score: {}", game.display_score());
        let high = format!("  HI: {}", game.display_high_score());
        let texts = [(score, Color::White), (high, Color::DarkGray)];
        let mut col = 0;
        for (text, fg) in texts.iter() {
            for ch in text.chars() {
                if col >= width {
                    break;
                }
                top_row[col] = Cell {
                    ch,
                    fg: *fg,
                    bg: Color::Reset,
                };
                col += 1;
            }
        }
    }

    buffer
}

/// Render the play field: clouds, ground, obstacles, player, score.
fn render_play_field(frame: &mut Frame, area: Rect, game: &DinoGame, sprites: &SpriteSet) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let buffer = build_cells(game, sprites, area.width as usize, area.height as usize);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(line, row_area);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &DinoGame) {
    if game.is_active() {
        render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[KeyHint::new("Space", "Jump"), KeyHint::new("Esc/Q", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[KeyHint::new("Space", "Restart"), KeyHint::new("Esc/Q", "Quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &DinoGame) {
    let inner = render_info_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let swatch = |id: SpriteId| Style::default().fg(rgb(id.placeholder_color()));

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                game.display_score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("High:  ", label),
            Span::styled(
                game.display_high_score().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(
                format!("{:.0}", game.speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(SpriteId::RunA)),
            Span::styled("Dino", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(SpriteId::Cactus)),
            Span::styled("Cactus", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(SpriteId::Bird)),
            Span::styled("Bird", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_dino_game_over(frame: &mut Frame, area: Rect, game: &DinoGame) {
    let text = GameOverText {
        title: "GAME OVER",
        score: format!("Score: {}", game.display_score()),
        high_score: format!("High Score: {}", game.display_high_score()),
        highlight: game.new_high_score.then_some("New high score!"),
        prompt: "Press SPACE to restart",
    };
    render_game_over_overlay(frame, area, &text);
}
