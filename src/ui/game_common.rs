//! Frame pieces around the play field: border and layout, status bar,
//! info panel, game-over box.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Narrowest play field that still gets an info panel beside it.
const MIN_FIELD_WIDTH: u16 = 40;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Areas inside the outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [play field]                  │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    /// Zero-width when the terminal is too narrow for it.
    pub info_panel: Rect,
}

impl GameLayout {
    /// Split the bordered interior. The info panel is dropped before the play
    /// field shrinks below `MIN_FIELD_WIDTH`.
    pub fn split(inner: Rect, info_width: u16) -> Self {
        let info_width = if inner.width >= info_width + MIN_FIELD_WIDTH {
            info_width
        } else {
            0
        };
        let left_width = inner.width - info_width;
        let status_height = STATUS_BAR_HEIGHT.min(inner.height);
        let content_height = inner.height - status_height;

        GameLayout {
            content: Rect::new(inner.x, inner.y, left_width, content_height),
            status_bar: Rect::new(inner.x, inner.y + content_height, left_width, status_height),
            info_panel: Rect::new(inner.x + left_width, inner.y, info_width, inner.height),
        }
    }
}

/// Clear `area`, draw the titled border and lay out its interior.
pub fn render_game_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    GameLayout::split(inner, info_width)
}

/// A key and what it does, shown as `[key] action`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

fn hint_line(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}]", hint.key),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Status message on the first line, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    status_color: Color,
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }
    let status_line = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height >= 2 && !hints.is_empty() {
        let hints_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(hint_line(hints)).alignment(Alignment::Center),
            hints_area,
        );
    }
}

/// Render an info panel frame with the " Info " title. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Text for the game-over box.
pub struct GameOverText<'a> {
    pub title: &'a str,
    pub score: String,
    pub high_score: String,
    /// Extra highlighted line, e.g. a new-record notice
    pub highlight: Option<&'a str>,
    pub prompt: &'a str,
}

/// Render a centered game-over box over `area`, leaving the rest visible.
pub fn render_game_over_overlay(frame: &mut Frame, area: Rect, text: &GameOverText) {
    let content_height: u16 = if text.highlight.is_some() { 9 } else { 7 };
    let box_width = area.width.min(36);
    let box_height = (content_height + 2).min(area.height);
    if box_width < 4 || box_height < 3 {
        return;
    }
    let box_area = Rect::new(
        area.x + (area.width - box_width) / 2,
        area.y + (area.height - box_height) / 2,
        box_width,
        box_height,
    );

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let mut lines = vec![
        Line::from(Span::styled(
            text.title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            text.score.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            text.high_score.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Some(highlight) = text.highlight {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            highlight,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text.prompt,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
