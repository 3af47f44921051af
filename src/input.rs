//! Key mapping from crossterm events to game input.

use crate::game::DinoInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event. Only presses count; release and repeat events return
/// `None` so holding Space doesn't queue jumps.
pub fn map_key(key: KeyEvent) -> Option<DinoInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(' ') => DinoInput::Action,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => DinoInput::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => DinoInput::Quit,
        _ => DinoInput::Other,
    };
    Some(input)
}
