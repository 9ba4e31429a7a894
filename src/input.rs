//! Keyboard mapping.
//!
//! Translates crossterm key events into the small set of actions the runtime
//! understands. Everything not listed here is ignored.

use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of mapping one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    // Release and repeat events would double-steer on terminals that report them
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Steer(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Steer(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Steer(Direction::Right)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
