//! Key events to game input

use crate::game::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Game(InputEvent),
    /// Key releases and repeats
    Nothing,
}

/// Map one crossterm key event
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return KeyAction::Nothing;
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::Game(InputEvent::Letter(c)),
        KeyCode::Backspace => KeyAction::Game(InputEvent::Backspace),
        KeyCode::Enter => KeyAction::Game(InputEvent::Submit),
        _ => KeyAction::Game(InputEvent::AnyKey),
    }
}
