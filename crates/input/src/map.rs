//! Key mapping from terminal events to cube actions.

use crate::types::CubeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one raw keystroke byte. Unrecognized bytes are ignored.
pub fn action_for_byte(byte: u8) -> Option<CubeAction> {
    CubeAction::from_byte(byte)
}

/// Map keyboard input to cube actions.
///
/// Ctrl-C quits as well, since raw mode delivers it as a key instead of a
/// signal.
pub fn handle_key_event(key: KeyEvent) -> Option<CubeAction> {
    match key.code {
        KeyCode::Esc => Some(CubeAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(CubeAction::Quit)
        }
        KeyCode::Char(ch) if ch.is_ascii() => action_for_byte(ch as u8),
        _ => None,
    }
}
