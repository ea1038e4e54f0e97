//! Non-blocking keyboard polling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::CubeAction;

/// Consume at most one pending terminal event and map it.
///
/// Returns `Ok(None)` when nothing is pending, for non-key events, for key
/// releases/repeats and for unmapped keys. Never blocks.
pub fn poll_action() -> io::Result<Option<CubeAction>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
        _ => Ok(None),
    }
}
