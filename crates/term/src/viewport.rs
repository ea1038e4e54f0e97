//! Framebuffer size derived from the terminal size.

use crossterm::terminal;

use crate::types::{FALLBACK_HEIGHT, FALLBACK_WIDTH, MAX_HEIGHT, MAX_WIDTH};

/// Drawable grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Grid for a terminal of `cols x rows`: the last row stays free so the
    /// trailing newline never scrolls, and both sides are capped.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols.min(MAX_WIDTH),
            height: rows.saturating_sub(1).min(MAX_HEIGHT),
        }
    }

    /// Query the current terminal, falling back to 80x24.
    pub fn detect() -> Self {
        match terminal::size() {
            Ok((cols, rows)) => Self::for_terminal(cols, rows),
            Err(_) => Self::new(FALLBACK_WIDTH, FALLBACK_HEIGHT),
        }
    }
}
