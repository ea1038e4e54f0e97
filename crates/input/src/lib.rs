//! Terminal input module.
//!
//! Maps `crossterm` key events (or raw keystroke bytes) into
//! [`crate::types::CubeAction`] and polls for at most one pending key per
//! frame without blocking.

pub mod map;
pub mod poll;

pub use tui_cube_types as types;

pub use map::{action_for_byte, handle_key_event};
pub use poll::poll_action;
