//! Terminal presentation module.
//!
//! Turns the core's dual-plane framebuffer into half-block glyphs with 24-bit
//! color escapes, and owns the terminal lifecycle (raw mode, alternate
//! screen, restoration on every exit path).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep per-frame output small by only emitting color changes
//! - Encode into a reusable byte buffer, then write once per frame

pub mod present;
pub mod renderer;
pub mod viewport;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use present::{encode_frame_into, LOWER_HALF, UPPER_HALF};
pub use renderer::{queue_restore, TerminalRenderer};
pub use viewport::Viewport;
