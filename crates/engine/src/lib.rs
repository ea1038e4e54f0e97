//! Frame controller: owns the per-run mutable state and drives one frame per tick.
//!
//! The controller is deterministic given the elapsed times and actions fed to
//! it, so the whole frame pipeline can be exercised without a terminal.

pub mod frame;
pub mod state;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use frame::{Engine, Tick};
pub use state::{clamp_zoom, RenderState};
