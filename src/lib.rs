//! TUI Cube (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_cube::{core,engine,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_cube_core as core;
pub use tui_cube_engine as engine;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
