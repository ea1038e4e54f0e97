//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data with no external dependencies, so they can be used
//! by the rasterizer, the frame controller and the terminal layer alike.
//!
//! # Screen Model
//!
//! Every terminal cell holds two vertically stacked sub-pixels (top and
//! bottom half), so a `W x H` cell grid is rasterized as `W x 2H` sub-pixels.
//!
//! - **Max grid**: 400 columns by 300 rows
//! - **Fallback grid**: 80x24 when the terminal size cannot be queried
//!
//! # Camera Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOCAL_LENGTH` | 5.0 | Perspective divide numerator |
//! | `NEAR_Z` | -0.5 | Points at or in front of this are rejected |
//! | `FAR_Z` | -100.0 | Points at or behind this are rejected |
//! | `SCREEN_SCALE` | 0.38 | Fraction of the short screen side used per unit |
//! | `CAMERA_DISTANCE` | 5.0 | Cube center offset along -z |
//!
//! # Zoom
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_ZOOM` | 0.6 |
//! | `ZOOM_STEP` | 1.1 (multiplicative) |
//! | `ZOOM_MIN` | 0.1 |
//! | `ZOOM_MAX` | 5.0 |
//!
//! # Animation
//!
//! Orientation starts at `(0.7, 0.9, 0.3)` radians and advances by
//! `(0.6, 0.8, 0.4)` radians per second. Frame time is clamped to 100ms.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{CubeAction, Rgb, Vec3};
//!
//! let v = Vec3::new(3.0, 0.0, 4.0);
//! assert!((v.length() - 5.0).abs() < 1e-12);
//!
//! let dim = Rgb::new(200, 100, 50).shade(0.5);
//! assert_eq!(dim, Rgb::new(100, 50, 25));
//!
//! assert_eq!(CubeAction::from_byte(b'+'), Some(CubeAction::ZoomIn));
//! ```

pub mod color;
pub mod math;

pub use color::Rgb;
pub use math::Vec3;

/// Maximum framebuffer width in cells
pub const MAX_WIDTH: u16 = 400;

/// Maximum framebuffer height in cells
pub const MAX_HEIGHT: u16 = 300;

/// Grid used when the terminal size query fails
pub const FALLBACK_WIDTH: u16 = 80;

/// Grid used when the terminal size query fails
pub const FALLBACK_HEIGHT: u16 = 24;

/// Sleep between frames in microseconds (~60 FPS)
pub const FRAME_INTERVAL_US: u64 = 16_667;

/// Upper bound on the elapsed time fed into one frame, in seconds
pub const MAX_FRAME_DT: f64 = 0.1;

/// Perspective focal length
pub const FOCAL_LENGTH: f64 = 5.0;

/// Near clip plane (camera space z); visible points satisfy `FAR_Z < z < NEAR_Z`
pub const NEAR_Z: f64 = -0.5;

/// Far clip plane (camera space z)
pub const FAR_Z: f64 = -100.0;

/// Screen units per world unit, as a fraction of `min(width, 2 * height)`
pub const SCREEN_SCALE: f64 = 0.38;

/// Distance from the camera to the cube center along -z
pub const CAMERA_DISTANCE: f64 = 5.0;

/// Half the cube's edge length
pub const CUBE_HALF_EXTENT: f64 = 1.0;

/// Depth value of a sub-pixel that has not been written this frame
pub const DEPTH_EMPTY: f64 = -1e10;

/// Slack granted to bottom sub-pixel writes (see `FrameBuffer::put`)
pub const BOTTOM_DEPTH_BIAS: f64 = 0.01;

/// Pulls silhouette lines in front of coplanar fills
pub const LINE_DEPTH_BIAS: f64 = 0.01;

/// Signed areas below this are treated as degenerate triangles
pub const MIN_TRIANGLE_AREA: f64 = 1e-8;

pub const DEFAULT_ZOOM: f64 = 0.6;
pub const ZOOM_STEP: f64 = 1.1;
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 5.0;

/// Initial rotation angles (x, y, z) in radians
pub const INITIAL_ANGLES: [f64; 3] = [0.7, 0.9, 0.3];

/// Angular velocity (x, y, z) in radians per second
pub const ROTATION_RATES: [f64; 3] = [0.6, 0.8, 0.4];

/// User intents recognized by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeAction {
    /// Leave the render loop and restore the terminal
    Quit,
    /// Multiply zoom by `ZOOM_STEP`, capped at `ZOOM_MAX`
    ZoomIn,
    /// Divide zoom by `ZOOM_STEP`, floored at `ZOOM_MIN`
    ZoomOut,
}

impl CubeAction {
    /// Map a single raw keystroke byte to an action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_cube_types::CubeAction;
    ///
    /// assert_eq!(CubeAction::from_byte(b'q'), Some(CubeAction::Quit));
    /// assert_eq!(CubeAction::from_byte(0x1b), Some(CubeAction::Quit));
    /// assert_eq!(CubeAction::from_byte(b'_'), Some(CubeAction::ZoomOut));
    /// assert_eq!(CubeAction::from_byte(b'x'), None);
    /// ```
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'q' | b'Q' | 0x1b => Some(CubeAction::Quit),
            b'+' | b'=' => Some(CubeAction::ZoomIn),
            b'-' | b'_' => Some(CubeAction::ZoomOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CubeAction::Quit => "quit",
            CubeAction::ZoomIn => "zoomIn",
            CubeAction::ZoomOut => "zoomOut",
        }
    }
}
