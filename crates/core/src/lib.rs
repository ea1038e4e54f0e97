//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the whole software rasterization pipeline. It has
//! **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same orientation, time and zoom produce identical frames
//! - **Testable**: Every stage can be checked against a plain framebuffer
//! - **Fast**: Zero-allocation per frame once the framebuffer exists
//!
//! # Module Structure
//!
//! - [`framebuffer`]: two depth-tested sub-pixels (top/bottom) per terminal cell
//! - [`projector`]: camera-space to sub-pixel screen space with near/far rejection
//! - [`raster`]: Bresenham lines and barycentric triangle fill
//! - [`lighting`]: ambient + two diffuse lights + specular highlight
//! - [`scene`]: cube geometry, back-face culling, painter's sort, silhouette edges
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{render_cube, FrameBuffer, Orientation, Projector};
//!
//! let mut fb = FrameBuffer::try_new(80, 24).unwrap();
//! fb.clear();
//! let projector = Projector::for_framebuffer(&fb, 0.6);
//! let stats = render_cube(&mut fb, projector, Orientation::initial(), 0.0);
//!
//! assert!(stats.visible_faces > 0);
//! assert!(fb.covered_subpixels() > 0);
//! ```

pub mod error;
pub mod framebuffer;
pub mod lighting;
pub mod projector;
pub mod raster;
pub mod scene;

pub use tui_cube_types as types;

// Re-export commonly used types for convenience
pub use error::RenderError;
pub use framebuffer::{Cell, FrameBuffer, Half};
pub use lighting::Lighting;
pub use projector::{Projected, Projector};
pub use raster::Rasterizer;
pub use scene::{
    render_cube, silhouette_edges, transform_vertices, visible_faces, Face, Orientation,
    SceneStats, VisibleFaces,
};
