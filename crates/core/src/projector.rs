//! Perspective projection from camera space into sub-pixel screen space.

use crate::framebuffer::FrameBuffer;
use crate::types::{Vec3, FAR_Z, FOCAL_LENGTH, NEAR_Z, SCREEN_SCALE};

/// A point in sub-pixel screen space plus its camera-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Unmodified camera-space z (greater is closer).
    pub depth: f64,
}

/// Camera looking down -z, mapping onto a `width x 2*height` sub-pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl Projector {
    pub fn new(width: u16, height: u16, zoom: f64) -> Self {
        let width = width as f64;
        let subpixel_h = height as f64 * 2.0;
        Self {
            scale: width.min(subpixel_h) * SCREEN_SCALE * zoom,
            center_x: width * 0.5,
            center_y: subpixel_h * 0.5,
        }
    }

    pub fn for_framebuffer(fb: &FrameBuffer, zoom: f64) -> Self {
        Self::new(fb.width(), fb.height(), zoom)
    }

    /// Project `p`, or `None` unless `FAR_Z < p.z < NEAR_Z`.
    #[inline]
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        if p.z >= NEAR_Z || p.z <= FAR_Z {
            return None;
        }
        let factor = -FOCAL_LENGTH / p.z;
        Some(Projected {
            x: p.x * factor * self.scale + self.center_x,
            y: -p.y * factor * self.scale + self.center_y,
            depth: p.z,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_up_is_screen_up() {
        let proj = Projector::new(80, 24, 1.0);
        let above = proj.project(Vec3::new(0.0, 1.0, -5.0)).unwrap();
        let below = proj.project(Vec3::new(0.0, -1.0, -5.0)).unwrap();
        assert!(above.y < 24.0);
        assert!(below.y > 24.0);
    }

    #[test]
    fn scale_uses_short_side_in_subpixels() {
        // 80 wide, 24 tall => 48 sub-pixel rows, so the short side is 48.
        let proj = Projector::new(80, 24, 1.0);
        let p = proj.project(Vec3::new(1.0, 0.0, -5.0)).unwrap();
        assert!((p.x - (40.0 + 48.0 * 0.38)).abs() < 1e-9);
    }

    #[test]
    fn farther_points_shrink_toward_center() {
        let proj = Projector::new(80, 24, 1.0);
        let near = proj.project(Vec3::new(1.0, 0.0, -2.0)).unwrap();
        let far = proj.project(Vec3::new(1.0, 0.0, -20.0)).unwrap();
        assert!(near.x > far.x);
        assert!(far.x > 40.0);
    }
}
