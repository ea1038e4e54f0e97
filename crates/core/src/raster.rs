//! Line and filled-triangle rasterization into a [`FrameBuffer`].
//!
//! All work happens in sub-pixel space (`width x 2*height`). Primitives with a
//! vertex outside the clip range, and zero-area triangles, are skipped without
//! error.

use crate::framebuffer::FrameBuffer;
use crate::projector::Projector;
use crate::types::{Rgb, Vec3, LINE_DEPTH_BIAS, MIN_TRIANGLE_AREA};

pub struct Rasterizer<'a> {
    fb: &'a mut FrameBuffer,
    projector: Projector,
}

impl<'a> Rasterizer<'a> {
    pub fn new(fb: &'a mut FrameBuffer, projector: Projector) -> Self {
        Self { fb, projector }
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Draw a 1-sub-pixel line between two camera-space points.
    ///
    /// Integer Bresenham on truncated endpoints with depth interpolated per
    /// step. Every sub-pixel is written `LINE_DEPTH_BIAS` in front of its
    /// interpolated depth so outlines win over coplanar fills.
    ///
    /// Returns the number of sub-pixels offered to the framebuffer.
    pub fn draw_line(&mut self, p0: Vec3, p1: Vec3, color: Rgb) -> usize {
        let (Some(a), Some(b)) = (self.projector.project(p0), self.projector.project(p1)) else {
            return 0;
        };

        let (x0, y0) = (a.x as i32, a.y as i32);
        let (x1, y1) = (b.x as i32, b.y as i32);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };

        let steps = dx.max(dy);
        let dz = if steps > 0 {
            (b.depth - a.depth) / steps as f64
        } else {
            0.0
        };

        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);
        let mut z = a.depth;
        let mut written = 0;

        loop {
            self.fb.put_subpixel(x, y, color, z + LINE_DEPTH_BIAS);
            written += 1;
            if x == x1 && y == y1 {
                break;
            }

            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
            z += dz;
        }

        written
    }

    /// Fill a triangle given in camera space with a flat color.
    ///
    /// Sub-pixel centers are tested against the three edge functions; a
    /// sample is inside when every edge value has the sign of the total area
    /// (zero counts as inside), so both windings fill. Depth is interpolated
    /// linearly in screen space, without perspective correction.
    ///
    /// Returns the number of sub-pixels offered to the framebuffer.
    pub fn fill_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3, color: Rgb) -> usize {
        let Some(p0) = self.projector.project(v0) else {
            return 0;
        };
        let Some(p1) = self.projector.project(v1) else {
            return 0;
        };
        let Some(p2) = self.projector.project(v2) else {
            return 0;
        };

        let area = (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x);
        if area.abs() < MIN_TRIANGLE_AREA {
            return 0;
        }

        let max_x = self.fb.width() as i32 - 1;
        let max_y = self.fb.subpixel_height() - 1;
        let min_bx = (p0.x.min(p1.x).min(p2.x).floor() as i32).max(0);
        let max_bx = (p0.x.max(p1.x).max(p2.x).ceil() as i32).min(max_x);
        let min_by = (p0.y.min(p1.y).min(p2.y).floor() as i32).max(0);
        let max_by = (p0.y.max(p1.y).max(p2.y).ceil() as i32).min(max_y);

        let inv_area = 1.0 / area;
        let mut written = 0;

        for y in min_by..=max_by {
            let py = y as f64 + 0.5;
            for x in min_bx..=max_bx {
                let px = x as f64 + 0.5;

                let w0 = (p2.x - p1.x) * (py - p1.y) - (p2.y - p1.y) * (px - p1.x);
                let w1 = (p0.x - p2.x) * (py - p2.y) - (p0.y - p2.y) * (px - p2.x);
                let w2 = (p1.x - p0.x) * (py - p0.y) - (p1.y - p0.y) * (px - p0.x);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if !inside {
                    continue;
                }

                let z = (w0 * p0.depth + w1 * p1.depth + w2 * p2.depth) * inv_area;
                self.fb.put_subpixel(x, y, color, z);
                written += 1;
            }
        }

        written
    }
}
