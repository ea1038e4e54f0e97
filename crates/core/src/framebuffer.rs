//! Dual-plane framebuffer: two depth-tested sub-pixels per terminal cell.
//!
//! Each cell stores a top and a bottom sub-pixel, each with its own color and
//! depth. Depth is camera-space z, so a *greater* value is *closer*.
//! [`DEPTH_EMPTY`] marks a sub-pixel that has not been written this frame.

use crate::error::RenderError;
use crate::types::{Rgb, BOTTOM_DEPTH_BIAS, DEPTH_EMPTY};

/// Which half of a cell a sub-pixel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// Half for a row in doubled-height sub-pixel space.
    #[inline]
    pub fn of_subpixel_row(y: i32) -> Half {
        if y.rem_euclid(2) == 0 {
            Half::Top
        } else {
            Half::Bottom
        }
    }
}

/// Read-side view of one cell: `None` means the half was never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub top: Option<Rgb>,
    pub bottom: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    top_color: Vec<Rgb>,
    bot_color: Vec<Rgb>,
    top_depth: Vec<f64>,
    bot_depth: Vec<f64>,
}

fn alloc_plane<T: Clone>(len: usize, fill: T) -> Result<Vec<T>, RenderError> {
    let mut plane = Vec::new();
    plane
        .try_reserve_exact(len)
        .map_err(|source| RenderError::Allocation { cells: len, source })?;
    plane.resize(len, fill);
    Ok(plane)
}

impl FrameBuffer {
    /// Allocate a cleared framebuffer of `width x height` cells.
    ///
    /// Allocation failure is reported instead of aborting so the caller can
    /// restore the terminal first.
    pub fn try_new(width: u16, height: u16) -> Result<Self, RenderError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RenderError::Dimensions { width, height })?;
        Ok(Self {
            width,
            height,
            top_color: alloc_plane(len, Rgb::BLACK)?,
            bot_color: alloc_plane(len, Rgb::BLACK)?,
            top_depth: alloc_plane(len, DEPTH_EMPTY)?,
            bot_depth: alloc_plane(len, DEPTH_EMPTY)?,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Height in sub-pixels (two per cell row).
    pub fn subpixel_height(&self) -> i32 {
        self.height as i32 * 2
    }

    /// Reset both halves of every cell to black at [`DEPTH_EMPTY`].
    pub fn clear(&mut self) {
        self.top_color.fill(Rgb::BLACK);
        self.bot_color.fill(Rgb::BLACK);
        self.top_depth.fill(DEPTH_EMPTY);
        self.bot_depth.fill(DEPTH_EMPTY);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Depth-tested write of one sub-pixel. Out-of-range coordinates are
    /// silently clipped.
    ///
    /// The top half only accepts strictly closer depths. The bottom half also
    /// accepts writes up to [`BOTTOM_DEPTH_BIAS`] behind what is stored, so on
    /// ties the newer write wins there. This keeps seams between triangles
    /// that share an edge on a sub-cell boundary from flickering; switching it
    /// to a symmetric test brings the seams back.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, half: Half, color: Rgb, depth: f64) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        match half {
            Half::Top => {
                if depth > self.top_depth[i] {
                    self.top_color[i] = color;
                    self.top_depth[i] = depth;
                }
            }
            Half::Bottom => {
                if depth > self.bot_depth[i] - BOTTOM_DEPTH_BIAS {
                    self.bot_color[i] = color;
                    self.bot_depth[i] = depth;
                }
            }
        }
    }

    /// [`FrameBuffer::put`] addressed in doubled-height sub-pixel rows.
    #[inline]
    pub fn put_subpixel(&mut self, x: i32, y: i32, color: Rgb, depth: f64) {
        self.put(x, y.div_euclid(2), Half::of_subpixel_row(y), color, depth);
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        let i = self.idx(x as i32, y as i32)?;
        Some(Cell {
            top: (self.top_depth[i] > DEPTH_EMPTY).then_some(self.top_color[i]),
            bottom: (self.bot_depth[i] > DEPTH_EMPTY).then_some(self.bot_color[i]),
        })
    }

    /// Stored depth of one half, `None` when out of range or unset.
    pub fn depth(&self, x: u16, y: u16, half: Half) -> Option<f64> {
        let i = self.idx(x as i32, y as i32)?;
        let d = match half {
            Half::Top => self.top_depth[i],
            Half::Bottom => self.bot_depth[i],
        };
        (d > DEPTH_EMPTY).then_some(d)
    }

    /// Number of sub-pixels written since the last clear.
    pub fn covered_subpixels(&self) -> usize {
        self.top_depth
            .iter()
            .chain(self.bot_depth.iter())
            .filter(|&&d| d > DEPTH_EMPTY)
            .count()
    }
}
