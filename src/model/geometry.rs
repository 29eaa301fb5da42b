//! Page-space and raster-space rectangles.

use serde::{Deserialize, Serialize};

/// A rectangle in page coordinates (72-DPI points), top-down: `y0` is the
/// top edge, `y1` the bottom edge, with `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from edges.
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle width in points.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Rectangle height in points.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Convert to raster pixel coordinates by multiplying every edge by
    /// `scale` (`DPI / 72`). Edges are truncated to whole pixels; negative
    /// coordinates clamp to zero.
    pub fn to_pixels(&self, scale: f32) -> PixelRect {
        let px = |v: f32| (v * scale).max(0.0) as u32;
        PixelRect {
            x0: px(self.x0),
            y0: px(self.y0),
            x1: px(self.x1),
            y1: px(self.y1),
        }
    }
}

/// A rectangle in raster pixel coordinates, top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left column
    pub x0: u32,
    /// Top row
    pub y0: u32,
    /// Right column (exclusive when iterating)
    pub x1: u32,
    /// Bottom row (exclusive when iterating)
    pub y1: u32,
}

impl PixelRect {
    /// True when the rectangle spans no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }
}
