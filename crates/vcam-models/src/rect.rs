//! Rectangle types shared across the framing pipeline.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in frame-relative `[0, 1]` coordinates.
///
/// Degenerate rectangles (zero or negative extent) are legal values and must
/// be tolerated by consumers; the freeze path of the framing controller uses
/// a zero rect as its "no detection" marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Left edge (0.0 = left of frame, 1.0 = right)
    pub left: f64,
    /// Top edge (0.0 = top of frame, 1.0 = bottom)
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl NormalizedRect {
    /// Create a new rectangle from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The degenerate zero rectangle.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Build a square rect of side `scale` centered at `(cx, cy)`.
    pub fn from_center_and_scale(cx: f64, cy: f64, scale: f64) -> Self {
        let half = scale / 2.0;
        Self::new(cx - half, cy - half, cx + half, cy + half)
    }

    /// Rectangle width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Rectangle height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center x-coordinate.
    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Center y-coordinate.
    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

impl std::fmt::Display for NormalizedRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(l={:.3}, t={:.3}, r={:.3}, b={:.3})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Integer crop window in pixel space, for the external renderer.
///
/// Always fully contained in the source frame with at least 1x1 extent;
/// see `vcam_framing::render` for the mapping from [`NormalizedRect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge x-coordinate
    pub x: i32,
    /// Top edge y-coordinate
    pub y: i32,
    /// Crop width
    pub width: i32,
    /// Crop height
    pub height: i32,
}

impl PixelRect {
    /// Create a new pixel rect.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
