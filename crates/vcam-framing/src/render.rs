//! Pixel-space mapping for the external renderer.
//!
//! The renderer contract: denormalize the crop against the source frame,
//! clamp to image bounds, and never hand back an empty window. Actual
//! pixel extraction and resizing happen outside this crate.

use vcam_models::{NormalizedRect, PixelRect};

/// Denormalize `rect` to integer pixel coordinates for a
/// `frame_width` x `frame_height` image.
///
/// The result is clamped to image bounds with at least 1x1 extent, so a
/// degenerate crop still yields a usable window.
pub fn to_pixel_rect(rect: &NormalizedRect, frame_width: u32, frame_height: u32) -> PixelRect {
    let w = frame_width as i32;
    let h = frame_height as i32;

    let mut left = (rect.left * frame_width as f64) as i32;
    let mut top = (rect.top * frame_height as f64) as i32;
    let mut right = (rect.right * frame_width as f64) as i32;
    let mut bottom = (rect.bottom * frame_height as f64) as i32;

    left = left.clamp(0, (w - 1).max(0));
    top = top.clamp(0, (h - 1).max(0));
    right = right.min(w);
    bottom = bottom.min(h);

    if right <= left {
        right = left + 1;
    }
    if bottom <= top {
        bottom = top + 1;
    }

    PixelRect::new(left, top, right - left, bottom - top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_frame_maps_to_full_image() {
        let rect = NormalizedRect::new(0.0, 0.0, 1.0, 1.0);
        let pixel = to_pixel_rect(&rect, 1920, 1080);

        assert_eq!(pixel, PixelRect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn test_interior_crop() {
        let rect = NormalizedRect::new(0.25, 0.25, 0.75, 0.75);
        let pixel = to_pixel_rect(&rect, 1920, 1080);

        assert_eq!(pixel, PixelRect::new(480, 270, 960, 540));
    }

    #[test]
    fn test_out_of_bounds_edges_clamped() {
        let rect = NormalizedRect::new(-0.1, -0.2, 1.1, 1.3);
        let pixel = to_pixel_rect(&rect, 640, 480);

        assert_eq!(pixel, PixelRect::new(0, 0, 640, 480));
    }

    #[test]
    fn test_degenerate_rect_gets_one_pixel_floor() {
        let pixel = to_pixel_rect(&NormalizedRect::zero(), 640, 480);
        assert_eq!(pixel, PixelRect::new(0, 0, 1, 1));

        // Degenerate at the far corner stays inside the image
        let corner = NormalizedRect::new(1.0, 1.0, 1.0, 1.0);
        let pixel = to_pixel_rect(&corner, 640, 480);
        assert_eq!(pixel, PixelRect::new(639, 479, 1, 1));
    }
}
