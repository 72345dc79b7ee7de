//! Coordinate feedback: re-expressing a detection inside the current crop.
//!
//! The controller's error terms are defined relative to the currently
//! rendered window, not the original frame. When the detector runs on the
//! full frame, this transform is the reconciling step: it maps a full-frame
//! rect into the coordinate space of the previous frame's crop, sized 1.0
//! for a 1:1 crop.

use vcam_models::NormalizedRect;

use crate::controller::CropGeometry;

/// Map `rect` from full-frame-normalized space into the coordinate space of
/// `crop`.
///
/// `crop.scale` must be positive; the controller invariant guarantees this
/// for every geometry it exposes.
pub fn to_crop_space(rect: &NormalizedRect, crop: &CropGeometry) -> NormalizedRect {
    let crop_left = crop.center_x - crop.scale / 2.0;
    let crop_top = crop.center_y - crop.scale / 2.0;

    NormalizedRect::new(
        (rect.left - crop_left) / crop.scale,
        (rect.top - crop_top) / crop.scale,
        (rect.right - crop_left) / crop.scale,
        (rect.bottom - crop_top) / crop.scale,
    )
}
