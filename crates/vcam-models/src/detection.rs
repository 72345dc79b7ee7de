//! Candidate detections and frame timing.

use serde::{Deserialize, Serialize};

use crate::rect::NormalizedRect;

/// Frame delta used when the source frame rate is unknown or non-positive.
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 30.0;

/// A single subject candidate produced by the external detector/tracker
/// for the current frame. Never persisted across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateDetection {
    /// Bounding box in full-frame-normalized coordinates
    pub rect: NormalizedRect,
    /// Persistent track identity, when the tracker has one confirmed
    pub track_id: Option<u32>,
    /// Detection confidence (0.0-1.0)
    pub confidence: f64,
}

impl CandidateDetection {
    /// Create a new candidate.
    pub fn new(rect: NormalizedRect, track_id: Option<u32>, confidence: f64) -> Self {
        Self {
            rect,
            track_id,
            confidence,
        }
    }
}

/// Candidates for a single frame.
pub type FrameDetections = Vec<CandidateDetection>;

/// Per-frame time delta in seconds for a given frame rate.
///
/// Falls back to [`DEFAULT_FRAME_DT`] (30 fps) when the rate is unknown
/// or non-positive.
pub fn dt_for_fps(fps: f64) -> f64 {
    if fps > 0.0 {
        1.0 / fps
    } else {
        DEFAULT_FRAME_DT
    }
}
