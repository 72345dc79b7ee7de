//! Target acquisition: deciding which candidate to follow this frame.

use tracing::debug;
use vcam_models::{CandidateDetection, NormalizedRect};

/// The candidate chosen for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Bounding box in full-frame-normalized coordinates
    pub rect: NormalizedRect,
    /// Track identity of the chosen candidate, when it has one
    pub track_id: Option<u32>,
}

/// Per-frame candidate selection with lock-on and re-acquisition.
///
/// When a previously locked track id is present among the candidates it wins
/// outright; otherwise the candidate closest to frame center is chosen. A
/// lost lock therefore hands off silently to the nearest-to-center candidate
/// instead of reporting loss.
#[derive(Debug, Clone)]
pub struct TargetAcquisition {
    min_confidence: f64,
}

impl TargetAcquisition {
    /// Create an acquisition policy ignoring candidates below
    /// `min_confidence`.
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Select the candidate to follow, or `None` when no usable candidate
    /// exists.
    pub fn select(
        &self,
        candidates: &[CandidateDetection],
        locked_track_id: Option<u32>,
    ) -> Option<Selection> {
        let usable: Vec<&CandidateDetection> = candidates
            .iter()
            .filter(|c| c.confidence >= self.min_confidence)
            .collect();

        if usable.is_empty() {
            return None;
        }

        if let Some(locked) = locked_track_id {
            if let Some(candidate) = usable
                .iter()
                .find(|c| c.track_id == Some(locked))
            {
                return Some(Selection {
                    rect: candidate.rect,
                    track_id: candidate.track_id,
                });
            }
            debug!(
                locked_track_id = locked,
                "locked track absent, re-acquiring nearest to center"
            );
        }

        // Closest to frame center; strict < keeps the first-encountered
        // candidate on ties.
        let mut best: Option<(&CandidateDetection, f64)> = None;
        for candidate in usable {
            let dx = candidate.rect.center_x() - 0.5;
            let dy = candidate.rect.center_y() - 0.5;
            let dist = dx * dx + dy * dy;
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((candidate, dist));
            }
        }

        best.map(|(candidate, _)| Selection {
            rect: candidate.rect,
            track_id: candidate.track_id,
        })
    }
}
