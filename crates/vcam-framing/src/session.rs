//! Per-stream framing session: acquisition state plus one controller.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vcam_models::{CandidateDetection, NormalizedRect};

use crate::acquisition::TargetAcquisition;
use crate::config::FramingConfig;
use crate::controller::AutoFramingController;
use crate::error::FramingResult;
use crate::feedback::to_crop_space;

/// Per-frame status summary for debug overlay and logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingStatus {
    /// Track id the session is locked to, if any
    pub locked_track_id: Option<u32>,
    /// Selected subject height in full-frame units (0.0 on empty frames)
    pub raw_height: f64,
    /// Selected subject height in crop-space units (0.0 on empty frames)
    pub crop_height: f64,
    /// Controller's smoothed subject height (0.0 before first detection)
    pub smoothed_height: f64,
    /// Configured target height ratio
    pub target_height_ratio: f64,
    /// Zoom factor, `1 / crop_scale` (1.0 = no zoom)
    pub zoom_factor: f64,
}

impl fmt::Display for FramingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locked_track_id {
            Some(id) => write!(f, "ID:{}", id)?,
            None => write!(f, "ID:none")?,
        }
        write!(
            f,
            " | orig h: {:.3} | crop h: {:.3} (target: {:.2}) | zoom: {:.2}x",
            self.raw_height, self.crop_height, self.target_height_ratio, self.zoom_factor
        )
    }
}

/// Result of advancing the session by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// New crop rectangle in full-frame-normalized coordinates
    pub crop: NormalizedRect,
    /// Status summary for this frame
    pub status: FramingStatus,
}

/// Owns the per-stream mutable state: one [`AutoFramingController`] and the
/// locked track id.
///
/// Create one session per video stream and feed frames strictly in order;
/// the crop returned for frame `n` is the geometry frame `n+1`'s detection
/// is re-expressed against. Concurrent calls to [`advance`](Self::advance)
/// on one session are not supported — serialize externally if the upstream
/// pipeline is parallel.
#[derive(Debug)]
pub struct FramingSession {
    config: FramingConfig,
    acquisition: TargetAcquisition,
    controller: AutoFramingController,
    locked_track_id: Option<u32>,
}

impl FramingSession {
    /// Create a session after validating the configuration.
    pub fn new(config: FramingConfig) -> FramingResult<Self> {
        config.validate()?;
        info!(
            target_height_ratio = config.target_height_ratio,
            zoom_gain = config.zoom_gain,
            "framing session started"
        );
        Ok(Self {
            acquisition: TargetAcquisition::new(config.min_confidence),
            controller: AutoFramingController::new(config.clone()),
            locked_track_id: None,
            config,
        })
    }

    /// Advance by one frame.
    ///
    /// Selects a candidate, re-expresses it inside the current crop, and
    /// runs the controller. Empty or unusable frames freeze the camera.
    pub fn advance(&mut self, detections: &[CandidateDetection], dt: f64) -> FrameUpdate {
        match self.acquisition.select(detections, self.locked_track_id) {
            Some(selection) => {
                if let Some(id) = selection.track_id {
                    if self.locked_track_id != Some(id) {
                        debug!(
                            from = ?self.locked_track_id,
                            to = id,
                            "locking onto track"
                        );
                    }
                    self.locked_track_id = Some(id);
                }

                let in_crop = to_crop_space(&selection.rect, &self.controller.geometry());
                let crop = self.controller.update(in_crop, dt);

                FrameUpdate {
                    crop,
                    status: self.status(selection.rect.height(), in_crop.height()),
                }
            }
            None => {
                // No usable detection: freeze via a degenerate rect and
                // dt = 0 so no smoother or geometry state moves.
                let crop = self.controller.update(NormalizedRect::zero(), 0.0);
                FrameUpdate {
                    crop,
                    status: self.status(0.0, 0.0),
                }
            }
        }
    }

    /// Drop the lock and restore the controller's cold state.
    pub fn reset(&mut self) {
        self.locked_track_id = None;
        self.controller.reset();
    }

    /// Track id currently locked, if any.
    pub fn locked_track_id(&self) -> Option<u32> {
        self.locked_track_id
    }

    /// The underlying controller (read access for status/inspection).
    pub fn controller(&self) -> &AutoFramingController {
        &self.controller
    }

    fn status(&self, raw_height: f64, crop_height: f64) -> FramingStatus {
        FramingStatus {
            locked_track_id: self.locked_track_id,
            raw_height,
            crop_height,
            smoothed_height: self.controller.smoothed_height().unwrap_or(0.0),
            target_height_ratio: self.config.target_height_ratio,
            zoom_factor: 1.0 / self.controller.geometry().scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcam_models::dt_for_fps;

    fn candidate(cx: f64, cy: f64, scale: f64, track_id: Option<u32>) -> CandidateDetection {
        CandidateDetection::new(
            NormalizedRect::from_center_and_scale(cx, cy, scale),
            track_id,
            0.9,
        )
    }

    #[test]
    fn test_lock_latches_on_first_selection() {
        let mut session = FramingSession::new(FramingConfig::default()).unwrap();
        let dt = dt_for_fps(30.0);

        session.advance(&[candidate(0.5, 0.5, 0.2, Some(3))], dt);
        assert_eq!(session.locked_track_id(), Some(3));

        // The locked id keeps winning even when another candidate is
        // closer to center.
        let update = session.advance(
            &[
                candidate(0.5, 0.5, 0.2, Some(9)),
                candidate(0.8, 0.8, 0.2, Some(3)),
            ],
            dt,
        );
        assert_eq!(update.status.locked_track_id, Some(3));
    }

    #[test]
    fn test_lost_lock_hands_off_silently() {
        let mut session = FramingSession::new(FramingConfig::default()).unwrap();
        let dt = dt_for_fps(30.0);

        session.advance(&[candidate(0.5, 0.5, 0.2, Some(3))], dt);
        session.advance(&[candidate(0.45, 0.5, 0.2, Some(8))], dt);

        assert_eq!(session.locked_track_id(), Some(8));
    }

    #[test]
    fn test_empty_frame_freezes_geometry() {
        let mut session = FramingSession::new(FramingConfig::default()).unwrap();
        let dt = dt_for_fps(30.0);

        session.advance(&[candidate(0.4, 0.6, 0.1, Some(1))], dt);
        let before = session.controller().geometry();

        let update = session.advance(&[], dt);
        assert_eq!(session.controller().geometry(), before);
        assert_eq!(update.crop, session.controller().crop_rect());
        assert_eq!(update.status.raw_height, 0.0);
        assert_eq!(update.status.crop_height, 0.0);

        // Lock survives the dropout for re-acquisition by id
        assert_eq!(session.locked_track_id(), Some(1));
    }

    #[test]
    fn test_feedback_loop_closes_over_consecutive_frames() {
        let mut session = FramingSession::new(FramingConfig::default()).unwrap();
        let dt = dt_for_fps(30.0);

        // Small centered subject: the camera zooms in over time.
        let subject = candidate(0.5, 0.5, 0.05, Some(1));
        let mut last_scale = session.controller().geometry().scale;
        for _ in 0..30 {
            let update = session.advance(&[subject], dt);
            let scale = session.controller().geometry().scale;
            assert!(scale <= last_scale);
            assert!((update.crop.width() - scale).abs() < 1e-9);
            last_scale = scale;
        }
        assert!(last_scale < 0.9);

        // As the crop tightens, the crop-space height grows past the raw
        // height: the feedback transform is being applied.
        let update = session.advance(&[subject], dt);
        assert!(update.status.crop_height > update.status.raw_height);
    }

    #[test]
    fn test_status_line_format() {
        let status = FramingStatus {
            locked_track_id: Some(12),
            raw_height: 0.3,
            crop_height: 0.31,
            smoothed_height: 0.29,
            target_height_ratio: 0.15,
            zoom_factor: 1.82,
        };
        assert_eq!(
            status.to_string(),
            "ID:12 | orig h: 0.300 | crop h: 0.310 (target: 0.15) | zoom: 1.82x"
        );

        let unlocked = FramingStatus {
            locked_track_id: None,
            ..status
        };
        assert!(unlocked.to_string().starts_with("ID:none |"));
    }

    #[test]
    fn test_invalid_config_rejected_at_session_start() {
        let config = FramingConfig {
            fast_alpha: 2.0,
            ..Default::default()
        };
        assert!(FramingSession::new(config).is_err());
    }

    #[test]
    fn test_reset_clears_lock_and_geometry() {
        let mut session = FramingSession::new(FramingConfig::default()).unwrap();
        session.advance(&[candidate(0.3, 0.3, 0.05, Some(5))], 0.033);
        session.reset();

        assert_eq!(session.locked_track_id(), None);
        assert_eq!(session.controller().geometry().scale, 1.0);
    }
}
