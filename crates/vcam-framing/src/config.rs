//! Configuration for the auto-framing controller.

use serde::{Deserialize, Serialize};

use crate::error::{FramingError, FramingResult};

/// Tunable parameters for the framing pipeline.
///
/// All parameters have defaults matching the reference tuning for sports
/// footage; presets cover the common alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramingConfig {
    // === Zoom Law ===
    /// Fraction of the crop window the subject's bounding box should occupy
    /// vertically. Default: 0.15
    pub target_height_ratio: f64,

    /// Gain of the explicit-Euler zoom integrator. Default: 10.0
    pub zoom_gain: f64,

    /// Tightest allowed crop scale (smaller = more zoomed in). Default: 0.05
    pub min_scale: f64,

    /// Widest allowed crop scale (1.0 = full frame). Default: 1.0
    pub max_scale: f64,

    // === Input Smoothing ===
    /// EMA alpha for per-frame detection smoothing. Default: 0.2
    pub fast_alpha: f64,

    /// EMA alpha for the long-horizon "sticky framing intent" signal.
    /// Default: 0.05
    pub intent_alpha: f64,

    // === Pan Control ===
    /// Proportional gain of the pan controllers. Default: 1.0
    ///
    /// The active pan law assigns the smoothed subject center directly and
    /// bypasses the P/D controllers; the gains are configured but unused.
    pub pan_kp: f64,

    /// Derivative gain of the pan controllers. Default: 0.5
    pub pan_kd: f64,

    // === Motion Limits ===
    /// Maximum zoom-scale change per second. Default: 5.0
    ///
    /// Declared but not enforced by the active update path.
    pub max_zoom_speed: f64,

    /// Maximum pan change per second. Default: 5.0
    ///
    /// Declared but not enforced by the active update path.
    pub max_pan_speed: f64,

    // === Target Acquisition ===
    /// Candidates below this confidence are ignored. Default: 0.3
    pub min_confidence: f64,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            // Zoom law
            target_height_ratio: 0.15,
            zoom_gain: 10.0,
            min_scale: 0.05,
            max_scale: 1.0,

            // Input smoothing
            fast_alpha: 0.2,
            intent_alpha: 0.05,

            // Pan control
            pan_kp: 1.0,
            pan_kd: 0.5,

            // Motion limits
            max_zoom_speed: 5.0,
            max_pan_speed: 5.0,

            // Acquisition
            min_confidence: 0.3,
        }
    }
}

impl FramingConfig {
    /// Tuning for broadcast-style coverage: wider framing, slower response.
    pub fn broadcast() -> Self {
        Self {
            target_height_ratio: 0.20,
            fast_alpha: 0.12,
            zoom_gain: 6.0,
            ..Default::default()
        }
    }

    /// Tuning for fast action: tighter framing, snappier smoothing.
    pub fn action() -> Self {
        Self {
            target_height_ratio: 0.12,
            fast_alpha: 0.3,
            zoom_gain: 12.0,
            ..Default::default()
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> FramingResult<()> {
        if !(self.fast_alpha > 0.0 && self.fast_alpha <= 1.0) {
            return Err(FramingError::invalid_config(format!(
                "fast_alpha must be in (0, 1], got {}",
                self.fast_alpha
            )));
        }
        if !(self.intent_alpha > 0.0 && self.intent_alpha <= 1.0) {
            return Err(FramingError::invalid_config(format!(
                "intent_alpha must be in (0, 1], got {}",
                self.intent_alpha
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale && self.max_scale <= 1.0) {
            return Err(FramingError::invalid_config(format!(
                "scale bounds must satisfy 0 < min <= max <= 1, got [{}, {}]",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.target_height_ratio > 0.0 && self.target_height_ratio < 1.0) {
            return Err(FramingError::invalid_config(format!(
                "target_height_ratio must be in (0, 1), got {}",
                self.target_height_ratio
            )));
        }
        if self.zoom_gain < 0.0
            || self.max_zoom_speed < 0.0
            || self.max_pan_speed < 0.0
            || self.pan_kp < 0.0
            || self.pan_kd < 0.0
        {
            return Err(FramingError::invalid_config(
                "gains and speed limits must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(FramingError::invalid_config(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}
