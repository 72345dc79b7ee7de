//! The stateful auto-framing controller.

use tracing::debug;
use vcam_models::NormalizedRect;

use crate::config::FramingConfig;
use crate::control::PdController;
use crate::smoothing::ExponentialSmoother;

/// Crop geometry in full-frame-normalized units.
///
/// Invariant for every geometry the controller exposes:
/// `scale` is in `[min_scale, max_scale]` (both positive) and the centers
/// are in `[scale/2, 1 - scale/2]`, so the crop never exits the unit frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    /// Crop center x-coordinate
    pub center_x: f64,
    /// Crop center y-coordinate
    pub center_y: f64,
    /// Side length of the square crop (1.0 = full frame)
    pub scale: f64,
}

/// Evolves a persistent crop geometry from smoothed subject observations.
///
/// One instance per tracked stream. `update` must be called strictly in
/// frame order by a single writer; the returned rect is the geometry the
/// next frame's detection should be re-expressed against (see
/// [`crate::feedback::to_crop_space`]).
#[derive(Debug)]
pub struct AutoFramingController {
    config: FramingConfig,

    // Fast per-frame input smoothing
    height_smoother: ExponentialSmoother,
    center_x_smoother: ExponentialSmoother,
    center_y_smoother: ExponentialSmoother,

    // Sticky framing intent: long-horizon desired framing. Fed every active
    // update; the output geometry does not consume it.
    intent_x_smoother: ExponentialSmoother,
    intent_y_smoother: ExponentialSmoother,

    // Pan P/D pair, built with the configured gains. The pan law assigns the
    // smoothed center directly and never consults these.
    #[allow(dead_code)]
    pan_x_pid: PdController,
    #[allow(dead_code)]
    pan_y_pid: PdController,

    crop_center_x: f64,
    crop_center_y: f64,
    crop_scale: f64,
}

impl AutoFramingController {
    /// Create a controller at full-frame geometry.
    pub fn new(config: FramingConfig) -> Self {
        let geometry = CropGeometry {
            center_x: 0.5,
            center_y: 0.5,
            scale: config.max_scale,
        };
        Self::with_geometry(config, geometry)
    }

    /// Create a controller resuming from a known geometry.
    pub fn with_geometry(config: FramingConfig, geometry: CropGeometry) -> Self {
        Self {
            height_smoother: ExponentialSmoother::new(config.fast_alpha),
            center_x_smoother: ExponentialSmoother::new(config.fast_alpha),
            center_y_smoother: ExponentialSmoother::new(config.fast_alpha),
            intent_x_smoother: ExponentialSmoother::new(config.intent_alpha),
            intent_y_smoother: ExponentialSmoother::new(config.intent_alpha),
            pan_x_pid: PdController::new(config.pan_kp, config.pan_kd),
            pan_y_pid: PdController::new(config.pan_kp, config.pan_kd),
            crop_center_x: geometry.center_x,
            crop_center_y: geometry.center_y,
            crop_scale: geometry.scale,
            config,
        }
    }

    /// Advance the crop geometry by one frame.
    ///
    /// `input_rect` is the selected subject in the coordinate space of the
    /// current crop (see [`crate::feedback::to_crop_space`]). `dt <= 0`
    /// freezes: the current crop is returned unchanged and no state is
    /// mutated — the caller represents "no detection" as a zero rect with
    /// `dt = 0`.
    pub fn update(&mut self, input_rect: NormalizedRect, dt: f64) -> NormalizedRect {
        if dt <= 0.0 {
            return self.crop_rect();
        }

        // 1. Smooth the raw observation
        let smoothed_height = self.height_smoother.filter(input_rect.height());
        let smoothed_center_x = self.center_x_smoother.filter(input_rect.center_x());
        let smoothed_center_y = self.center_y_smoother.filter(input_rect.center_y());

        // 2. Sticky framing intent
        self.intent_x_smoother.filter(smoothed_center_x);
        self.intent_y_smoother.filter(smoothed_center_y);

        // 3. Zoom law. The input is already crop-relative, so smoothed
        // height IS the subject height inside the crop; no division by
        // crop_scale. Error above target widens the crop, below tightens.
        let zoom_error = self.config.target_height_ratio - smoothed_height;
        self.crop_scale += -zoom_error * self.config.zoom_gain * dt;

        let unclamped = self.crop_scale;
        self.crop_scale = self
            .crop_scale
            .clamp(self.config.min_scale, self.config.max_scale);
        if self.crop_scale != unclamped {
            debug!(
                scale = self.crop_scale,
                requested = unclamped,
                "crop scale clamped"
            );
        }

        // 4. Pan law: direct proportional tracking. The crop center follows
        // the smoothed subject center so the subject's relative on-screen
        // position matches its position in the un-zoomed frame.
        self.crop_center_x = smoothed_center_x;
        self.crop_center_y = smoothed_center_y;

        // 5. Keep the crop inside the unit frame
        let half = self.crop_scale / 2.0;
        self.crop_center_x = self.crop_center_x.clamp(half, 1.0 - half);
        self.crop_center_y = self.crop_center_y.clamp(half, 1.0 - half);

        self.crop_rect()
    }

    /// Restore full-frame geometry and clear every smoother.
    pub fn reset(&mut self) {
        self.crop_center_x = 0.5;
        self.crop_center_y = 0.5;
        self.crop_scale = self.config.max_scale;
        self.height_smoother.reset();
        self.center_x_smoother.reset();
        self.center_y_smoother.reset();
        self.intent_x_smoother.reset();
        self.intent_y_smoother.reset();
    }

    /// Current crop geometry.
    pub fn geometry(&self) -> CropGeometry {
        CropGeometry {
            center_x: self.crop_center_x,
            center_y: self.crop_center_y,
            scale: self.crop_scale,
        }
    }

    /// Current crop as a rectangle in full-frame-normalized coordinates.
    pub fn crop_rect(&self) -> NormalizedRect {
        NormalizedRect::from_center_and_scale(
            self.crop_center_x,
            self.crop_center_y,
            self.crop_scale,
        )
    }

    /// Last smoothed subject height, once any active update has run.
    pub fn smoothed_height(&self) -> Option<f64> {
        self.height_smoother.value()
    }

    /// Current sticky framing intent `(x, y)`, once any active update
    /// has run.
    pub fn framing_intent(&self) -> Option<(f64, f64)> {
        match (self.intent_x_smoother.value(), self.intent_y_smoother.value()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// The configuration this controller runs with.
    pub fn config(&self) -> &FramingConfig {
        &self.config
    }
}
