//! Scalar smoothing primitives for the virtual camera.

/// Single-value exponential moving average with lazy first-sample
/// initialization.
///
/// The first sample after construction or [`reset`](Self::reset) is returned
/// unchanged and seeds the filter, avoiding a cold-start transient toward
/// zero.
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f64,
    value: Option<f64>,
}

impl ExponentialSmoother {
    /// Create a smoother with the given blend factor, `alpha` in `(0, 1]`.
    pub fn new(alpha: f64) -> Self {
        Self { alpha, value: None }
    }

    /// Feed one sample and return the smoothed value.
    pub fn filter(&mut self, input: f64) -> f64 {
        let new_value = match self.value {
            None => input,
            Some(value) => self.alpha * input + (1.0 - self.alpha) * value,
        };
        self.value = Some(new_value);
        new_value
    }

    /// Clear state; the next sample behaves as a first sample.
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Last smoothed value, if any sample has been seen.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Clamps a proposed value change to a maximum rate per second.
///
/// Independent primitive; the framing controller's observed behavior applies
/// no rate limiting, so nothing in the active update path calls this.
#[derive(Debug, Clone, Copy)]
pub struct RateLimiter {
    max_rate: f64,
}

impl RateLimiter {
    /// Create a limiter with the given maximum rate (units per second).
    pub fn new(max_rate: f64) -> Self {
        Self { max_rate }
    }

    /// Limit the step from `previous` toward `proposed` over `dt` seconds.
    ///
    /// `dt <= 0` holds the previous value.
    pub fn limit(&self, previous: f64, proposed: f64, dt: f64) -> f64 {
        if dt <= 0.0 {
            return previous;
        }
        let max_step = self.max_rate * dt;
        previous + (proposed - previous).clamp(-max_step, max_step)
    }
}
