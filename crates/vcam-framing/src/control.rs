//! Proportional/derivative control over a scalar error signal.

/// P/D controller with backward-difference derivative.
///
/// Retained as an independently usable unit; the framing controller's pan
/// law currently bypasses it in favor of direct proportional tracking.
#[derive(Debug, Clone)]
pub struct PdController {
    kp: f64,
    kd: f64,
    last_error: f64,
}

impl PdController {
    /// Create a controller with proportional gain `kp` and derivative
    /// gain `kd`.
    pub fn new(kp: f64, kd: f64) -> Self {
        Self {
            kp,
            kd,
            last_error: 0.0,
        }
    }

    /// Advance the controller by one tick.
    ///
    /// `dt <= 0` returns `0.0` and leaves `last_error` untouched, so a
    /// degenerate tick cannot corrupt the next derivative.
    pub fn update(&mut self, error: f64, dt: f64) -> f64 {
        if dt <= 0.0 {
            return 0.0;
        }
        let derivative = (error - self.last_error) / dt;
        self.last_error = error;
        self.kp * error + self.kd * derivative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_term() {
        let mut pd = PdController::new(2.0, 0.0);
        assert!((pd.update(0.5, 0.1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_term() {
        let mut pd = PdController::new(0.0, 1.0);
        pd.update(0.0, 0.1);

        // (0.2 - 0.0) / 0.1 = 2.0
        assert!((pd.update(0.2, 0.1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_dt_returns_zero_and_preserves_state() {
        let mut pd = PdController::new(1.0, 1.0);
        pd.update(0.1, 0.1);

        assert_eq!(pd.update(5.0, 0.0), 0.0);
        assert_eq!(pd.update(5.0, -1.0), 0.0);

        // The next real tick derives against the pre-skip error, as if the
        // skipped calls never happened.
        let output = pd.update(0.2, 0.1);
        let expected = 1.0 * 0.2 + 1.0 * (0.2 - 0.1) / 0.1;
        assert!((output - expected).abs() < 1e-12);
    }
}
