//! Exponentially smoothed pointer velocity.
//!
//! Every drag move blends its instantaneous speed into a running estimate,
//! optionally damped (near scroll edges, for instance). The estimate never
//! leaves `[-max_velocity, max_velocity]`.

use crate::gesture_constants::{MIN_SAMPLE_INTERVAL_MS, VELOCITY_SMOOTHING};

/// Smoothed 1D velocity in units per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedVelocity {
    value: f32,
    last_position: f32,
    last_time_ms: f64,
    max_velocity: f32,
}

impl SmoothedVelocity {
    /// `max_velocity` is taken by magnitude; non-finite values collapse to zero.
    pub fn new(max_velocity: f32) -> Self {
        let max_velocity = if max_velocity.is_finite() {
            max_velocity.abs()
        } else {
            0.0
        };
        Self {
            value: 0.0,
            last_position: 0.0,
            last_time_ms: 0.0,
            max_velocity,
        }
    }

    /// Starts a new estimate from a resting pointer.
    pub fn seed(&mut self, position: f32, time_ms: f64) {
        self.value = 0.0;
        self.last_position = position;
        self.last_time_ms = time_ms;
    }

    /// Folds in a new sample and returns the updated estimate.
    ///
    /// `damping` scales the instantaneous velocity before blending.
    pub fn add_sample(&mut self, position: f32, time_ms: f64, damping: f32) -> f32 {
        let dt = (time_ms - self.last_time_ms).max(MIN_SAMPLE_INTERVAL_MS) as f32;
        let instantaneous = (position - self.last_position) / dt;
        let damped = instantaneous * damping;

        let blended = self.value * (1.0 - VELOCITY_SMOOTHING) + damped * VELOCITY_SMOOTHING;
        self.value = self.clamp(blended);

        self.last_position = position;
        self.last_time_ms = time_ms;
        self.value
    }

    /// Multiplies the estimate by `factor` (friction) and returns it.
    pub fn decay(&mut self, factor: f32) -> f32 {
        self.value = self.clamp(self.value * factor);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(-self.max_velocity, self.max_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_tracker_is_at_rest() {
        let mut velocity = SmoothedVelocity::new(3.2);
        velocity.seed(100.0, 50.0);
        assert_eq!(velocity.value(), 0.0);
    }

    #[test]
    fn blends_twenty_percent_of_new_sample() {
        let mut velocity = SmoothedVelocity::new(10.0);
        velocity.seed(0.0, 0.0);
        // 10 px over 10 ms = 1 px/ms, blended 0.2
        let value = velocity.add_sample(10.0, 10.0, 1.0);
        assert!((value - 0.2).abs() < 1e-6);
        // second identical sample: 0.2 * 0.8 + 1.0 * 0.2 = 0.36
        let value = velocity.add_sample(20.0, 20.0, 1.0);
        assert!((value - 0.36).abs() < 1e-6);
    }

    #[test]
    fn damping_scales_instantaneous_velocity() {
        let mut velocity = SmoothedVelocity::new(10.0);
        velocity.seed(0.0, 0.0);
        let value = velocity.add_sample(-10.0, 10.0, 0.5);
        assert!((value + 0.1).abs() < 1e-6);
    }

    #[test]
    fn same_millisecond_samples_use_minimum_interval() {
        let mut velocity = SmoothedVelocity::new(100.0);
        velocity.seed(0.0, 5.0);
        let value = velocity.add_sample(4.0, 5.0, 1.0);
        assert!(value.is_finite());
        assert!((value - 0.8).abs() < 1e-6);
    }

    #[test]
    fn never_exceeds_max_velocity() {
        let mut velocity = SmoothedVelocity::new(3.2);
        velocity.seed(0.0, 0.0);
        let mut x = 0.0;
        for step in 1..50 {
            x -= 500.0;
            let value = velocity.add_sample(x, step as f64, 1.0);
            assert!(value.abs() <= 3.2);
        }
        assert_eq!(velocity.value(), -3.2);
    }

    #[test]
    fn decay_shrinks_toward_zero() {
        let mut velocity = SmoothedVelocity::new(3.2);
        velocity.seed(0.0, 0.0);
        velocity.add_sample(100.0, 10.0, 1.0);
        let before = velocity.value();
        let after = velocity.decay(0.5);
        assert!((after - before * 0.5).abs() < 1e-6);
        velocity.reset();
        assert_eq!(velocity.value(), 0.0);
    }
}
