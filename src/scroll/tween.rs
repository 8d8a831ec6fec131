//! Time-parameterized interpolation between two scroll offsets.
//!
//! A tween is sampled with an explicit timestamp rather than reading a clock,
//! so the animation loop and the tests share the same code path.

use crate::scroll::easing::Easing;

#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// Position at `now_ms` and whether the tween has finished.
    ///
    /// A zero-duration tween is complete at its target immediately; this is
    /// what an instantaneous (non-interpolated) scroll uses.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let tween = Tween::new(100.0, 500.0, 1000.0, 200.0, Easing::Linear);
        let (start, done) = tween.sample(1000.0);
        assert_eq!(start, 100.0);
        assert!(!done);
        let (end, done) = tween.sample(1200.0);
        assert_eq!(end, 500.0);
        assert!(done);
    }

    #[test]
    fn midpoint_linear() {
        let tween = Tween::new(0.0, 100.0, 0.0, 1000.0, Easing::Linear);
        let (pos, done) = tween.sample(500.0);
        assert!((pos - 50.0).abs() < 1e-9);
        assert!(!done);
    }

    #[test]
    fn time_before_start_holds_origin() {
        let tween = Tween::new(40.0, 90.0, 1000.0, 300.0, Easing::OutExpo);
        let (pos, done) = tween.sample(500.0);
        assert_eq!(pos, 40.0);
        assert!(!done);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new(300.0, 0.0, 50.0, 0.0, Easing::OutExpo);
        let (pos, done) = tween.sample(50.0);
        assert_eq!(pos, 0.0);
        assert!(done);
    }

    #[test]
    fn overshoot_time_clamps_to_target() {
        let tween = Tween::new(0.0, 100.0, 0.0, 100.0, Easing::OutQuint);
        let (pos, done) = tween.sample(10_000.0);
        assert_eq!(pos, 100.0);
        assert!(done);
    }
}
