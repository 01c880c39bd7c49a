//! Eased numeric transitions for displayed values
//!
//! Purely cosmetic. Calculations never read from here.

use std::time::Duration;

pub const TRANSITION: Duration = Duration::from_millis(600);

/// Ease-out cubic: fast start, gentle landing
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A displayed number that glides toward its latest target.
///
/// Time is passed in as an offset from any fixed origin the caller picks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedNumber {
    from: f64,
    target: f64,
    started: Duration,
    duration: Duration,
}

impl AnimatedNumber {
    /// Starts at zero, the same as a freshly mounted counter
    pub fn new(target: f64, now: Duration) -> Self {
        Self {
            from: 0.0,
            target,
            started: now,
            duration: TRANSITION,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value to display at `now`
    pub fn sample(&self, now: Duration) -> f64 {
        self.from + (self.target - self.from) * ease_out_cubic(self.progress(now))
    }

    /// Point at a new target, continuing from whatever is on screen now
    pub fn retarget(&mut self, target: f64, now: Duration) {
        self.from = self.sample(now);
        self.target = target;
        self.started = now;
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn settles_on_target_after_transition() {
        let n = AnimatedNumber::new(100.0, ms(0));
        assert_eq!(n.sample(ms(0)), 0.0);
        assert!(!n.is_settled(ms(300)));
        assert_eq!(n.sample(ms(300)), 87.5);
        assert_eq!(n.sample(ms(600)), 100.0);
        assert_eq!(n.sample(ms(5_000)), 100.0);
        assert!(n.is_settled(ms(600)));
    }

    #[test]
    fn retarget_continues_from_displayed_value() {
        let mut n = AnimatedNumber::new(100.0, ms(0));
        n.retarget(0.0, ms(300));
        assert_eq!(n.sample(ms(300)), 87.5);
        assert_eq!(n.target(), 0.0);
        assert_eq!(n.sample(ms(900)), 0.0);
    }

    #[test]
    fn retargeting_twice_at_same_instant_is_stable() {
        let mut a = AnimatedNumber::new(50.0, ms(0));
        a.retarget(80.0, ms(200));
        let once = a;
        a.retarget(80.0, ms(200));
        assert_eq!(a, once);
    }
}
