//! Integer count-up animation for statistic counters.

use super::easing::Easing;
use super::error::{non_negative, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    target: u64,
    duration: f64,
    easing: Easing,
    elapsed: f64,
    displayed: u64,
}

impl CounterTween {
    /// Counter from 0 to `target` over `duration` seconds.
    pub fn new(target: u64, duration: f64, easing: Easing) -> Result<Self> {
        Ok(Self {
            target,
            duration: non_negative("duration", duration)?,
            easing,
            elapsed: 0.0,
            displayed: 0,
        })
    }

    /// Counter that shows `target` on its first frame.
    pub const fn instant(target: u64) -> Self {
        Self { target, duration: 0.0, easing: Easing::Linear, elapsed: 0.0, displayed: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.displayed == self.target
    }

    /// Back to 0 for a fresh run.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.displayed = 0;
    }

    /// Value the curve gives at `elapsed` seconds, clamped to `0..=target`.
    pub fn value_at(&self, elapsed: f64) -> u64 {
        if self.target == 0 {
            return 0;
        }
        if self.duration == 0.0 || elapsed >= self.duration {
            return self.target;
        }
        let t = if elapsed.is_finite() { elapsed / self.duration } else { 0.0 };
        let eased = self.easing.evaluate(t).clamp(0.0, 1.0);
        let value = (eased * self.target as f64).round() as u64;
        value.min(self.target)
    }

    /// Advances by `dt` seconds and returns the new displayed value. The
    /// displayed value never decreases, so curves that dip cannot make the
    /// counter tick backwards. Returns `None` once the target was already
    /// shown, so callers stop scheduling frames.
    pub fn advance(&mut self, dt: f64) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.displayed = self.displayed.max(self.value_at(self.elapsed));
        Some(self.displayed)
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn zero_target_shows_zero_immediately() {
        let mut tween = CounterTween::new(0, 2.0, Easing::EaseOut).unwrap();
        assert!(tween.is_finished());
        assert_eq!(tween.advance(FRAME), None);
        assert_eq!(tween.value_at(0.0), 0);
        assert_eq!(tween.value_at(100.0), 0);
    }

    #[test]
    fn counts_up_monotonically_and_lands_exactly() {
        for target in [1, 7, 20, 100, 1500, 1_000_000] {
            let mut tween = CounterTween::new(target, 2.0, Easing::EaseOut).unwrap();
            let mut last = 0;
            let mut elapsed = 0.0;
            while let Some(value) = tween.advance(FRAME) {
                elapsed += FRAME;
                assert!(value >= last, "{target}: {value} < {last}");
                assert!(value <= target);
                last = value;
                assert!(elapsed < 2.0 + 2.0 * FRAME, "{target} still running at {elapsed}");
            }
            assert_eq!(last, target);
            assert!(tween.is_finished());
        }
    }

    #[test]
    fn reaches_target_at_duration() {
        let tween = CounterTween::new(250, 1.5, Easing::SOFT_OUT).unwrap();
        assert_eq!(tween.value_at(1.5), 250);
        assert_eq!(tween.value_at(9.0), 250);
        assert!(tween.value_at(0.75) < 250);
    }

    #[test]
    fn stops_after_target() {
        let mut tween = CounterTween::new(10, 0.1, Easing::Linear).unwrap();
        assert_eq!(tween.advance(1.0), Some(10));
        assert_eq!(tween.advance(1.0), None);
        assert!(tween.is_finished());
    }

    #[test]
    fn restart_begins_from_zero() {
        let mut tween = CounterTween::new(100, 1.0, Easing::Linear).unwrap();
        assert_eq!(tween.advance(0.5), Some(50));
        tween.restart();
        assert!(!tween.is_finished());
        assert_eq!(tween.advance(0.1), Some(10));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut tween = CounterTween::new(42, 0.0, Easing::EaseOut).unwrap();
        assert_eq!(tween.advance(0.0), Some(42));
    }

    #[test]
    fn instant_counter_lands_on_first_frame() {
        let mut tween = CounterTween::instant(1500);
        assert_eq!(tween.advance(0.0), Some(1500));
        assert_eq!(tween.advance(FRAME), None);
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(CounterTween::new(5, -1.0, Easing::Linear).is_err());
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
