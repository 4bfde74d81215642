//! Damped spring used to smooth values that chase a moving target (pointer
//! offsets, the page progress bar).

use log::warn;

use super::error::{positive, MotionError, Result};

/// Springs below this damping ratio overshoot visibly and are rejected.
pub const MIN_DAMPING_RATIO: f64 = 0.9;

/// Largest integration step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Longest frame gap integrated in one go; longer gaps (a backgrounded tab)
/// are treated as this long.
const MAX_FRAME: f64 = 0.1;

/// Critically damped stand-in for a preset that fails validation.
const FALLBACK: SpringConfig = SpringConfig::raw(170.0, 26.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    stiffness: f64,
    damping: f64,
    mass: f64,
    /// Seconds after a target change by which the spring is guaranteed to
    /// sit exactly on its target.
    settle_time: f64,
    rest_delta: f64,
    rest_speed: f64,
}

impl SpringConfig {
    /// Magnetic buttons.
    pub fn magnetic() -> Self {
        Self::preset("magnetic", SpringConfig::new(150.0, 24.0))
    }

    /// 3D tilt cards.
    pub fn tilt() -> Self {
        Self::preset("tilt", SpringConfig::new(300.0, 35.0))
    }

    /// Scroll progress bar. It is retargeted on every scroll event, so it
    /// settles sooner than the pointer springs.
    pub fn progress() -> Self {
        Self::preset("progress", SpringConfig::new(100.0, 20.0).and_then(|c| c.with_settle_time(0.8)))
    }

    fn preset(name: &str, config: Result<Self>) -> Self {
        config.unwrap_or_else(|err| {
            warn!("Spring preset {} rejected ({}), using a critically damped spring", name, err);
            FALLBACK
        })
    }

    const fn raw(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            settle_time: 1.2,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub fn new(stiffness: f64, damping: f64) -> Result<Self> {
        Self::raw(stiffness, damping).with_mass(1.0)
    }

    pub fn with_mass(self, mass: f64) -> Result<Self> {
        let config = Self {
            stiffness: positive("stiffness", self.stiffness)?,
            damping: positive("damping", self.damping)?,
            mass: positive("mass", mass)?,
            ..self
        };
        let ratio = config.damping_ratio();
        if ratio < MIN_DAMPING_RATIO {
            return Err(MotionError::Underdamped { ratio, min: MIN_DAMPING_RATIO });
        }
        Ok(config)
    }

    pub fn with_settle_time(self, settle_time: f64) -> Result<Self> {
        Ok(Self { settle_time: positive("settle_time", settle_time)?, ..self })
    }

    /// `c / (2 * sqrt(k * m))`; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    since_retarget: f64,
    config: SpringConfig,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self { value, velocity: 0.0, target: value, since_retarget: 0.0, config }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.since_retarget = 0.0;
    }

    /// Advances by `dt` seconds. Returns whether the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return false;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.since_retarget += dt;

        let mut remaining = dt.min(MAX_FRAME);
        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let accel = (-stiffness * (self.value - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        let resting = (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed;
        if resting || self.since_retarget >= self.config.settle_time {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn presets_are_near_critical() {
        for config in [SpringConfig::magnetic(), SpringConfig::tilt(), SpringConfig::progress()] {
            assert!(config.damping_ratio() >= MIN_DAMPING_RATIO);
            assert_ne!(config, FALLBACK);
        }
        assert_eq!(SpringConfig::progress().settle_time, 0.8);
    }

    #[test]
    fn rejected_preset_falls_back_to_critical() {
        let config = SpringConfig::preset("wobbly", SpringConfig::new(150.0, 10.0));
        assert_eq!(config, FALLBACK);
        assert!(FALLBACK.damping_ratio() >= MIN_DAMPING_RATIO);
        assert!(matches!(
            SpringConfig::new(100.0, 20.0).and_then(|c| c.with_settle_time(0.0)),
            Err(MotionError::NotPositive { .. })
        ));
    }

    #[test]
    fn rejects_bouncy_springs() {
        // stiffness 150 / damping 15 would wobble
        assert!(matches!(SpringConfig::new(150.0, 15.0), Err(MotionError::Underdamped { .. })));
        assert!(SpringConfig::new(0.0, 10.0).is_err());
        assert!(SpringConfig::new(100.0, 20.0).unwrap().with_mass(-1.0).is_err());
        assert!(SpringConfig::new(100.0, 20.0).is_ok());
    }

    #[test]
    fn relaxes_without_overshoot() {
        let mut spring = Spring::new(40.0, SpringConfig::magnetic());
        spring.set_target(0.0);
        let mut frames = 0;
        while spring.step(FRAME) {
            assert!(spring.value() > -0.01, "overshot to {}", spring.value());
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn settles_within_configured_time() {
        let config = SpringConfig::tilt().with_settle_time(0.5).unwrap();
        let mut spring = Spring::new(0.0, config);
        spring.set_target(4.0);
        let mut elapsed = 0.0;
        while spring.step(FRAME) {
            elapsed += FRAME;
        }
        assert!(elapsed <= config.settle_time + FRAME);
        assert_eq!(spring.value(), 4.0);
    }

    #[test]
    fn retargeting_restarts_the_settle_clock() {
        let mut spring = Spring::new(0.0, SpringConfig::progress());
        spring.set_target(1.0);
        for _ in 0..10 {
            spring.step(FRAME);
        }
        let partway = spring.value();
        assert!(partway > 0.0 && partway < 1.0);
        spring.set_target(0.0);
        assert!(spring.step(FRAME));
        assert!(spring.value() < partway + 0.1);
    }

    #[test]
    fn resting_spring_does_not_move() {
        let mut spring = Spring::new(3.0, SpringConfig::magnetic());
        assert!(!spring.step(FRAME));
        spring.set_target(f64::NAN);
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 3.0);
    }

    #[test]
    fn huge_frame_gaps_stay_stable() {
        let mut spring = Spring::new(100.0, SpringConfig::tilt());
        spring.set_target(0.0);
        spring.step(30.0);
        assert_eq!(spring.value(), 0.0);
    }
}
