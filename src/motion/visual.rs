//! The animatable presentation record and its CSS rendering.

use std::fmt::Write;

use super::easing::Easing;
use super::error::{non_negative, Result};

/// Snapshot of every property the motion layer animates. Units: pixels for
/// translation and blur, degrees for rotation, unitless for opacity/scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub blur: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        blur: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub const HIDDEN: VisualState = VisualState { opacity: 0.0, ..Self::REST };

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn with_scale_x(self, scale_x: f64) -> Self {
        Self { scale_x, ..self }
    }

    pub const fn with_blur(self, blur: f64) -> Self {
        Self { blur, ..self }
    }

    pub const fn with_rotation(self, rotate_x: f64, rotate_y: f64) -> Self {
        Self { rotate_x, rotate_y, ..self }
    }

    /// Inline declarations for this state. Identity transforms and a zero
    /// blur are omitted so resting elements carry no compositing hints.
    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", round3(self.opacity.clamp(0.0, 1.0)));

        let mut transform = String::new();
        if self.x != 0.0 || self.y != 0.0 {
            let _ = write!(transform, "translate3d({}px, {}px, 0) ", round3(self.x), round3(self.y));
        }
        if self.scale != 1.0 {
            let _ = write!(transform, "scale({}) ", round3(self.scale));
        }
        if self.scale_x != 1.0 {
            let _ = write!(transform, "scaleX({}) ", round3(self.scale_x));
        }
        if self.rotate_x != 0.0 {
            let _ = write!(transform, "rotateX({}deg) ", round3(self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            let _ = write!(transform, "rotateY({}deg) ", round3(self.rotate_y));
        }
        if !transform.is_empty() {
            let _ = write!(css, " transform: {};", transform.trim_end());
        }
        if self.blur > 0.0 {
            let _ = write!(css, " filter: blur({}px);", round3(self.blur));
        }
        css
    }
}

/// How a reveal moves between its two snapshots. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    /// Extra delay per sibling index for staggered groups.
    pub stagger: f64,
}

impl Transition {
    pub fn new(duration: f64, delay: f64, easing: Easing) -> Result<Self> {
        Ok(Self {
            duration: non_negative("duration", duration)?,
            delay: non_negative("delay", delay)?,
            easing,
            stagger: 0.0,
        })
    }

    pub fn with_stagger(self, stagger: f64) -> Result<Self> {
        Ok(Self { stagger: non_negative("stagger", stagger)?, ..self })
    }

    pub fn with_delay(self, delay: f64) -> Result<Self> {
        Ok(Self { delay: non_negative("delay", delay)?, ..self })
    }

    /// Effective delay for the `index`-th child of a staggered group.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// CSS `transition` declaration covering every animated property.
    pub fn to_css(&self, index: usize) -> String {
        let timing = format!(
            "{}s {} {}s",
            round3(self.duration),
            self.easing.to_css(),
            round3(self.delay_for(index))
        );
        format!("transition: opacity {timing}, transform {timing}, filter {timing};")
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self { duration: 0.7, delay: 0.0, easing: Easing::SOFT_OUT, stagger: 0.0 }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::error::MotionError;

    #[test]
    fn resting_state_renders_only_opacity() {
        assert_eq!(VisualState::REST.to_css(), "opacity: 1;");
    }

    #[test]
    fn hidden_fade_up_renders_transform_and_blur() {
        let hidden = VisualState::HIDDEN.with_y(40.0).with_scale(0.9).with_blur(10.0);
        assert_eq!(
            hidden.to_css(),
            "opacity: 0; transform: translate3d(0px, 40px, 0) scale(0.9); filter: blur(10px);"
        );
    }

    #[test]
    fn opacity_is_clamped_when_rendered() {
        let over = VisualState::REST.with_opacity(1.4);
        assert_eq!(over.to_css(), "opacity: 1;");
    }

    #[test]
    fn stagger_adds_per_index_delay() {
        let t = Transition::new(0.5, 0.1, Easing::EaseOut)
            .and_then(|t| t.with_stagger(0.08))
            .unwrap();
        assert!((t.delay_for(0) - 0.1).abs() < 1e-12);
        assert!((t.delay_for(3) - 0.34).abs() < 1e-12);
        assert_eq!(
            t.to_css(2),
            "transition: opacity 0.5s ease-out 0.26s, transform 0.5s ease-out 0.26s, filter 0.5s ease-out 0.26s;"
        );
    }

    #[test]
    fn rejects_negative_timings() {
        assert!(matches!(
            Transition::new(-1.0, 0.0, Easing::Linear),
            Err(MotionError::Negative { field: "duration", .. })
        ));
        assert!(matches!(
            Transition::new(1.0, f64::INFINITY, Easing::Linear),
            Err(MotionError::NotFinite { field: "delay", .. })
        ));
    }
}
