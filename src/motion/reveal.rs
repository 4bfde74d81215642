//! Visibility-triggered reveals: the per-element visibility latch, the viewport
//! margin that decides what counts as "visible", and the named presets the
//! themes pick from.

use super::easing::Easing;
use super::error::{finite, Result};
use super::geometry::Rect;
use super::visual::{Transition, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityMode {
    /// Reveal the first time the element is seen and stay revealed.
    #[default]
    Once,
    /// Follow the element in and out of the viewport.
    Repeat,
}

/// Visibility record for one mounted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    has_been_visible: bool,
    is_currently_visible: bool,
}

impl VisibilityState {
    /// Feeds one intersection observation. `has_been_visible` only ever goes
    /// from false to true.
    pub fn observe(&mut self, intersecting: bool) {
        self.is_currently_visible = intersecting;
        self.has_been_visible |= intersecting;
    }

    pub fn signal(&self, mode: VisibilityMode) -> bool {
        match mode {
            VisibilityMode::Once => self.has_been_visible,
            VisibilityMode::Repeat => self.is_currently_visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarginUnit {
    Px,
    Percent,
}

/// Uniform root margin around the viewport. Negative values shrink the
/// detection box so elements reveal only once they are well inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    value: f64,
    unit: MarginUnit,
}

impl Default for Margin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Margin {
    pub const ZERO: Margin = Margin { value: 0.0, unit: MarginUnit::Px };

    pub fn px(value: f64) -> Result<Self> {
        Ok(Self { value: finite("margin", value)?, unit: MarginUnit::Px })
    }

    const fn raw_px(value: f64) -> Self {
        Self { value, unit: MarginUnit::Px }
    }

    const fn raw_percent(value: f64) -> Self {
        Self { value, unit: MarginUnit::Percent }
    }

    /// `rootMargin` string for `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        match self.unit {
            MarginUnit::Px => format!("{}px", self.value),
            MarginUnit::Percent => format!("{}%", self.value),
        }
    }

    fn resolve(&self, extent: f64) -> f64 {
        match self.unit {
            MarginUnit::Px => self.value,
            MarginUnit::Percent => extent * self.value / 100.0,
        }
    }

    /// Whether `element` overlaps the viewport grown (or shrunk) by this
    /// margin. Mirrors the observer's zero-threshold rule so a synchronous
    /// check on mount agrees with the first observer callback.
    pub fn intersects(&self, element: &Rect, viewport_width: f64, viewport_height: f64) -> bool {
        let dx = self.resolve(viewport_width);
        let dy = self.resolve(viewport_height);
        let (left, right) = (-dx, viewport_width + dx);
        let (top, bottom) = (-dy, viewport_height + dy);
        if right <= left || bottom <= top {
            return false;
        }
        element.right() >= left
            && element.left <= right
            && element.bottom() >= top
            && element.top <= bottom
    }
}

/// Everything a reveal needs: both snapshots, the timing and the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub hidden: VisualState,
    pub shown: VisualState,
    pub transition: Transition,
    pub mode: VisibilityMode,
    pub margin: Margin,
}

impl RevealConfig {
    pub const fn new(hidden: VisualState, shown: VisualState, transition: Transition) -> Self {
        Self {
            hidden,
            shown,
            transition,
            mode: VisibilityMode::Once,
            margin: Margin::raw_px(-80.0),
        }
    }

    pub const fn with_margin(self, margin: Margin) -> Self {
        Self { margin, ..self }
    }

    pub fn with_delay(self, delay: f64) -> Result<Self> {
        Ok(Self { transition: self.transition.with_delay(delay)?, ..self })
    }

    pub fn with_stagger(self, stagger: f64) -> Result<Self> {
        Ok(Self { transition: self.transition.with_stagger(stagger)?, ..self })
    }

    /// Inline style for the element (or the `index`-th staggered child).
    pub fn style(&self, visible: bool, index: usize) -> String {
        let state = if visible { self.shown } else { self.hidden };
        format!("{} {}", state.to_css(), self.transition.to_css(index))
    }
}

/// Named reveal looks shared by the themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPreset {
    FadeUp,
    FadeIn,
    SlideUp,
    SnapIn,
    FloatIn,
    Cinematic,
    BlurUp,
    SlideLeft,
}

impl RevealPreset {
    pub const fn config(self) -> RevealConfig {
        const fn timing(duration: f64, easing: Easing) -> Transition {
            Transition { duration, delay: 0.0, easing, stagger: 0.0 }
        }
        const EDITORIAL: Easing = Easing::CubicBezier { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 };

        let hidden = VisualState::HIDDEN;
        let rest = VisualState::REST;
        match self {
            Self::FadeUp => RevealConfig::new(hidden.with_y(32.0), rest, timing(0.7, Easing::SOFT_OUT)),
            Self::FadeIn => RevealConfig::new(hidden, rest, timing(0.8, EDITORIAL))
                .with_margin(Margin::raw_px(-100.0)),
            Self::SlideUp => RevealConfig::new(hidden.with_y(40.0), rest, timing(0.8, EDITORIAL))
                .with_margin(Margin::raw_px(-100.0)),
            Self::SnapIn => RevealConfig::new(hidden.with_y(20.0), rest, timing(0.4, Easing::STANDARD)),
            Self::FloatIn => RevealConfig::new(hidden.with_y(30.0), rest, timing(0.7, Easing::QUAD_OUT)),
            Self::Cinematic => RevealConfig::new(hidden.with_y(60.0), rest, timing(1.0, EDITORIAL))
                .with_margin(Margin::raw_percent(-20.0)),
            Self::BlurUp => RevealConfig::new(
                hidden.with_y(40.0).with_blur(10.0),
                rest,
                timing(0.9, Easing::SOFT_OUT),
            ),
            Self::SlideLeft => {
                RevealConfig::new(hidden.with_x(-40.0), rest, timing(0.5, Easing::STANDARD))
            }
        }
    }
}

/// Scale-and-blur entrance used for section labels.
pub const SCALE_BLUR: RevealConfig = RevealConfig::new(
    VisualState::HIDDEN.with_scale(0.9).with_blur(10.0),
    VisualState::REST,
    Transition { duration: 0.8, delay: 0.0, easing: Easing::SOFT_OUT, stagger: 0.0 },
)
.with_margin(Margin::raw_px(-100.0));

/// Faint horizontal rule drawn from the left.
pub const LINE: RevealConfig = RevealConfig::new(
    VisualState::REST.with_opacity(0.4).with_scale_x(0.0),
    VisualState::REST.with_opacity(0.4),
    Transition { duration: 1.2, delay: 0.0, easing: Easing::SOFT_OUT, stagger: 0.0 },
);
