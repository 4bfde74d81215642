//! Timing curves shared by reveals, tweens and the CSS transitions they emit.
//!
//! Curves are evaluated in Rust for frame-driven animations (counters) and
//! rendered to their CSS form for transition-driven ones (reveals), so both
//! paths read the same curve from a theme.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::Ease
    }
}

impl Easing {
    /// Long decelerating tail used by most reveals, `[0.22, 1, 0.36, 1]`.
    pub const SOFT_OUT: Easing = Easing::CubicBezier { x1: 0.22, y1: 1.0, x2: 0.36, y2: 1.0 };
    /// Material standard curve, `[0.4, 0, 0.2, 1]`.
    pub const STANDARD: Easing = Easing::CubicBezier { x1: 0.4, y1: 0.0, x2: 0.2, y2: 1.0 };
    /// Gentle quad-out, `[0.25, 0.46, 0.45, 0.94]`.
    pub const QUAD_OUT: Easing = Easing::CubicBezier { x1: 0.25, y1: 0.46, x2: 0.45, y2: 0.94 };

    /// Maps linear progress to eased progress. Input is clamped to `[0, 1]`;
    /// the endpoints always map to exactly 0 and 1.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// The CSS `<easing-function>` for this curve.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let t = solve_x(x1, x2, progress);
    bezier(y1, y2, t)
}

/// Newton-Raphson on x(t), falling back to bisection when the slope flattens.
fn solve_x(x1: f64, x2: f64, target: f64) -> f64 {
    let mut t = target;
    for _ in 0..8 {
        let err = bezier(x1, x2, t) - target;
        if err.abs() < 1e-7 {
            return t;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = target;
    for _ in 0..32 {
        let x = bezier(x1, x2, t);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

// B(t) = 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3
#[inline]
fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::SOFT_OUT,
            Easing::STANDARD,
        ] {
            assert_eq!(easing.evaluate(0.0), 0.0);
            assert_eq!(easing.evaluate(1.0), 1.0);
            assert_eq!(easing.evaluate(-3.0), 0.0);
            assert_eq!(easing.evaluate(7.0), 1.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert!(approx_eq(Easing::Linear.evaluate(0.37), 0.37));
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.evaluate(0.25);
        let b = Easing::EaseInOut.evaluate(0.75);
        assert!(approx_eq(a + b, 1.0));
        assert!(approx_eq(Easing::EaseInOut.evaluate(0.5), 0.5));
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        assert!(Easing::EaseOut.evaluate(0.3) > 0.3);
        assert!(Easing::SOFT_OUT.evaluate(0.3) > Easing::EaseOut.evaluate(0.3));
    }

    #[test]
    fn monotone_curves_never_step_backwards() {
        let mut last = 0.0;
        for i in 0..=200 {
            let v = Easing::SOFT_OUT.evaluate(f64::from(i) / 200.0);
            assert!(v + 1e-6 >= last, "stepped back at {i}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn css_rendering() {
        assert_eq!(Easing::EaseOut.to_css(), "ease-out");
        assert_eq!(Easing::STANDARD.to_css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
