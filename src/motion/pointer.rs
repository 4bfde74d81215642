//! Pointer-proximity effects: magnetic translation and 3D tilt.

use super::geometry::{Rect, Vec2};
use super::spring::{Spring, SpringConfig};
use super::visual::VisualState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEffect {
    /// Follow the pointer by `strength` times its offset from the centre.
    Magnetic { strength: f64 },
    /// Rotate up to `max_degrees` towards the pointer.
    Tilt { max_degrees: f64 },
}

impl PointerEffect {
    /// Target offset for a pointer at `pointer` over `rect`. For tilt the
    /// result is `(rotate_x, rotate_y)` in degrees.
    pub fn target(&self, pointer: Vec2, rect: &Rect) -> Vec2 {
        if rect.is_empty() {
            return Vec2::ZERO;
        }
        match *self {
            Self::Magnetic { strength } => (pointer - rect.center()) * strength,
            Self::Tilt { max_degrees } => {
                // Normalised to [-0.5, 0.5] across the card.
                let nx = ((pointer.x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5);
                let ny = ((pointer.y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5);
                // Pointer low on the card tips its top away from the viewer.
                Vec2::new(-ny * 2.0 * max_degrees, nx * 2.0 * max_degrees)
            }
        }
    }

    pub fn spring(&self) -> SpringConfig {
        match self {
            Self::Magnetic { .. } => SpringConfig::magnetic(),
            Self::Tilt { .. } => SpringConfig::tilt(),
        }
    }
}

/// Spring-smoothed pointer offset for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    effect: PointerEffect,
    x: Spring,
    y: Spring,
}

impl PointerTracker {
    pub fn new(effect: PointerEffect) -> Self {
        Self::with_spring(effect, effect.spring())
    }

    pub fn with_spring(effect: PointerEffect, config: SpringConfig) -> Self {
        Self { effect, x: Spring::new(0.0, config), y: Spring::new(0.0, config) }
    }

    pub fn on_move(&mut self, pointer: Vec2, rect: &Rect) {
        let target = self.effect.target(pointer, rect);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn on_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advances both axes; true while either is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn visual(&self) -> VisualState {
        let offset = self.offset();
        match self.effect {
            PointerEffect::Magnetic { .. } => VisualState::REST.with_x(offset.x).with_y(offset.y),
            PointerEffect::Tilt { .. } => VisualState::REST.with_rotation(offset.x, offset.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;
    const BUTTON: Rect = Rect::new(100.0, 200.0, 200.0, 60.0);
    const MAGNETIC: PointerEffect = PointerEffect::Magnetic { strength: 0.15 };
    const TILT: PointerEffect = PointerEffect::Tilt { max_degrees: 4.0 };

    #[test]
    fn magnetic_scales_offset_from_centre() {
        let target = MAGNETIC.target(Vec2::new(300.0, 260.0), &BUTTON);
        assert!((target.x - 15.0).abs() < 1e-9);
        assert!((target.y - 4.5).abs() < 1e-9);
        assert_eq!(MAGNETIC.target(BUTTON.center(), &BUTTON), Vec2::ZERO);
    }

    #[test]
    fn tilt_is_bounded_by_max_degrees() {
        let corner = TILT.target(Vec2::new(100.0, 200.0), &BUTTON);
        assert_eq!(corner, Vec2::new(4.0, -4.0));
        let far_away = TILT.target(Vec2::new(5000.0, 5000.0), &BUTTON);
        assert_eq!(far_away, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn empty_rect_yields_no_offset() {
        let target = MAGNETIC.target(Vec2::new(10.0, 10.0), &Rect::default());
        assert_eq!(target, Vec2::ZERO);
    }

    #[test]
    fn returns_to_origin_within_settle_time_after_leave() {
        for effect in [MAGNETIC, TILT] {
            let mut tracker = PointerTracker::new(effect);
            tracker.on_move(Vec2::new(290.0, 255.0), &BUTTON);
            for _ in 0..12 {
                tracker.step(FRAME);
            }
            assert_ne!(tracker.offset(), Vec2::ZERO);

            tracker.on_leave();
            let mut elapsed = 0.0;
            while tracker.step(FRAME) {
                elapsed += FRAME;
            }
            // Pointer springs snap to rest 1.2s after the last retarget.
            assert!(elapsed <= 1.2 + FRAME);
            assert_eq!(tracker.offset(), Vec2::ZERO);
            assert!(!tracker.step(FRAME));
            assert_eq!(tracker.visual(), VisualState::REST);
        }
    }

    #[test]
    fn visual_maps_to_translation_or_rotation() {
        let mut magnetic = PointerTracker::new(MAGNETIC);
        magnetic.on_move(Vec2::new(300.0, 230.0), &BUTTON);
        magnetic.step(2.0);
        let v = magnetic.visual();
        assert!((v.x - 15.0).abs() < 1e-9);
        assert_eq!(v.rotate_y, 0.0);

        let mut tilt = PointerTracker::new(TILT);
        tilt.on_move(Vec2::new(300.0, 230.0), &BUTTON);
        tilt.step(2.0);
        let v = tilt.visual();
        assert_eq!(v.x, 0.0);
        assert!((v.rotate_y - 4.0).abs() < 1e-9);
    }
}
