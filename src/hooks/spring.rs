//! Spring-smoothed values driven by animation frames.

use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use super::animation_frame::use_frame_driver;
use super::in_view::element_rect;
use crate::motion::geometry::Vec2;
use crate::motion::pointer::{PointerEffect, PointerTracker};
use crate::motion::spring::{Spring, SpringConfig};
use crate::motion::visual::VisualState;

/// Follows `target` through a spring and returns the current value.
#[hook]
pub fn use_spring(target: f64, config: SpringConfig) -> f64 {
    let value = use_state_eq(|| target);
    let spring = use_mut_ref(|| Spring::new(target, config));
    let driver = use_frame_driver();

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target| {
                spring.borrow_mut().set_target(*target);
                if !spring.borrow().is_at_rest() {
                    driver.ensure_running(move |dt| {
                        let mut spring = spring.borrow_mut();
                        let moving = spring.step(dt);
                        value.set(spring.value());
                        moving
                    });
                }
                || ()
            },
            target,
        );
    }

    *value
}

/// Mouse handlers plus the resulting visual for a pointer-following element.
pub struct PointerBinding {
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub visual: VisualState,
}

/// Drives `effect` for the element behind `node`. Without mouse events (touch
/// screens) the element simply stays at rest.
#[hook]
pub fn use_pointer_effect(node: NodeRef, effect: PointerEffect) -> PointerBinding {
    let visual = use_state_eq(|| VisualState::REST);
    let tracker = use_mut_ref(|| PointerTracker::new(effect));
    let driver = use_frame_driver();

    let animate: Rc<dyn Fn()> = {
        let (visual, tracker) = (visual.clone(), tracker.clone());
        Rc::new(move || {
            let (visual, tracker) = (visual.clone(), tracker.clone());
            driver.ensure_running(move |dt| {
                let mut tracker = tracker.borrow_mut();
                let moving = tracker.step(dt);
                visual.set(tracker.visual());
                moving
            });
        })
    };

    let onmousemove = {
        let (tracker, animate) = (tracker.clone(), animate.clone());
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let pointer = Vec2::new(f64::from(e.client_x()), f64::from(e.client_y()));
                tracker.borrow_mut().on_move(pointer, &element_rect(&element));
                animate();
            }
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| {
        tracker.borrow_mut().on_leave();
        animate();
    });

    PointerBinding { onmousemove, onmouseleave, visual: *visual }
}
