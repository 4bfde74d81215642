use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

use crate::motion::frame::{FrameLoop, FrameScheduler};

/// The browser's `requestAnimationFrame` clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

pub type BrowserFrameLoop = FrameLoop<AnimationFrames>;

/// Slot for the one frame loop a component runs at a time.
#[derive(Clone)]
pub struct FrameDriver {
    slot: Rc<RefCell<Option<BrowserFrameLoop>>>,
}

impl FrameDriver {
    pub fn is_running(&self) -> bool {
        self.slot.borrow().as_ref().map_or(false, |running| running.is_running())
    }

    /// Starts `tick` unless a loop is already going. Ticks read their state
    /// through shared cells, so a live loop picks up new targets by itself.
    pub fn ensure_running(&self, tick: impl FnMut(f64) -> bool + 'static) {
        if !self.is_running() {
            self.restart(tick);
        }
    }

    /// Replaces whatever loop is running with `tick`.
    pub fn restart(&self, tick: impl FnMut(f64) -> bool + 'static) {
        let next = FrameLoop::start(AnimationFrames, tick);
        let previous = self.slot.borrow_mut().replace(next);
        drop(previous);
    }

    pub fn stop(&self) {
        let previous = self.slot.borrow_mut().take();
        drop(previous);
    }
}

/// A `FrameDriver` whose loop is cancelled when the component unmounts.
#[hook]
pub fn use_frame_driver() -> FrameDriver {
    let slot = use_mut_ref(|| None::<BrowserFrameLoop>);
    let driver = FrameDriver { slot };
    {
        let driver = driver.clone();
        use_effect_with_deps(move |_| move || driver.stop(), ());
    }
    driver
}
