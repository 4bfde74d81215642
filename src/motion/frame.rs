//! Per-frame driving for animations that are not plain CSS transitions.
//!
//! `FrameScheduler` is the seam to the host's frame clock. `FrameLoop` owns
//! the pending request: dropping the loop cancels it, and the scheduled
//! callback only holds a weak reference, so nothing ticks after its owner is
//! gone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One-shot frame requests. Dropping the returned handle cancels the request
/// if it has not fired yet.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    /// Calls `callback` with a millisecond timestamp on the next frame.
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// Repeating frame callback. `tick` receives the seconds elapsed since the
/// previous frame (0 on the first) and returns whether it wants another one.
pub struct FrameLoop<S: FrameScheduler> {
    state: Rc<LoopState<S>>,
}

struct LoopState<S: FrameScheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    last_timestamp: Cell<Option<f64>>,
    running: Cell<bool>,
    tick: RefCell<Box<dyn FnMut(f64) -> bool>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start(scheduler: S, tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            scheduler,
            pending: RefCell::new(None),
            last_timestamp: Cell::new(None),
            running: Cell::new(true),
            tick: RefCell::new(Box::new(tick)),
        });
        LoopState::schedule(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.state.running.set(false);
        let pending = self.state.pending.borrow_mut().take();
        drop(pending);
    }
}

impl<S: FrameScheduler> LoopState<S> {
    fn schedule(this: &Rc<Self>) {
        let weak = Rc::downgrade(this);
        let handle = this.scheduler.request(Box::new(move |timestamp| {
            if let Some(state) = weak.upgrade() {
                LoopState::on_frame(&state, timestamp);
            }
        }));
        *this.pending.borrow_mut() = Some(handle);
    }

    fn on_frame(this: &Rc<Self>, timestamp: f64) {
        // The request being delivered is spent.
        let spent = this.pending.borrow_mut().take();
        drop(spent);
        if !this.running.get() {
            return;
        }

        let dt = match this.last_timestamp.replace(Some(timestamp)) {
            Some(previous) => ((timestamp - previous) / 1000.0).max(0.0),
            None => 0.0,
        };
        let again = match this.tick.try_borrow_mut() {
            Ok(mut tick) => (*tick)(dt),
            Err(_) => false,
        };

        // `tick` may have dropped the owning loop (e.g. by unmounting).
        if again && this.running.get() {
            Self::schedule(this);
        } else {
            this.running.set(false);
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use super::FrameScheduler;

    type Queue = RefCell<Vec<(u32, Box<dyn FnOnce(f64)>)>>;

    /// Frame clock advanced by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<Queue>,
        next_id: Rc<Cell<u32>>,
    }

    pub struct ManualHandle {
        id: u32,
        queue: Weak<Queue>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                if let Ok(mut queue) = queue.try_borrow_mut() {
                    queue.retain(|(id, _)| *id != self.id);
                }
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            ManualHandle { id, queue: Rc::downgrade(&self.queue) }
        }
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Delivers every request queued before this call.
        pub fn run(&self, timestamp: f64) {
            let due = std::mem::take(&mut *self.queue.borrow_mut());
            for (_, callback) in due {
                callback(timestamp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualFrames;
    use super::*;
    use crate::motion::easing::Easing;
    use crate::motion::tween::CounterTween;

    #[test]
    fn ticks_with_elapsed_seconds() {
        let frames = ManualFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _loop = FrameLoop::start(frames.clone(), move |dt| {
            log.borrow_mut().push(dt);
            true
        });
        frames.run(1000.0);
        frames.run(1016.0);
        frames.run(1048.0);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], 0.0);
        assert!((seen[1] - 0.016).abs() < 1e-9);
        assert!((seen[2] - 0.032).abs() < 1e-9);
    }

    #[test]
    fn stops_when_tick_declines() {
        let frames = ManualFrames::default();
        let mut tween = CounterTween::new(3, 0.0, Easing::Linear).unwrap();
        let frame_loop = FrameLoop::start(frames.clone(), move |dt| tween.advance(dt).is_some());
        frames.run(0.0);
        assert_eq!(frames.pending(), 1);
        frames.run(16.0);
        assert_eq!(frames.pending(), 0);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn no_tick_after_drop_mid_animation() {
        let frames = ManualFrames::default();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let mut tween = CounterTween::new(500, 2.0, Easing::EaseOut).unwrap();
        let frame_loop = FrameLoop::start(frames.clone(), move |dt| {
            counter.set(counter.get() + 1);
            tween.advance(dt).is_some()
        });
        frames.run(0.0);
        frames.run(16.0);
        assert_eq!(ticks.get(), 2);
        assert_eq!(frames.pending(), 1);

        drop(frame_loop);
        assert_eq!(frames.pending(), 0);
        for ts in [32.0, 48.0, 64.0] {
            frames.run(ts);
        }
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn dropping_from_inside_tick_stops_the_loop() {
        let frames = ManualFrames::default();
        let slot: Rc<RefCell<Option<FrameLoop<ManualFrames>>>> = Rc::new(RefCell::new(None));
        let ticks = Rc::new(Cell::new(0));
        let (owner, counter) = (slot.clone(), ticks.clone());
        *slot.borrow_mut() = Some(FrameLoop::start(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            // Simulates the component unmounting in response to this frame.
            let unmounted = owner.borrow_mut().take();
            drop(unmounted);
            true
        }));
        frames.run(0.0);
        frames.run(16.0);
        assert_eq!(ticks.get(), 1);
        assert_eq!(frames.pending(), 0);
    }
}
