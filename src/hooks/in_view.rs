//! `IntersectionObserver`-backed visibility signal for reveal animations.

use std::rc::Rc;

use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::geometry::Rect;
use crate::motion::reveal::{Margin, VisibilityMode, VisibilityState};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps the observer and its JS callback alive; disconnects on drop.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(element: &Element, margin: Margin, on_change: impl Fn(bool) + 'static) -> Option<ObserverGuard> {
    let callback: EntriesCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_change(entry.is_intersecting());
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&margin.root_margin());
    init.set_threshold(&JsValue::from_f64(0.0));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some(ObserverGuard { observer, _callback: callback })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), showing content statically", err);
            None
        }
    }
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Whether the element behind `node` is (or, in `Once` mode, has been) inside
/// the viewport shrunk or grown by `margin`.
///
/// Elements already on screen at mount resolve to `true` straight away. When
/// the browser cannot observe intersections the signal is `true` so nothing
/// stays hidden.
#[hook]
pub fn use_in_view(node: NodeRef, margin: Margin, mode: VisibilityMode) -> bool {
    let signal = use_state_eq(|| false);
    let record = use_mut_ref(VisibilityState::default);

    {
        let signal = signal.clone();
        use_effect_with_deps(
            move |(node, margin, mode)| {
                let (margin, mode) = (*margin, *mode);
                let update: Rc<dyn Fn(bool)> = Rc::new(move |intersecting| {
                    let visible = {
                        let mut record = record.borrow_mut();
                        record.observe(intersecting);
                        record.signal(mode)
                    };
                    signal.set(visible);
                });

                let guard = match (node.cast::<Element>(), web_sys::window()) {
                    (Some(element), Some(window)) => {
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                        if margin.intersects(&element_rect(&element), width, height) {
                            update(true);
                        }
                        let observed = update.clone();
                        let guard = observe(&element, margin, move |intersecting| observed(intersecting));
                        if guard.is_none() {
                            update(true);
                        }
                        guard
                    }
                    _ => {
                        update(true);
                        None
                    }
                };
                move || drop(guard)
            },
            (node, margin, mode),
        );
    }

    *signal
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    fn mounted_box() -> Element {
        let document = web_sys::window().and_then(|window| window.document()).expect("document");
        let element = document.create_element("div").expect("div");
        element.set_attribute("style", "width: 100px; height: 100px;").expect("style");
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    fn counting(calls: &Rc<Cell<u32>>) -> impl Fn(bool) + 'static {
        let calls = calls.clone();
        move |_| calls.set(calls.get() + 1)
    }

    #[wasm_bindgen_test]
    async fn live_observer_reports_the_element() {
        let element = mounted_box();
        let calls = Rc::new(Cell::new(0));
        let guard = observe(&element, Margin::ZERO, counting(&calls));
        assert!(guard.is_some());
        TimeoutFuture::new(100).await;
        assert!(calls.get() > 0);
        drop(guard);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_guard_disconnects_before_any_report() {
        let element = mounted_box();
        let calls = Rc::new(Cell::new(0));
        drop(observe(&element, Margin::ZERO, counting(&calls)));
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), 0);
        element.remove();
    }
}
