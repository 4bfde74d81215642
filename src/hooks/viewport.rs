//! The page-wide scroll and size signal.
//!
//! One `ViewportProvider` wraps each routed page. It listens to `scroll` and
//! `resize` on the window while mounted and hands a read-only snapshot to
//! everything below it through context.

use gloo_events::EventListener;
use log::{debug, warn};
use web_sys::Window;
use yew::prelude::*;

use crate::motion::progress::document_progress;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    /// Reads the current window metrics. `None` outside a browser.
    pub fn measure() -> Option<Self> {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let document_height = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(height);
        Some(Self { scroll_y, width, height, document_height })
    }

    /// How far down the whole page the reader is, in `[0, 1]`.
    pub fn document_progress(&self) -> f64 {
        document_progress(self.scroll_y, self.document_height, self.height)
    }

    pub fn scrolled_past(&self, offset: f64) -> bool {
        self.scroll_y > offset
    }
}

/// Calls `refresh` on every window scroll and resize until the listeners
/// are dropped.
fn listen(window: &Window, refresh: impl Fn() + Clone + 'static) -> [EventListener; 2] {
    let on_scroll = refresh.clone();
    [
        EventListener::new(window, "scroll", move |_| on_scroll()),
        EventListener::new(window, "resize", move |_| refresh()),
    ]
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    pub children: Children,
}

#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let viewport = use_state_eq(|| Viewport::measure().unwrap_or_default());

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = web_sys::window().map(|window| {
                    let refresh = move || {
                        if let Some(measured) = Viewport::measure() {
                            viewport.set(measured);
                        }
                    };
                    // Layout is final once mounted; pick up the real document height.
                    refresh();
                    listen(&window, refresh)
                });
                match &listeners {
                    Some(_) => debug!("Viewport listeners attached"),
                    None => warn!("No window available, viewport stays static"),
                }
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<Viewport> context={*viewport}>
            { for props.children.iter() }
        </ContextProvider<Viewport>>
    }
}

/// Latest viewport snapshot. Outside a provider this is a one-off
/// measurement that never updates.
#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_else(|| Viewport::measure().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_progress_spans_scrollable_range() {
        let viewport = Viewport { scroll_y: 500.0, width: 1280.0, height: 800.0, document_height: 1800.0 };
        assert!((viewport.document_progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn short_document_has_no_progress() {
        let viewport = Viewport { scroll_y: 0.0, width: 1280.0, height: 800.0, document_height: 800.0 };
        assert_eq!(viewport.document_progress(), 0.0);
        assert!(!viewport.scrolled_past(50.0));
    }
}
