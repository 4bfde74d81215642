use web_sys::Element;
use yew::prelude::*;

use super::viewport::{use_viewport, Viewport};
use crate::motion::progress::{ScrollGeometry, ScrollOffsets};

/// Layout of `element` at the given viewport snapshot.
pub fn geometry_of(element: &Element, viewport: &Viewport) -> ScrollGeometry {
    let rect = element.get_bounding_client_rect();
    ScrollGeometry {
        scroll_y: viewport.scroll_y,
        element_top: rect.top() + viewport.scroll_y,
        element_height: rect.height(),
        viewport_height: viewport.height,
    }
}

/// Progress in `[0, 1]` of the element behind `node` between the two
/// anchors of `offsets`. Re-measured after mount and on every viewport
/// change; 0 while the element is not attached.
#[hook]
pub fn use_scroll_progress(node: NodeRef, offsets: ScrollOffsets) -> f64 {
    let viewport = use_viewport();
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(viewport, node, offsets)| {
                if let Some(element) = node.cast::<Element>() {
                    progress.set(offsets.progress(&geometry_of(&element, viewport)));
                }
                || ()
            },
            (viewport, node, offsets),
        );
    }

    *progress
}

/// Progress of the whole page, top to bottom.
#[hook]
pub fn use_document_progress() -> f64 {
    use_viewport().document_progress()
}
