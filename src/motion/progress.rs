//! Scroll progress between two anchors and the keyframe tables that turn it
//! into presentation values.

use super::error::{finite, MotionError, Result};
use super::geometry::Rect;

/// Separation (in px) below which two anchors are treated as collapsed.
const COLLAPSED: f64 = 1e-6;

/// A point along an element or the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// "When `element` edge meets `viewport` edge". `start end` is the moment
/// the element's top enters from the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl Anchor {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }
}

/// The pair of anchors bounding a scroll-linked effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollOffsets {
    /// Whole time the element is on screen: enters at the bottom, leaves at the top.
    pub const ENTER_TO_EXIT: ScrollOffsets = ScrollOffsets {
        start: Anchor::new(Edge::Start, Edge::End),
        end: Anchor::new(Edge::End, Edge::Start),
    };
    /// Element pinned at the top until its bottom reaches the top; heroes.
    pub const LEAVING_TOP: ScrollOffsets = ScrollOffsets {
        start: Anchor::new(Edge::Start, Edge::Start),
        end: Anchor::new(Edge::End, Edge::Start),
    };
    /// Entering from the bottom until centred.
    pub const ENTER_TO_CENTER: ScrollOffsets = ScrollOffsets {
        start: Anchor::new(Edge::Start, Edge::End),
        end: Anchor::new(Edge::Center, Edge::Center),
    };
    /// Tall sticky containers: top reaches the top until bottom reaches the bottom.
    pub const CONTAINED: ScrollOffsets = ScrollOffsets {
        start: Anchor::new(Edge::Start, Edge::Start),
        end: Anchor::new(Edge::End, Edge::End),
    };
}

/// Layout facts needed to place the anchors, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Current `scrollY`.
    pub scroll_y: f64,
    /// Element top in document coordinates (`rect.top + scrollY`).
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

impl ScrollOffsets {
    /// Scroll position at which `anchor` is met.
    fn position(anchor: Anchor, geometry: &ScrollGeometry) -> f64 {
        geometry.element_top + anchor.element.fraction() * geometry.element_height
            - anchor.viewport.fraction() * geometry.viewport_height
    }

    /// Progress in `[0, 1]` from `start` to `end`. Collapsed anchors or
    /// non-finite layout yield 0.
    pub fn progress(&self, geometry: &ScrollGeometry) -> f64 {
        let from = Self::position(self.start, geometry);
        let to = Self::position(self.end, geometry);
        progress_between(geometry.scroll_y, from, to)
    }
}

/// Progress of the whole document, from the top to the last scrollable pixel.
pub fn document_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    progress_between(scroll_y, 0.0, document_height - viewport_height)
}

fn progress_between(value: f64, from: f64, to: f64) -> f64 {
    let span = to - from;
    if !span.is_finite() || !value.is_finite() || span.abs() < COLLAPSED {
        return 0.0;
    }
    ((value - from) / span).clamp(0.0, 1.0)
}

/// Piecewise-linear map from progress to an output value. Each mapping is
/// independent so opacity and scale can use different sub-ranges of one
/// progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Keyframes {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self> {
        if input.len() != output.len() {
            return Err(MotionError::StopCountMismatch { input: input.len(), output: output.len() });
        }
        if input.len() < 2 {
            return Err(MotionError::TooFewStops(input.len()));
        }
        for (i, &v) in input.iter().enumerate() {
            finite("keyframe input", v)?;
            if i > 0 && v <= input[i - 1] {
                return Err(MotionError::UnsortedStops { index: i });
            }
        }
        for &v in &output {
            finite("keyframe output", v)?;
        }
        Ok(Self { input, output })
    }

    /// Two-stop shorthand: `range.0 → out.0`, `range.1 → out.1`.
    pub fn span(range: (f64, f64), out: (f64, f64)) -> Result<Self> {
        Self::new(vec![range.0, range.1], vec![out.0, out.1])
    }

    /// Value at `progress`; clamps to the end stops outside the input range.
    pub fn sample(&self, progress: f64) -> f64 {
        let last = self.input.len() - 1;
        if progress.is_nan() || progress <= self.input[0] {
            return self.output[0];
        }
        if progress >= self.input[last] {
            return self.output[last];
        }
        let seg = self.input.partition_point(|&stop| stop <= progress).saturating_sub(1);
        let (x0, x1) = (self.input[seg], self.input[seg + 1]);
        let (y0, y1) = (self.output[seg], self.output[seg + 1]);
        y0 + (y1 - y0) * (progress - x0) / (x1 - x0)
    }
}

/// Index of the step that `progress` selects among `count` steps, rounding
/// to the nearest like a sticky text that swaps lines as you scroll.
pub fn step_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    let index = (p * (count - 1) as f64).round() as usize;
    index.min(count - 1)
}

/// Index of the first section crossing the viewport's horizontal midline.
/// Sections are in page order; `None` entries (not rendered) are skipped but
/// keep their index. `None` when no section crosses, e.g. between sections.
pub fn active_section<I>(rects: I, viewport_height: f64) -> Option<usize>
where
    I: IntoIterator<Item = Option<Rect>>,
{
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }
    let midline = viewport_height / 2.0;
    rects
        .into_iter()
        .position(|rect| rect.is_some_and(|r| r.top <= midline && r.bottom() >= midline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn hero(scroll_y: f64) -> ScrollGeometry {
        ScrollGeometry { scroll_y, element_top: 0.0, element_height: 900.0, viewport_height: 900.0 }
    }

    #[test]
    fn progress_is_clamped_past_both_anchors() {
        let offsets = ScrollOffsets::ENTER_TO_EXIT;
        let geometry = |scroll_y| ScrollGeometry {
            scroll_y,
            element_top: 2000.0,
            element_height: 400.0,
            viewport_height: 800.0,
        };
        // start at 1200, end at 2400
        for scroll_y in [-5000.0, 0.0, 1199.0, 1200.0, 1800.0, 2400.0, 2401.0, 1e9] {
            let p = offsets.progress(&geometry(scroll_y));
            assert!((0.0..=1.0).contains(&p), "{scroll_y} gave {p}");
        }
        assert_eq!(offsets.progress(&geometry(0.0)), 0.0);
        assert!(approx_eq(offsets.progress(&geometry(1800.0)), 0.5));
        assert_eq!(offsets.progress(&geometry(99_999.0)), 1.0);
    }

    #[test]
    fn hero_progress_while_leaving_top() {
        let offsets = ScrollOffsets::LEAVING_TOP;
        assert_eq!(offsets.progress(&hero(0.0)), 0.0);
        assert!(approx_eq(offsets.progress(&hero(450.0)), 0.5));
        assert_eq!(offsets.progress(&hero(2000.0)), 1.0);
    }

    #[test]
    fn collapsed_anchors_default_to_zero() {
        let offsets = ScrollOffsets::LEAVING_TOP;
        let flat = ScrollGeometry { scroll_y: 300.0, element_top: 100.0, element_height: 0.0, viewport_height: 800.0 };
        assert_eq!(offsets.progress(&flat), 0.0);
        assert_eq!(document_progress(10.0, 800.0, 800.0), 0.0);
        assert_eq!(document_progress(f64::NAN, 4000.0, 800.0), 0.0);
    }

    #[test]
    fn document_progress_spans_scrollable_range() {
        assert_eq!(document_progress(0.0, 4000.0, 1000.0), 0.0);
        assert!(approx_eq(document_progress(1500.0, 4000.0, 1000.0), 0.5));
        assert_eq!(document_progress(3500.0, 4000.0, 1000.0), 1.0);
    }

    #[test]
    fn keyframes_clamp_outside_input_range() {
        let fade = Keyframes::span((0.0, 0.5), (1.0, 0.0)).unwrap();
        assert_eq!(fade.sample(-1.0), 1.0);
        assert!(approx_eq(fade.sample(0.25), 0.5));
        assert_eq!(fade.sample(0.5), 0.0);
        assert_eq!(fade.sample(0.9), 0.0);
    }

    #[test]
    fn independent_mappings_share_one_progress() {
        let opacity = Keyframes::span((0.0, 0.5), (0.0, 1.0)).unwrap();
        let scale = Keyframes::span((0.0, 1.0), (0.8, 1.0)).unwrap();
        let p = 0.5;
        assert_eq!(opacity.sample(p), 1.0);
        assert!(approx_eq(scale.sample(p), 0.9));
    }

    #[test]
    fn multi_stop_tables() {
        let table = Keyframes::new(vec![0.0, 0.2, 1.0], vec![0.0, 100.0, -100.0]).unwrap();
        assert!(approx_eq(table.sample(0.1), 50.0));
        assert!(approx_eq(table.sample(0.2), 100.0));
        assert!(approx_eq(table.sample(0.6), 0.0));
    }

    #[test]
    fn invalid_tables_are_rejected() {
        assert_eq!(Keyframes::new(vec![0.0], vec![1.0]), Err(MotionError::TooFewStops(1)));
        assert_eq!(
            Keyframes::new(vec![0.0, 1.0], vec![1.0]),
            Err(MotionError::StopCountMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Keyframes::new(vec![0.0, 0.5, 0.5], vec![1.0, 2.0, 3.0]),
            Err(MotionError::UnsortedStops { index: 2 })
        );
        assert!(Keyframes::span((0.0, 1.0), (f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn step_index_rounds_and_clamps() {
        assert_eq!(step_index(0.0, 4), 0);
        assert_eq!(step_index(0.16, 4), 0);
        assert_eq!(step_index(0.17, 4), 1);
        assert_eq!(step_index(1.0, 4), 3);
        assert_eq!(step_index(5.0, 4), 3);
        assert_eq!(step_index(0.5, 0), 0);
    }

    fn section(top: f64, height: f64) -> Option<Rect> {
        Some(Rect::new(0.0, top, 1280.0, height))
    }

    #[test]
    fn active_section_is_the_one_under_the_midline() {
        // 800px viewport, midline at 400.
        let page = |scroll: f64| {
            vec![section(0.0 - scroll, 900.0), section(900.0 - scroll, 600.0), section(1500.0 - scroll, 700.0)]
        };
        assert_eq!(active_section(page(0.0), 800.0), Some(0));
        assert_eq!(active_section(page(600.0), 800.0), Some(1));
        assert_eq!(active_section(page(1200.0), 800.0), Some(2));
    }

    #[test]
    fn first_section_wins_where_two_touch_the_midline() {
        let rects = vec![section(-500.0, 900.0), section(400.0, 600.0)];
        assert_eq!(active_section(rects, 800.0), Some(0));
    }

    #[test]
    fn missing_sections_keep_their_index() {
        let rects = vec![None, section(300.0, 200.0)];
        assert_eq!(active_section(rects, 800.0), Some(1));
    }

    #[test]
    fn no_section_between_sections_or_without_a_viewport() {
        let gap = vec![section(-400.0, 300.0), section(600.0, 300.0)];
        assert_eq!(active_section(gap, 800.0), None);
        assert_eq!(active_section(vec![section(0.0, 900.0)], 0.0), None);
        assert_eq!(active_section(vec![section(0.0, 900.0)], f64::NAN), None);
        assert_eq!(active_section(Vec::new(), 800.0), None);
    }
}
