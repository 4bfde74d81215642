//! Scroll-linked effects: the element's presentation is a function of how
//! far it has travelled through the viewport.

use yew::prelude::*;

use crate::hooks::scroll::{use_document_progress, use_scroll_progress};
use crate::hooks::spring::use_spring;
use crate::motion::progress::{step_index, Keyframes, ScrollOffsets};
use crate::motion::spring::SpringConfig;
use crate::motion::visual::VisualState;

/// Samples a two-point mapping. An invalid mapping holds its first output,
/// or 0 if that is not finite either.
fn sample(progress: f64, range: (f64, f64), out: (f64, f64)) -> f64 {
    let fallback = if out.0.is_finite() { out.0 } else { 0.0 };
    Keyframes::span(range, out).map(|track| track.sample(progress)).unwrap_or(fallback)
}

pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    sample(progress, (0.0, 1.0), (100.0 * speed, -100.0 * speed))
}

pub fn scale_on_scroll(progress: f64) -> VisualState {
    VisualState::REST
        .with_scale(sample(progress, (0.0, 1.0), (0.8, 1.0)))
        .with_opacity(sample(progress, (0.0, 0.5), (0.0, 1.0)))
}

/// The hero recedes over the first half of scrolling past it.
pub fn hero_fade(progress: f64, blur: bool) -> VisualState {
    let state = VisualState::REST
        .with_opacity(sample(progress, (0.0, 0.5), (1.0, 0.0)))
        .with_scale(sample(progress, (0.0, 0.5), (1.0, 0.95)))
        .with_y(sample(progress, (0.0, 0.5), (0.0, 100.0)));
    if blur {
        state.with_blur(sample(progress, (0.0, 0.5), (0.0, 10.0)))
    } else {
        state
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    /// 1.0 moves the content 100px either way across the viewport.
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollOffsets::ENTER_TO_EXIT);
    let state = VisualState::REST.with_y(parallax_offset(progress, props.speed));

    html! {
        <div ref={node} class={props.class.clone()} style={format!("will-change: transform; {}", state.to_css())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScaleOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScaleOnScroll)]
pub fn scale_on_scroll_component(props: &ScaleOnScrollProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollOffsets::ENTER_TO_CENTER);

    html! {
        <div ref={node} class={props.class.clone()} style={scale_on_scroll(progress).to_css()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroFadeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub blur: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a hero section; the inner content fades as the section scrolls off.
#[function_component(HeroFade)]
pub fn hero_fade_component(props: &HeroFadeProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollOffsets::LEAVING_TOP);

    html! {
        <section ref={node} class={props.class.clone()}>
            <div class="hero-inner" style={hero_fade(progress, props.blur).to_css()}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StickyTextProps {
    pub lines: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// One screen of scrolling per line while the text stays pinned.
#[function_component(StickyText)]
pub fn sticky_text(props: &StickyTextProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollOffsets::CONTAINED);
    let active = step_index(progress, props.lines.len());

    html! {
        <div
            ref={node}
            class={classes!("sticky-text", props.class.clone())}
            style={format!("position: relative; height: {}vh;", props.lines.len().max(1) * 100)}
        >
            <div class="sticky-text-pin" style="position: sticky; top: 0; height: 100vh; display: flex; align-items: center; justify-content: center;">
                { for props.lines.iter().enumerate().map(|(i, line)| {
                    let state = if i == active {
                        VisualState::REST
                    } else {
                        VisualState::HIDDEN.with_y(if i < active { -40.0 } else { 40.0 })
                    };
                    html! {
                        <p class="sticky-text-line" style={format!("position: absolute; transition: opacity 0.5s, transform 0.5s; {}", state.to_css())}>
                            { line.clone() }
                        </p>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressBarProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Fixed bar across the top showing how far down the page the reader is.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar(props: &ScrollProgressBarProps) -> Html {
    let progress = use_document_progress();
    let smoothed = use_spring(progress, SpringConfig::progress()).clamp(0.0, 1.0);

    html! {
        <div
            class={classes!("scroll-progress", props.class.clone())}
            style={format!("transform-origin: left; {}", VisualState::REST.with_scale_x(smoothed).to_css())}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parallax_runs_from_positive_to_negative() {
        assert!(approx_eq(parallax_offset(0.0, 0.5), 50.0));
        assert!(approx_eq(parallax_offset(0.5, 0.5), 0.0));
        assert!(approx_eq(parallax_offset(1.0, 0.5), -50.0));
        assert!(approx_eq(parallax_offset(2.0, 0.5), -50.0));
    }

    #[test]
    fn non_finite_speed_stays_put() {
        assert_eq!(parallax_offset(0.3, f64::NAN), 0.0);
        assert!(approx_eq(parallax_offset(0.3, 0.0), 0.0));
    }

    #[test]
    fn scale_and_opacity_use_separate_ranges() {
        let half = scale_on_scroll(0.5);
        assert!(approx_eq(half.opacity, 1.0));
        assert!(approx_eq(half.scale, 0.9));
        let start = scale_on_scroll(0.0);
        assert!(approx_eq(start.opacity, 0.0));
        assert!(approx_eq(start.scale, 0.8));
    }

    #[test]
    fn hero_is_gone_halfway_through() {
        let top = hero_fade(0.0, true);
        assert_eq!(top, VisualState::REST);
        let gone = hero_fade(0.5, true);
        assert!(approx_eq(gone.opacity, 0.0));
        assert!(approx_eq(gone.scale, 0.95));
        assert!(approx_eq(gone.y, 100.0));
        assert!(approx_eq(gone.blur, 10.0));
        assert_eq!(hero_fade(1.0, false).blur, 0.0);
    }
}
