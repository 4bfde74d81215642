//! Entrance animations triggered by scrolling an element into view.

use log::warn;
use yew::prelude::*;

use crate::hooks::in_view::use_in_view;
use crate::motion::easing::Easing;
use crate::motion::reveal::{RevealConfig, RevealPreset, LINE, SCALE_BLUR};
use crate::motion::visual::{Transition, VisualState};

/// `config` with an extra start delay, or unchanged if `delay` is invalid.
fn delayed(config: RevealConfig, delay: f64) -> RevealConfig {
    if delay == 0.0 {
        return config;
    }
    config.with_delay(delay).unwrap_or_else(|err| {
        warn!("Ignoring reveal delay: {}", err);
        config
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(RevealPreset::FadeUp)]
    pub preset: RevealPreset,
    /// Overrides `preset` when set.
    #[prop_or_default]
    pub config: Option<RevealConfig>,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let config = delayed(props.config.unwrap_or_else(|| props.preset.config()), props.delay);
    let visible = use_in_view(node.clone(), config.margin, config.mode);

    html! {
        <div ref={node} class={props.class.clone()} style={config.style(visible, 0)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScaleBlurRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScaleBlurReveal)]
pub fn scale_blur_reveal(props: &ScaleBlurRevealProps) -> Html {
    html! {
        <Reveal config={Some(SCALE_BLUR)} delay={props.delay} class={props.class.clone()}>
            { for props.children.iter() }
        </Reveal>
    }
}

/// Shared by a `StaggerReveal` with its `StaggerItem`s.
#[derive(Clone, Copy, PartialEq)]
struct StaggerContext {
    visible: bool,
    config: RevealConfig,
}

#[derive(Properties, PartialEq)]
pub struct StaggerRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(RevealPreset::FadeUp)]
    pub preset: RevealPreset,
    /// Seconds between consecutive items.
    #[prop_or(0.1)]
    pub stagger: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Observes one container and reveals its `StaggerItem`s one after another.
#[function_component(StaggerReveal)]
pub fn stagger_reveal(props: &StaggerRevealProps) -> Html {
    let node = use_node_ref();
    let base = delayed(props.preset.config(), props.delay);
    let config = base.with_stagger(props.stagger).unwrap_or_else(|err| {
        warn!("Ignoring stagger: {}", err);
        base
    });
    let visible = use_in_view(node.clone(), config.margin, config.mode);

    html! {
        <ContextProvider<StaggerContext> context={StaggerContext { visible, config }}>
            <div ref={node} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        </ContextProvider<StaggerContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerItemProps {
    #[prop_or_default]
    pub children: Children,
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    // Outside a StaggerReveal there is nothing to wait for.
    let style = match use_context::<StaggerContext>() {
        Some(StaggerContext { visible, config }) => config.style(visible, props.index),
        None => String::new(),
    };

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

/// Splits `text` into the pieces animated one by one. Spaces become
/// non-breaking so inline-block glyphs keep their width.
fn characters(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00a0}'.to_string() } else { c.to_string() })
        .collect()
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

fn piece_config(rise: f64, duration: f64, stagger: f64, delay: f64) -> RevealConfig {
    let base = RevealConfig::new(VisualState::HIDDEN.with_y(rise), VisualState::REST, Transition::default());
    Transition::new(duration, delay, Easing::SOFT_OUT)
        .and_then(|transition| transition.with_stagger(stagger))
        .map(|transition| RevealConfig { transition, ..base })
        .unwrap_or_else(|err| {
            warn!("Falling back to default text reveal timing: {}", err);
            base
        })
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or(0.03)]
    pub stagger: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals `text` one character at a time.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let config = piece_config(50.0, 0.5, props.stagger, props.delay);
    let visible = use_in_view(node.clone(), config.margin, config.mode);

    html! {
        <span ref={node} class={props.class.clone()} aria-label={props.text.clone()}>
            { for characters(&props.text).into_iter().enumerate().map(|(i, c)| html! {
                <span aria-hidden="true" style={format!("display: inline-block; {}", config.style(visible, i))}>
                    { c }
                </span>
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordRevealProps {
    pub text: AttrValue,
    #[prop_or(0.08)]
    pub stagger: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals `text` word by word.
#[function_component(WordReveal)]
pub fn word_reveal(props: &WordRevealProps) -> Html {
    let node = use_node_ref();
    let config = piece_config(20.0, 0.6, props.stagger, props.delay);
    let visible = use_in_view(node.clone(), config.margin, config.mode);

    html! {
        <span ref={node} class={props.class.clone()}>
            { for words(&props.text).into_iter().enumerate().map(|(i, word)| html! {
                <span style={format!("display: inline-block; margin-right: 0.25em; {}", config.style(visible, i))}>
                    { word }
                </span>
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineRevealProps {
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// A horizontal rule drawn from its left edge.
#[function_component(LineReveal)]
pub fn line_reveal(props: &LineRevealProps) -> Html {
    let node = use_node_ref();
    let config = delayed(LINE, props.delay);
    let visible = use_in_view(node.clone(), config.margin, config.mode);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={format!("transform-origin: left; {}", config.style(visible, 0))}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_keep_spaces_visible() {
        assert_eq!(characters("EA job"), vec!["E", "A", "\u{00a0}", "j", "o", "b"]);
    }

    #[test]
    fn words_drop_extra_whitespace() {
        assert_eq!(words("  We build   careers. "), vec!["We", "build", "careers."]);
    }

    #[test]
    fn text_pieces_are_staggered() {
        let config = piece_config(50.0, 0.5, 0.03, 0.2);
        assert!((config.transition.delay_for(0) - 0.2).abs() < 1e-9);
        assert!((config.transition.delay_for(10) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_text_timing_falls_back() {
        let config = piece_config(50.0, 0.5, -1.0, 0.0);
        assert_eq!(config.transition, Transition::default());
    }

    #[test]
    fn invalid_delay_is_ignored() {
        let config = RevealPreset::FadeUp.config();
        assert_eq!(delayed(config, f64::NAN), config);
        assert!((delayed(config, 0.4).transition.delay - 0.4).abs() < 1e-9);
    }
}
