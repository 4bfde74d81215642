use log::warn;
use yew::prelude::*;

use crate::config;
use crate::hooks::counter::use_counter;
use crate::hooks::in_view::use_in_view;
use crate::motion::easing::Easing;
use crate::motion::reveal::{Margin, VisibilityMode};
use crate::motion::tween::{format_count, CounterTween};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(config::COUNTER_DURATION_SECS)]
    pub duration: f64,
    #[prop_or_default]
    pub mode: VisibilityMode,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up to `value` once the number scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let margin = Margin::px(-50.0).unwrap_or_default();
    let visible = use_in_view(node.clone(), margin, props.mode);
    let tween = CounterTween::new(props.value, props.duration, Easing::EaseOut).unwrap_or_else(|err| {
        warn!("Counter for {} shown without animation: {}", props.value, err);
        CounterTween::instant(props.value)
    });
    let shown = use_counter(tween, visible);

    html! {
        <span ref={node} class={props.class.clone()}>
            { format!("{}{}", format_count(shown), props.suffix) }
        </span>
    }
}
