use yew::prelude::*;

use crate::hooks::spring::use_pointer_effect;
use crate::motion::pointer::PointerEffect;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    /// Rendered as an external link when set, otherwise as a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(0.15)]
    pub strength: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// A call-to-action that leans towards the pointer.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let pointer = use_pointer_effect(node.clone(), PointerEffect::Magnetic { strength: props.strength });
    let style = format!("display: inline-block; {}", pointer.visual.to_css());

    let inner = match &props.href {
        Some(href) => html! {
            <a href={href.clone()} target="_blank" rel="noopener noreferrer" class={props.class.clone()}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button class={props.class.clone()} onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
    };

    html! {
        <div
            ref={node}
            class="magnetic"
            style={style}
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
        >
            { inner }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(4.0)]
    pub max_degrees: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// A card that rotates in 3D to face the pointer.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let pointer = use_pointer_effect(node.clone(), PointerEffect::Tilt { max_degrees: props.max_degrees });

    html! {
        <div
            ref={node}
            style="perspective: 1000px;"
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
        >
            <div class={props.class.clone()} style={format!("transform-style: preserve-3d; {}", pointer.visual.to_css())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
