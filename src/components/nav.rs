use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::hooks::in_view::element_rect;
use crate::hooks::viewport::{use_viewport, Viewport};
use crate::motion::progress::active_section;
use crate::Route;

/// Smooth-scrolls the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No section #{} to scroll to", id),
    }
}

/// Whether the floating apply button should show: once half of the first
/// screen is behind the reader.
pub fn past_hero(viewport: &Viewport) -> bool {
    viewport.height > 0.0 && viewport.scroll_y > viewport.height * 0.5
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: AttrValue,
    pub apply_label: AttrValue,
}

/// Top navigation that turns solid once the page has scrolled a little.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let viewport = use_viewport();
    let solid = viewport.scrolled_past(config::NAV_SOLID_AFTER_PX);

    html! {
        <nav class={classes!("site-nav", solid.then_some("site-nav-solid"))}>
            <Link<Route> to={Route::Index} classes="site-nav-brand">
                { props.brand.clone() }
            </Link<Route>>
            <div class="site-nav-links">
                <Link<Route> to={Route::Index} classes="site-nav-link">{ "All designs" }</Link<Route>>
                <a href={config::APPLY_URL} target="_blank" rel="noopener noreferrer" class="site-nav-apply">
                    { props.apply_label.clone() }
                </a>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingApplyProps {
    pub label: AttrValue,
}

#[function_component(FloatingApply)]
pub fn floating_apply(props: &FloatingApplyProps) -> Html {
    let viewport = use_viewport();
    let shown = past_hero(&viewport);

    html! {
        <a
            href={config::APPLY_URL}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("floating-apply", shown.then_some("floating-apply-visible"))}
            aria-hidden={(!shown).to_string()}
        >
            { props.label.clone() }
        </a>
    }
}

/// One entry of the section navigation: the element id and its label.
#[derive(Clone, PartialEq, Debug)]
pub struct NavSection {
    pub id: AttrValue,
    pub label: AttrValue,
}

impl NavSection {
    pub fn new(id: impl Into<AttrValue>, label: impl Into<AttrValue>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub sections: Vec<NavSection>,
}

/// Side navigation that highlights the section under the viewport midline.
/// The last match is kept while the midline sits between sections.
#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    let viewport = use_viewport();
    let active = use_state_eq(|| None::<usize>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(viewport, sections)| {
                if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                    let rects = sections
                        .iter()
                        .map(|section| document.get_element_by_id(&section.id).map(|el| element_rect(&el)));
                    if let Some(index) = active_section(rects, viewport.height) {
                        active.set(Some(index));
                    }
                }
                || ()
            },
            (viewport, props.sections.clone()),
        );
    }

    html! {
        <nav class={classes!("section-nav", past_hero(&viewport).then_some("section-nav-visible"))}>
            { for props.sections.iter().enumerate().map(|(i, section)| {
                let id = section.id.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(&id);
                });
                let current = *active == Some(i);
                html! {
                    <a
                        href={format!("#{}", section.id)}
                        class={classes!("section-nav-link", current.then_some("section-nav-active"))}
                        aria-current={current.then_some("true")}
                        {onclick}
                    >
                        <span class="section-nav-dot" />
                        { section.label.clone() }
                    </a>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64) -> Viewport {
        Viewport { scroll_y, width: 1280.0, height: 800.0, document_height: 5000.0 }
    }

    #[test]
    fn floating_apply_waits_for_the_hero_to_pass() {
        assert!(!past_hero(&at(0.0)));
        assert!(!past_hero(&at(400.0)));
        assert!(past_hero(&at(401.0)));
        assert!(past_hero(&at(500.0)));
        assert!(!past_hero(&Viewport::default()));
    }
}
