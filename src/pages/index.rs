use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, StaggerItem, StaggerReveal};
use crate::motion::reveal::RevealPreset;
use crate::themes::{self, Collection, Theme};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ThemeCardProps {
    theme: &'static Theme,
}

#[function_component(ThemeCard)]
fn theme_card(props: &ThemeCardProps) -> Html {
    let theme = props.theme;
    let swatches = [theme.palette.background, theme.palette.accent, theme.palette.secondary];

    html! {
        <Link<Route> to={Route::Concept { slug: theme.slug.to_string() }} classes="theme-card">
            <div class="theme-swatches">
                { for swatches.iter().map(|color| html! {
                    <span class="theme-swatch" style={format!("background: {};", color)} title={*color} />
                }) }
            </div>
            <h3 class="theme-name">{ theme.name }</h3>
            <p class="theme-tagline">{ theme.tagline }</p>
            <span class="theme-link">{ format!("View {} →", theme.path()) }</span>
        </Link<Route>>
    }
}

fn collection_grid(collection: Collection) -> Html {
    html! {
        <section class="showcase-collection">
            <Reveal preset={RevealPreset::FadeIn}>
                <h2 class="showcase-collection-title">{ collection.title() }</h2>
            </Reveal>
            <StaggerReveal preset={RevealPreset::FadeUp} stagger={0.08} class="showcase-grid">
                { for themes::collection(collection).enumerate().map(|(i, theme)| html! {
                    <StaggerItem index={i}>
                        <ThemeCard theme={theme} />
                    </StaggerItem>
                }) }
            </StaggerReveal>
        </section>
    }
}

/// Entry page linking every concept.
#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <div class="showcase">
            <header class="showcase-header">
                <Reveal preset={RevealPreset::FadeUp}>
                    <span class="showcase-eyebrow">{ "Design Showcase" }</span>
                    <h1>{ "ExecutiveAssistants.com" }</h1>
                    <p>{ "Premium design explorations for the EA recruitment landing page." }</p>
                </Reveal>
            </header>
            { collection_grid(Collection::Premium) }
            { collection_grid(Collection::Original) }
            <style>
                {r#"
                    body { margin: 0; background: #050505; }
                    .showcase {
                        min-height: 100vh;
                        color: #ffffff;
                        font-family: 'Inter', system-ui, sans-serif;
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .showcase-header { text-align: center; margin-bottom: 5rem; }
                    .showcase-header h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); margin: 1rem 0; letter-spacing: -0.02em; }
                    .showcase-header p { color: rgba(255, 255, 255, 0.6); font-size: 1.15rem; }
                    .showcase-eyebrow { color: #14b8a6; text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; }
                    .showcase-collection { margin-bottom: 5rem; }
                    .showcase-collection-title { font-size: 1.5rem; margin-bottom: 2rem; }
                    .showcase-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
                    .theme-card {
                        display: block;
                        height: 100%;
                        padding: 1.75rem;
                        border-radius: 1.25rem;
                        background: #0f0f0f;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        color: inherit;
                        text-decoration: none;
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .theme-card:hover { transform: translateY(-4px); border-color: rgba(20, 184, 166, 0.5); }
                    .theme-swatches { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
                    .theme-swatch { width: 2rem; height: 2rem; border-radius: 50%; border: 1px solid rgba(255, 255, 255, 0.15); }
                    .theme-name { margin: 0 0 0.25rem; font-size: 1.25rem; }
                    .theme-tagline { margin: 0 0 1.5rem; color: rgba(255, 255, 255, 0.55); }
                    .theme-link { color: #14b8a6; font-size: 0.9rem; }
                "#}
            </style>
        </div>
    }
}
