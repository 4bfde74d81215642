use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod themes;
mod motion {
    pub mod easing;
    pub mod error;
    pub mod frame;
    pub mod geometry;
    pub mod pointer;
    pub mod progress;
    pub mod reveal;
    pub mod spring;
    pub mod tween;
    pub mod visual;
}
mod hooks {
    pub mod animation_frame;
    pub mod counter;
    pub mod in_view;
    pub mod scroll;
    pub mod spring;
    pub mod viewport;
}
mod components {
    pub mod counter;
    pub mod email_capture;
    pub mod media;
    pub mod nav;
    pub mod pointer;
    pub mod reveal;
    pub mod scroll;
}
mod pages {
    pub mod concept;
    pub mod index;
}

use content::Content;
use pages::{concept::ConceptPage, index::Index};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Index,
    #[at("/:slug")]
    Concept { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Index => {
            info!("Rendering Index page");
            html! { <Index /> }
        }
        Route::Concept { slug } => match themes::find(&slug) {
            Some(theme) => {
                info!("Rendering {} concept page", theme.name);
                // Keyed so switching concepts remounts every animation.
                html! { <ConceptPage key={theme.slug} theme={theme} /> }
            }
            None => {
                warn!("No concept named {}", slug);
                html! { <NotFound /> }
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: system-ui, sans-serif;">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Index}>{ "See all designs" }</Link<Route>>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let content = use_state(|| match Content::load() {
        Ok(content) => Some(Rc::new(content)),
        Err(err) => {
            error!("Failed to load page content: {}", err);
            None
        }
    });

    let router = html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    };

    match (*content).clone() {
        Some(content) => html! {
            <ContextProvider<Rc<Content>> context={content}>
                { router }
            </ContextProvider<Rc<Content>>>
        },
        None => router,
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting showcase");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_route() {
        for theme in &themes::THEMES {
            let route = Route::recognize(&theme.path());
            assert_eq!(route, Some(Route::Concept { slug: theme.slug.to_string() }));
            assert_eq!(Route::Concept { slug: theme.slug.to_string() }.to_path(), theme.path());
        }
    }

    #[test]
    fn root_is_the_index() {
        assert_eq!(Route::recognize("/"), Some(Route::Index));
    }

    #[test]
    fn nested_paths_are_not_found() {
        assert_eq!(Route::recognize("/v1/extra"), Some(Route::NotFound));
    }
}
