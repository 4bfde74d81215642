use log::warn;
use yew::prelude::*;

use crate::config;

const DEFAULT_ASPECT: f64 = 16.0 / 9.0;

pub fn checked_aspect(aspect: f64) -> f64 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        warn!("Invalid video aspect {}, using 16:9", aspect);
        DEFAULT_ASPECT
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub media_id: AttrValue,
    #[prop_or(DEFAULT_ASPECT)]
    pub aspect: f64,
    #[prop_or_default]
    pub title: AttrValue,
}

/// Hosted video testimonial. The swatch shows until the player script
/// (loaded by index.html) upgrades the custom element.
#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let aspect = checked_aspect(props.aspect);
    let swatch = config::video_swatch_url(&props.media_id);

    html! {
        <div class="video-embed" style={format!("position: relative; aspect-ratio: {};", aspect)}>
            <img
                class="video-swatch"
                src={swatch}
                alt={props.title.clone()}
                style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; filter: blur(5px);"
            />
            <wistia-player media-id={props.media_id.clone()} aspect={aspect.to_string()}></wistia-player>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_falls_back_to_widescreen() {
        assert_eq!(checked_aspect(1.5), 1.5);
        assert_eq!(checked_aspect(0.0), DEFAULT_ASPECT);
        assert_eq!(checked_aspect(f64::INFINITY), DEFAULT_ASPECT);
    }
}
