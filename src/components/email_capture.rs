use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::config;
use crate::content::Newsletter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SubmitState {
    Idle,
    Sending,
    Subscribed,
}

/// Loose shape check; the browser's `type="email"` does the rest.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct EmailCaptureProps {
    pub copy: Newsletter,
}

/// Newsletter sign-up. Nothing leaves the page: submitting waits briefly,
/// then thanks the visitor and clears the field.
#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let email = use_state(String::new);
    let state = use_state(|| SubmitState::Idle);
    let is_mounted = use_is_mounted();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let (email, state) = (email.clone(), state.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubmitState::Sending || !looks_like_email(&email) {
                debug!("Ignoring newsletter submit");
                return;
            }
            state.set(SubmitState::Sending);
            let (email, state, is_mounted) = (email.clone(), state.clone(), is_mounted.clone());
            spawn_local(async move {
                TimeoutFuture::new(config::EMAIL_SUBMIT_DELAY_MS).await;
                if is_mounted() {
                    info!("Newsletter signup recorded");
                    email.set(String::new());
                    state.set(SubmitState::Subscribed);
                }
            });
        })
    };

    let copy = &props.copy;
    html! {
        <div class="email-capture">
            <h3>{ copy.heading.clone() }</h3>
            <p class="email-capture-body">{ copy.body.clone() }</p>
            if *state == SubmitState::Subscribed {
                <div class="email-capture-success">
                    <p class="email-capture-success-title">{ copy.success.clone() }</p>
                    <p class="email-capture-success-note">{ copy.success_note.clone() }</p>
                </div>
            } else {
                <form class="email-capture-form" {onsubmit}>
                    <input
                        type="email"
                        required=true
                        placeholder={copy.placeholder.clone()}
                        value={(*email).clone()}
                        {oninput}
                        disabled={*state == SubmitState::Sending}
                    />
                    <button type="submit" disabled={*state == SubmitState::Sending}>
                        { if *state == SubmitState::Sending { copy.sending.clone() } else { copy.button.clone() } }
                    </button>
                </form>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(looks_like_email("name@company.com"));
        assert!(looks_like_email("  ea.team@atlas.co.uk "));
    }

    #[test]
    fn rejects_incomplete_addresses() {
        for value in ["", "name", "@company.com", "name@company", "name@.com", "name@company."] {
            assert!(!looks_like_email(value), "{value}");
        }
    }
}
