use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{INTRO_DURATION_MS, INTRO_SESSION_KEY, SITE_NAME, SITE_TAGLINE};
use crate::motion::{use_motion_capabilities, MotionCapabilities};

fn intro_already_shown() -> Option<bool> {
    let storage = web_sys::window()?.session_storage().ok().flatten()?;
    Some(matches!(storage.get_item(INTRO_SESSION_KEY), Ok(Some(_))))
}

fn remember_intro_shown() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Err(e) = storage.set_item(INTRO_SESSION_KEY, "1") {
                log::warn!("could not remember intro: {:?}", e);
            }
        }
    }
}

/// The intro plays once per browser session, and only when motion is allowed
/// and the session can be remembered.
pub fn should_show_intro(capabilities: &MotionCapabilities, already_shown: Option<bool>) -> bool {
    capabilities.motion_enabled()
        && capabilities.can_use_session_storage()
        && already_shown == Some(false)
}

#[function_component(IntroOverlay)]
pub fn intro_overlay() -> Html {
    let capabilities = use_motion_capabilities();
    let showing = use_state(|| should_show_intro(&capabilities, intro_already_shown()));
    let active_now = *showing;

    {
        let showing = showing.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let timer = active.then(|| {
                    remember_intro_shown();
                    Timeout::new(INTRO_DURATION_MS, move || showing.set(false))
                });
                move || drop(timer)
            },
            active_now,
        );
    }

    if !active_now {
        return html! {};
    }

    let dismiss = {
        let showing = showing.clone();
        Callback::from(move |_: MouseEvent| showing.set(false))
    };

    html! {
        <div class="intro-overlay" onclick={dismiss} role="presentation">
            <div class="intro-mark">{ SITE_NAME }</div>
            <div class="intro-tagline">{ SITE_TAGLINE }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::capabilities::Probe;

    fn capable() -> MotionCapabilities {
        MotionCapabilities {
            reduced_motion: Probe::Reported(false),
            hardware_concurrency: Probe::Reported(8),
            device_memory_gb: Probe::Reported(8.0),
            intersection_observer: Probe::Reported(true),
            animation_frame: Probe::Reported(true),
            session_storage: Probe::Reported(true),
        }
    }

    #[test]
    fn shows_once_per_session() {
        assert!(should_show_intro(&capable(), Some(false)));
        assert!(!should_show_intro(&capable(), Some(true)));
    }

    #[test]
    fn skipped_without_storage_or_motion() {
        assert!(!should_show_intro(&capable(), None));

        let mut no_storage = capable();
        no_storage.session_storage = Probe::Unsupported;
        assert!(!should_show_intro(&no_storage, Some(false)));

        let mut reduced = capable();
        reduced.reduced_motion = Probe::Reported(true);
        assert!(!should_show_intro(&reduced, Some(false)));

        assert!(!should_show_intro(&MotionCapabilities::unavailable(), Some(false)));
    }
}
