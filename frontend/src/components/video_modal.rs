use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::motion::scroll_lock::{close_reason, CloseReason, ModalGuard, ModalInput};
use crate::motion::video::embed_url_for;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub video_url: AttrValue,
    pub title: AttrValue,
    pub on_close: Callback<CloseReason>,
}

/// Takes the scroll lock only when there is a player to show.
fn open_player<G, E: std::fmt::Display>(
    embed: Option<&str>,
    acquire: impl FnOnce() -> Result<G, E>,
) -> Result<G, CloseReason> {
    if embed.is_none() {
        return Err(CloseReason::Unplayable);
    }
    acquire().map_err(|e| {
        log::debug!("scroll lock unavailable: {}", e);
        CloseReason::Refused
    })
}

/// Full-screen video player. Holds the page scroll lock and the Escape
/// binding for exactly as long as it is mounted. A link with no embeddable
/// player closes straight away without touching the lock.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let refused = use_state(|| false);
    let embed = embed_url_for(&props.video_url);

    {
        let on_close = props.on_close.clone();
        let refused = refused.clone();
        use_effect_with_deps(
            move |embed: &Option<String>| {
                let guard = match open_player(embed.as_deref(), ModalGuard::acquire) {
                    Ok(guard) => {
                        log::debug!("video modal holds scroll lock {:?}", guard.session());
                        Some(guard)
                    }
                    Err(reason) => {
                        log::warn!("video modal not opened: {:?}", reason);
                        if reason == CloseReason::Refused {
                            refused.set(true);
                        }
                        on_close.emit(reason);
                        None
                    }
                };

                let listener = match (&guard, web_sys::window().and_then(|w| w.document())) {
                    (Some(_), Some(document)) => {
                        let on_close = on_close.clone();
                        Some(EventListener::new(&document, "keydown", move |event| {
                            let reason = event
                                .dyn_ref::<KeyboardEvent>()
                                .and_then(|event| close_reason(ModalInput::Key(&event.key())));
                            if let Some(reason) = reason {
                                on_close.emit(reason);
                            }
                        }))
                    }
                    _ => None,
                };

                move || {
                    drop(listener);
                    drop(guard);
                }
            },
            embed.clone(),
        );
    }

    let Some(embed) = embed else {
        return html! {};
    };
    if *refused {
        return html! {};
    }

    let dismiss_on = |input: ModalInput<'static>| {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(reason) = close_reason(input) {
                on_close.emit(reason);
            }
        })
    };
    let on_backdrop = dismiss_on(ModalInput::Backdrop);
    let on_button = dismiss_on(ModalInput::CloseButton);
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="video-modal-backdrop" onclick={on_backdrop}>
            <div class="video-modal" role="dialog" aria-modal="true" aria-label={props.title.clone()} onclick={keep_open}>
                <button class="video-modal-close" aria-label="Close video" onclick={on_button}>{"×"}</button>
                <iframe
                    class="video-modal-player"
                    src={embed}
                    title={props.title.clone()}
                    allow="autoplay; encrypted-media; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll_lock::ScrollLockError;

    #[test]
    fn unplayable_link_never_takes_the_lock() {
        let embed = embed_url_for("https://vimeo.com/12345");
        let opened = open_player(embed.as_deref(), || -> Result<(), ScrollLockError> {
            panic!("lock taken for a link with no player")
        });
        assert_eq!(opened, Err(CloseReason::Unplayable));
    }

    #[test]
    fn playable_link_takes_the_lock_or_is_refused() {
        let embed = embed_url_for("https://youtu.be/AbCdEfGhIjK");
        assert_eq!(open_player(embed.as_deref(), || Ok::<_, ScrollLockError>(7)), Ok(7));
        assert_eq!(
            open_player(embed.as_deref(), || Err::<(), _>(ScrollLockError::Busy)),
            Err(CloseReason::Refused)
        );
    }

    #[test]
    fn clicks_map_to_their_close_reason() {
        assert_eq!(close_reason(ModalInput::Backdrop), Some(CloseReason::Backdrop));
        assert_eq!(close_reason(ModalInput::CloseButton), Some(CloseReason::Button));
    }
}
