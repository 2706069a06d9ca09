use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::seo::{use_seo, SeoMeta};
use crate::utils::api::Api;

pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// First problem found, phrased for the visitor. Mirrors the server rules.
pub fn validate(form: &ContactForm) -> Result<(), String> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Please tell us your name.".to_string());
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(format!("Name must be at most {} characters.", NAME_MAX_CHARS));
    }
    let email_ok = EMAIL_RE
        .as_ref()
        .map(|re| re.is_match(form.email.trim()))
        .unwrap_or(false);
    if !email_ok {
        return Err("Please enter a valid email address.".to_string());
    }
    let length = form.message.trim().chars().count();
    if length < MESSAGE_MIN_CHARS {
        return Err(format!("Message must be at least {} characters.", MESSAGE_MIN_CHARS));
    }
    if length > MESSAGE_MAX_CHARS {
        return Err(format!("Message must be at most {} characters.", MESSAGE_MAX_CHARS));
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, PartialEq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_seo(SeoMeta::new(
        "Contact",
        "Exhibitors, press and readers: get in touch with the editorial team.",
    ));

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let company_ref = use_node_ref();
    let message_ref = use_node_ref();
    let website_ref = use_node_ref();
    let state = use_state(|| SendState::Idle);

    let onsubmit = {
        let refs = (
            name_ref.clone(),
            email_ref.clone(),
            company_ref.clone(),
            message_ref.clone(),
            website_ref.clone(),
        );
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SendState::Sending {
                return;
            }
            let input = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default()
            };
            let form = ContactForm {
                name: input(&refs.0).trim().to_string(),
                email: input(&refs.1).trim().to_string(),
                company: non_empty(input(&refs.2)),
                message: refs
                    .3
                    .cast::<HtmlTextAreaElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                website: non_empty(input(&refs.4)),
            };
            if let Err(problem) = validate(&form) {
                state.set(SendState::Failed(problem));
                return;
            }

            state.set(SendState::Sending);
            let state = state.clone();
            spawn_local(async move {
                let request = match Api::post("/api/contact").json(&form) {
                    Ok(request) => request,
                    Err(e) => {
                        log::error!("could not encode contact form: {}", e);
                        state.set(SendState::Failed("Something went wrong. Please try again.".to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => state.set(SendState::Sent),
                    Ok(response) if response.status() == 429 => state.set(SendState::Failed(
                        "Too many messages. Please wait a minute and try again.".to_string(),
                    )),
                    Ok(response) => {
                        log::warn!("contact form rejected with status {}", response.status());
                        state.set(SendState::Failed("We could not send your message. Please try again.".to_string()));
                    }
                    Err(e) => {
                        log::warn!("contact form request failed: {:?}", e);
                        state.set(SendState::Failed("Network error. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    if *state == SendState::Sent {
        return html! {
            <div class="contact-page">
                <h1>{"Thanks!"}</h1>
                <p>{"Your message is on its way. We usually reply within two working days."}</p>
            </div>
        };
    }

    let sending = *state == SendState::Sending;

    html! {
        <div class="contact-page">
            <h1>{"Contact"}</h1>
            <form class="contact-form" {onsubmit} novalidate=true>
                <label>{"Name"}<input ref={name_ref} type="text" name="name" maxlength="100" required=true /></label>
                <label>{"Email"}<input ref={email_ref} type="email" name="email" required=true /></label>
                <label>{"Company (optional)"}<input ref={company_ref} type="text" name="company" /></label>
                <label>{"Message"}<textarea ref={message_ref} name="message" rows="6" maxlength="5000" required=true /></label>
                <input ref={website_ref} class="contact-honeypot" type="text" name="website" tabindex="-1" autocomplete="off" aria-hidden="true" />
                if let SendState::Failed(problem) = &*state {
                    <p class="contact-error" role="alert">{ problem }</p>
                }
                <button type="submit" disabled={sending}>
                    { if sending { "Sending…" } else { "Send message" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: None,
            message: "Can we book a booth tour?".into(),
            website: None,
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn rejects_missing_or_oversized_fields() {
        let mut form = filled();
        form.name = "   ".into();
        assert!(validate(&form).is_err());

        let mut form = filled();
        form.name = "x".repeat(NAME_MAX_CHARS + 1);
        assert!(validate(&form).is_err());

        let mut form = filled();
        form.email = "ada at example".into();
        assert!(validate(&form).is_err());

        let mut form = filled();
        form.message = "hi".into();
        assert!(validate(&form).is_err());

        let mut form = filled();
        form.message = "x".repeat(MESSAGE_MAX_CHARS + 1);
        assert!(validate(&form).is_err());
    }

    #[test]
    fn optional_fields_are_left_out_of_the_payload() {
        let json = serde_json::to_value(filled()).expect("serialises");
        assert!(json.get("company").is_none());
        assert!(json.get("website").is_none());
        assert_eq!(non_empty("  Acme ".into()), Some("Acme".into()));
        assert_eq!(non_empty("   ".into()), None);
    }
}
