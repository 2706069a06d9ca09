use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::active_section::jump_target;
use crate::motion::{dom, use_active_section, use_motion_capabilities};

#[derive(Clone, PartialEq)]
pub struct Chapter {
    pub id: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct JumpNavProps {
    pub chapters: Vec<Chapter>,
}

fn chapter_href(id: &str) -> String {
    format!("#{}", id)
}

/// Sticky chapter bar highlighting the chapter currently under it.
#[function_component(JumpNav)]
pub fn jump_nav(props: &JumpNavProps) -> Html {
    let nav = use_node_ref();
    let capabilities = use_motion_capabilities();
    let ids: Vec<String> = props.chapters.iter().map(|c| c.id.to_string()).collect();
    let active = use_active_section(ids);

    let links: Vec<Html> = props.chapters.iter().map(|chapter| {
        let is_active = active.as_deref() == Some(chapter.id.as_str());
        let onclick = {
            let nav = nav.clone();
            let id = chapter.id.clone();
            let smooth = capabilities.motion_enabled();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let element = match dom::element_by_id(&id) {
                    Ok(element) => element,
                    Err(e) => {
                        log::warn!("cannot jump: {}", e);
                        return;
                    }
                };
                let nav_height = nav
                    .cast::<HtmlElement>()
                    .map(|nav| f64::from(nav.offset_height()))
                    .unwrap_or(0.0);
                dom::scroll_to(jump_target(dom::document_top(&element), nav_height), smooth);
            })
        };
        html! {
            <a
                href={chapter_href(&chapter.id)}
                class={classes!("jump-link", is_active.then_some("active"))}
                aria-current={is_active.then_some("true")}
                {onclick}
            >
                { chapter.label.clone() }
            </a>
        }
    }).collect();

    html! {
        <nav ref={nav} class="jump-nav" aria-label="Chapters">
            { for links }
        </nav>
    }
}
