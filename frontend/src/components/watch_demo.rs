use std::rc::Rc;

use yew::prelude::*;

use crate::components::video_modal::VideoModal;
use crate::data::products::Product;
use crate::motion::most_visible::{DemoSection, DemoTarget};
use crate::motion::scroll_lock::CloseReason;
use crate::motion::video::extract_video_id;
use crate::motion::{use_desktop_width, use_most_visible, use_motion_capabilities};

/// Sections the floating button can point at. Links that are not
/// recognised video links are dropped here so no dead button is offered.
pub fn demo_sections<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<DemoSection> {
    products
        .into_iter()
        .map(|product| DemoSection {
            product_id: product.id.to_owned(),
            product_name: product.name.to_owned(),
            video_url: product
                .youtube
                .filter(|url| extract_video_id(url).is_some())
                .map(str::to_owned),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct WatchDemoButtonProps {
    pub sections: Rc<Vec<DemoSection>>,
}

/// Floating "watch demo" button following the product section that fills
/// most of the viewport. Desktop only.
#[function_component(WatchDemoButton)]
pub fn watch_demo_button(props: &WatchDemoButtonProps) -> Html {
    let capabilities = use_motion_capabilities();
    let desktop = use_desktop_width();
    let target = use_most_visible(props.sections.clone(), capabilities, desktop);
    let playing = use_state(|| None::<DemoTarget>);

    if !desktop {
        return html! {};
    }

    let on_close = {
        let playing = playing.clone();
        Callback::from(move |reason: CloseReason| {
            log::debug!("demo video closed: {:?}", reason);
            playing.set(None);
        })
    };

    let button = match target {
        Some(target) => {
            let onclick = {
                let playing = playing.clone();
                let target = target.clone();
                Callback::from(move |_: MouseEvent| playing.set(Some(target.clone())))
            };
            html! {
                <button class="watch-demo-fab" {onclick}>
                    <span class="watch-demo-icon" aria-hidden="true">{"▶"}</span>
                    <span class="watch-demo-label">{ format!("Watch the {} demo", target.product_name) }</span>
                </button>
            }
        }
        None => html! {},
    };

    html! {
        <>
            { button }
            if let Some(playing) = (*playing).clone() {
                <VideoModal
                    video_url={playing.video_url.clone()}
                    title={format!("{} demo", playing.product_name)}
                    {on_close}
                />
            }
        </>
    }
}
