use yew::prelude::*;

use crate::motion::{use_motion_capabilities, use_scroll_scrub, ScrubNodes};

#[derive(Properties, PartialEq)]
pub struct ScrubHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub background: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height hero whose title lifts and fades as the page scrolls past it.
#[function_component(ScrubHero)]
pub fn scrub_hero(props: &ScrubHeroProps) -> Html {
    let nodes = use_memo(|_| ScrubNodes::default(), ());
    let capabilities = use_motion_capabilities();
    use_scroll_scrub((*nodes).clone(), capabilities);

    let background_style = format!("background-image: url('{}');", props.background);

    html! {
        <header ref={nodes.hero.clone()} class="scrub-hero">
            <div ref={nodes.background.clone()} class="scrub-hero-background" style={background_style}></div>
            <div class="scrub-hero-content">
                <h1 ref={nodes.title.clone()} class="scrub-hero-title">{ props.title.clone() }</h1>
                <p ref={nodes.subtitle.clone()} class="scrub-hero-subtitle">{ props.subtitle.clone() }</p>
                { for props.children.iter() }
            </div>
        </header>
    }
}
