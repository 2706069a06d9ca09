use yew::prelude::*;

use crate::motion::{use_motion_capabilities, use_parallax};

#[derive(Properties, PartialEq)]
pub struct ParallaxImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(ParallaxImage)]
pub fn parallax_image(props: &ParallaxImageProps) -> Html {
    let node = use_node_ref();
    let capabilities = use_motion_capabilities();
    use_parallax(node.clone(), capabilities);

    html! {
        <div class="parallax-frame">
            <img ref={node} class="parallax-image" src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
        </div>
    }
}
