use yew::prelude::*;

use crate::motion::{use_motion_capabilities, use_reveal};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A section that fades and slides in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let capabilities = use_motion_capabilities();
    let visible = use_reveal(node.clone(), capabilities);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
