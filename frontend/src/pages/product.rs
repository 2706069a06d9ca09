use yew::prelude::*;
use yew_router::components::Link;

use crate::components::reveal_section::RevealSection;
use crate::components::seo::{use_seo, SeoMeta};
use crate::components::video_modal::VideoModal;
use crate::data::companies::slugify;
use crate::data::products::find_product;
use crate::motion::scroll_lock::CloseReason;
use crate::motion::video::extract_video_id;
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: String,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let product = find_product(&props.id);
    let playing = use_state(|| false);

    use_seo(match product {
        Some(product) => SeoMeta::new(product.name, product.description).with_image(product.image),
        None => SeoMeta::new("Not found", "That product is not part of this year's showcase."),
    });

    let Some(product) = product else {
        return html! { <NotFound /> };
    };

    let demo = product
        .youtube
        .filter(|url| extract_video_id(url).is_some());

    let open_demo = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(true))
    };
    let on_close = {
        let playing = playing.clone();
        Callback::from(move |reason: CloseReason| {
            log::debug!("product demo closed: {:?}", reason);
            playing.set(false);
        })
    };

    html! {
        <div class="product-page">
            <img class="product-hero" src={product.image} alt={product.name} />
            <RevealSection class={classes!("product-body")}>
                <span class="product-tag">{ format!("{} · {}", product.category.label(), product.category_tag) }</span>
                <h1>{ product.name }</h1>
                <Link<Route> to={Route::Company { slug: slugify(product.company) }} classes={classes!("product-company")}>
                    { product.company }
                </Link<Route>>
                <p>{ product.description }</p>
                <div class="product-actions">
                    if demo.is_some() {
                        <button class="product-demo" onclick={open_demo}>{"Watch demo"}</button>
                    }
                    if let Some(website) = product.website {
                        <a class="product-website" href={website} target="_blank" rel="noopener noreferrer">
                            {"Visit website"}
                        </a>
                    }
                </div>
                <Link<Route> to={Route::Home} classes={classes!("product-back")}>{"← Back to the showcase"}</Link<Route>>
            </RevealSection>
            if let (Some(url), true) = (demo, *playing) {
                <VideoModal video_url={url} title={format!("{} demo", product.name)} {on_close} />
            }
        </div>
    }
}
