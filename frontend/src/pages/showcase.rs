use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::intro::IntroOverlay;
use crate::components::jump_nav::{Chapter, JumpNav};
use crate::components::parallax_image::ParallaxImage;
use crate::components::reveal_section::RevealSection;
use crate::components::scrub_hero::ScrubHero;
use crate::components::seo::{use_seo, SeoMeta};
use crate::components::watch_demo::{demo_sections, WatchDemoButton};
use crate::data::companies::slugify;
use crate::data::products::{populated_categories, products_in, Category, Product, PRODUCTS};
use crate::motion::hooks::product_anchor;
use crate::Route;

#[derive(Properties, PartialEq)]
struct ProductSectionProps {
    product: &'static Product,
}

#[function_component(ProductSection)]
fn product_section(props: &ProductSectionProps) -> Html {
    let product = props.product;
    html! {
        <article id={product_anchor(product.id)} data-product-id={product.id} class="product-section">
            <ParallaxImage src={product.image} alt={product.name} />
            <div class="product-copy">
                <span class="product-tag">{ product.category_tag }</span>
                <h3>{ product.name }</h3>
                <Link<Route> to={Route::Company { slug: slugify(product.company) }} classes={classes!("product-company")}>
                    { product.company }
                </Link<Route>>
                <p>{ product.description }</p>
                <Link<Route> to={Route::Product { id: product.id.to_string() }} classes={classes!("product-more")}>
                    {"Read more →"}
                </Link<Route>>
            </div>
        </article>
    }
}

fn chapter_section(category: Category) -> Html {
    html! {
        <RevealSection id={category.anchor()} class={classes!("chapter")}>
            <h2 class="chapter-title">{ category.label() }</h2>
            { for products_in(category).map(|product| html! { <ProductSection {product} /> }) }
        </RevealSection>
    }
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    use_seo(SeoMeta::new(
        "",
        "A curated tour of the year's standout consumer tech: wearables, smart home, mobility, audio, health and computing.",
    ));

    let categories = populated_categories();
    let chapters: Vec<Chapter> = categories
        .iter()
        .map(|category| Chapter {
            id: category.anchor().into(),
            label: category.label().into(),
        })
        .collect();
    let sections = use_memo(|_| demo_sections(PRODUCTS), ());

    html! {
        <div class="showcase-page">
            <IntroOverlay />
            <ScrubHero
                title="Best of the Show Floor"
                subtitle="Twelve products worth leaving the booth for."
                background="/assets/hero/show-floor.jpg"
            />
            <JumpNav {chapters} />
            { for categories.into_iter().map(chapter_section) }
            <WatchDemoButton sections={Rc::clone(&sections)} />
        </div>
    }
}
