use yew::prelude::*;
use yew_router::components::Link;

use crate::components::reveal_section::RevealSection;
use crate::components::seo::{use_seo, SeoMeta};
use crate::data::companies::{directory, find_company};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(CompanyDirectory)]
pub fn company_directory() -> Html {
    use_seo(SeoMeta::new(
        "Companies",
        "Every exhibitor featured in this year's showcase.",
    ));

    html! {
        <div class="companies-page">
            <h1>{"Companies"}</h1>
            <RevealSection class={classes!("company-grid")}>
                { for directory().into_iter().map(|company| {
                    let count = company.products.len();
                    html! {
                        <Link<Route> to={Route::Company { slug: company.slug.clone() }} classes={classes!("company-card")}>
                            <h2>{ company.name }</h2>
                            <span>{ format!("{} {}", count, if count == 1 { "product" } else { "products" }) }</span>
                        </Link<Route>>
                    }
                }) }
            </RevealSection>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompanyProfileProps {
    pub slug: String,
}

#[function_component(CompanyProfile)]
pub fn company_profile(props: &CompanyProfileProps) -> Html {
    let company = use_memo(|slug: &String| find_company(slug), props.slug.clone());

    use_seo(match (*company).as_ref() {
        Some(company) => SeoMeta::new(
            company.name,
            format!("{} at this year's show: see their featured products.", company.name),
        ),
        None => SeoMeta::new("Not found", "That company is not part of this year's showcase."),
    });

    let Some(company) = (*company).as_ref() else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="company-page">
            <h1>{ company.name }</h1>
            <RevealSection class={classes!("company-products")}>
                { for company.products.iter().map(|product| html! {
                    <Link<Route> to={Route::Product { id: product.id.to_string() }} classes={classes!("company-product")}>
                        <img src={product.image} alt={product.name} loading="lazy" />
                        <h2>{ product.name }</h2>
                        <p>{ product.category_tag }</p>
                    </Link<Route>>
                }) }
            </RevealSection>
            <Link<Route> to={Route::Companies} classes={classes!("company-back")}>{"← All companies"}</Link<Route>>
        </div>
    }
}
