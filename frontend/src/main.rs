use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod motion;
mod components {
    pub mod intro;
    pub mod jump_nav;
    pub mod layout;
    pub mod parallax_image;
    pub mod reveal_section;
    pub mod scroll_to_top;
    pub mod scrub_hero;
    pub mod seo;
    pub mod video_modal;
    pub mod watch_demo;
}
mod pages {
    pub mod companies;
    pub mod contact;
    pub mod editorial;
    pub mod not_found;
    pub mod product;
    pub mod showcase;
}
mod utils {
    pub mod api;
}

use components::layout::{SiteFooter, SiteHeader};
use components::scroll_to_top::ScrollToTop;
use pages::{
    companies::{CompanyDirectory, CompanyProfile},
    contact::Contact,
    editorial::{Magazine, Podcast, Press},
    not_found::NotFound,
    product::ProductDetail,
    showcase::Showcase,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products/:id")]
    Product { id: String },
    #[at("/companies")]
    Companies,
    #[at("/companies/:slug")]
    Company { slug: String },
    #[at("/magazine")]
    Magazine,
    #[at("/podcast")]
    Podcast,
    #[at("/press")]
    Press,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Showcase /> },
        Route::Product { id } => html! { <ProductDetail {id} /> },
        Route::Companies => html! { <CompanyDirectory /> },
        Route::Company { slug } => html! { <CompanyProfile {slug} /> },
        Route::Magazine => html! { <Magazine /> },
        Route::Podcast => html! { <Podcast /> },
        Route::Press => html! { <Press /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <SiteHeader />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <SiteFooter />
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
