use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo::{use_seo, SeoMeta};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_seo(SeoMeta::new("Not found", "This page is not on the show floor."));

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This booth is empty. The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("not-found-home")}>{"Back to the showcase"}</Link<Route>>
        </div>
    }
}
