use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes={classes!("site-logo")}>{ SITE_NAME }</Link<Route>>
            <nav class="site-nav" aria-label="Main">
                <Link<Route> to={Route::Companies}>{"Companies"}</Link<Route>>
                <Link<Route> to={Route::Magazine}>{"Magazine"}</Link<Route>>
                <Link<Route> to={Route::Podcast}>{"Podcast"}</Link<Route>>
                <Link<Route> to={Route::Press}>{"Press"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes={classes!("site-nav-cta")}>{"Contact"}</Link<Route>>
            </nav>
        </header>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{ format!("© 2026 {}. Product names and marks belong to their owners.", SITE_NAME) }</p>
            <Link<Route> to={Route::Press}>{"Press kit"}</Link<Route>>
        </footer>
    }
}
