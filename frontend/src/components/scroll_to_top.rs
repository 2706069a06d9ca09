use yew::prelude::*;
use yew_router::prelude::*;

/// Jumps back to the top whenever the route path changes.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_owned());
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );
    html! {}
}
