//! Guarded geometry reads. Every function falls back to a neutral value
//! instead of failing.

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::parallax::ViewportRect;
use super::MotionError;

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return FALLBACK_VIEWPORT;
    };
    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);
    (width, height)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_rect(element: &Element) -> ViewportRect {
    let rect = element.get_bounding_client_rect();
    ViewportRect {
        top: rect.top(),
        height: rect.height(),
        viewport_height: viewport_size().1,
    }
}

pub fn element_by_id(id: &str) -> Result<Element, MotionError> {
    web_sys::window()
        .ok_or(MotionError::NoWindow)?
        .document()
        .ok_or(MotionError::NoWindow)?
        .get_element_by_id(id)
        .ok_or_else(|| MotionError::MissingElement(id.to_owned()))
}

/// Top edge of the element in document coordinates.
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn scroll_to(top: f64, smooth: bool) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    win.scroll_to_with_scroll_to_options(&options);
}

/// Writes one inline style property, logging instead of failing.
pub fn set_style(element: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("failed to set {}: {:?}", property, e);
    }
}
