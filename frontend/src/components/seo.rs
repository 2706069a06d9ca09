use wasm_bindgen::JsValue;
use web_sys::Document;
use yew::prelude::*;

use crate::config::{DEFAULT_SHARE_IMAGE, SITE_NAME, SITE_TAGLINE};

#[derive(Clone, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl SeoMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

pub fn page_title(page: &str) -> String {
    if page.is_empty() {
        format!("{} · {}", SITE_NAME, SITE_TAGLINE)
    } else {
        format!("{} · {}", page, SITE_NAME)
    }
}

fn upsert_meta(document: &Document, attribute: &str, key: &str, content: &str) -> Result<(), JsValue> {
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    let element = match document.query_selector(&selector)? {
        Some(element) => element,
        None => {
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("document has no head"))?;
            let element = document.create_element("meta")?;
            element.set_attribute(attribute, key)?;
            head.append_child(&element)?;
            element
        }
    };
    element.set_attribute("content", content)
}

fn apply(meta: &SeoMeta) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let title = page_title(&meta.title);
    document.set_title(&title);
    let image = meta.image.as_deref().unwrap_or(DEFAULT_SHARE_IMAGE);
    upsert_meta(&document, "name", "description", &meta.description)?;
    upsert_meta(&document, "property", "og:title", &title)?;
    upsert_meta(&document, "property", "og:description", &meta.description)?;
    upsert_meta(&document, "property", "og:image", image)?;
    Ok(())
}

/// Sets the document title and share tags while the page is mounted.
#[hook]
pub fn use_seo(meta: SeoMeta) {
    use_effect_with_deps(
        move |meta: &SeoMeta| {
            if let Err(e) = apply(meta) {
                log::warn!("could not update head tags: {:?}", e);
            }
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_site_name() {
        assert_eq!(page_title("Press"), "Press · Showfloor");
        assert!(page_title("").starts_with("Showfloor · "));
    }
}
