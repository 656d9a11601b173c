use folio_core::NoticeKind;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, HtmlAnchorElement};

use crate::dom;
use crate::notify;
use crate::reveal;
use crate::settings;

const HERO_SELECTOR: &str = ".hero-content";
const CURRENT_YEAR_ID: &str = "current-year";

pub(crate) fn update_current_year() {
    if let Some(element) = dom::element_by_id(CURRENT_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        element.set_text_content(Some(&year.to_string()));
    }
}

pub(crate) fn schedule_hero_intro() {
    Timeout::new(settings::HERO_INTRO_DELAY_MS, || {
        if let Some(hero) = dom::query_all(HERO_SELECTOR).into_iter().next() {
            reveal::reveal(&hero);
        }
    })
    .forget();
}

pub(crate) fn preload_images() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    for src in settings::PRELOAD_IMAGES {
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("as", "image");
        let _ = link.set_attribute("href", &settings::asset_url(src));
        let _ = head.append_child(&link);
    }
}

/// Logs uncaught page errors to the console.
pub(crate) fn log_page_errors() -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "error", |event| {
        let error = event
            .dyn_ref::<ErrorEvent>()
            .map(|event| event.error())
            .unwrap_or(JsValue::UNDEFINED);
        gloo::console::error!("Portfolio Error:", error);
    }))
}

pub(crate) fn download_resume() {
    if let Err(err) = click_download_link() {
        gloo::console::warn!("resume download failed", dom::js_err(err));
        return;
    }
    notify::show_notification("Resume download started!", NoticeKind::Success);
}

fn click_download_link() -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("missing document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(&settings::asset_url(settings::RESUME_PATH));
    link.set_download(settings::RESUME_FILE_NAME);
    link.set_target("_blank");
    body.append_child(&link)?;
    link.click();
    link.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn footer_year_is_filled_in() {
        let document = dom::document().expect("document available");
        let footer = document.create_element("span").expect("create span");
        footer.set_id(CURRENT_YEAR_ID);
        document.body().expect("body").append_child(&footer).expect("mount");

        update_current_year();

        let expected = js_sys::Date::new_0().get_full_year().to_string();
        assert_eq!(footer.text_content().as_deref(), Some(expected.as_str()));
        footer.remove();
    }

    #[wasm_bindgen_test]
    fn preload_links_are_added_to_head() {
        preload_images();
        let links = dom::query_all("link[rel=\"preload\"][as=\"image\"]");
        assert!(links
            .iter()
            .any(|link| link.get_attribute("href") == Some(settings::asset_url(settings::PRELOAD_IMAGES[0]))));
        for link in links {
            link.remove();
        }
    }
}
