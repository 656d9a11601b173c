use folio_core::notice::{DISMISS_AFTER_MS, REMOVE_AFTER_SLIDE_OUT_MS, SLIDE_IN_DELAY_MS};
use folio_core::NoticeKind;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::dom;

/// Floating toast in the top-right corner. Notifications stack; each one
/// slides in, stays for a few seconds and removes itself.
pub(crate) fn show_notification(message: &str, kind: NoticeKind) {
    if let Err(err) = mount_notification(message, kind) {
        gloo::console::warn!("notification not shown", dom::js_err(err));
    }
}

fn mount_notification(message: &str, kind: NoticeKind) -> Result<HtmlElement, JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("missing document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;
    let notification = dom::create_html(&document, "div", &kind.class_name())?;
    notification.style().set_css_text(&kind.initial_style());
    notification.set_text_content(Some(message));
    body.append_child(&notification)?;

    let slide_in = notification.clone();
    Timeout::new(SLIDE_IN_DELAY_MS, move || {
        dom::set_style(&slide_in, "transform", "translateX(0)");
    })
    .forget();

    let slide_out = notification.clone();
    Timeout::new(DISMISS_AFTER_MS, move || {
        dom::set_style(&slide_out, "transform", "translateX(100%)");
        Timeout::new(REMOVE_AFTER_SLIDE_OUT_MS, move || {
            slide_out.remove();
        })
        .forget();
    })
    .forget();
    Ok(notification)
}

#[cfg(test)]
pub(crate) fn visible_notifications(kind: NoticeKind) -> Vec<String> {
    dom::query_all(&format!(".notification-{}", kind.as_str()))
        .into_iter()
        .filter_map(|element| element.text_content())
        .collect()
}
