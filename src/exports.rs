//! Functions the page markup calls from inline handlers.

use folio_core::NoticeKind;
use wasm_bindgen::prelude::*;

use crate::{nav, page, runtime};

#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    nav::scroll_to_section(section_id);
}

#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    runtime::with_menu(|menu| menu.close());
}

/// `kind` is one of `success`, `error` or `info`; anything else shows as info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .map(NoticeKind::from_name)
        .unwrap_or_default();
    crate::notify::show_notification(message, kind);
}

#[wasm_bindgen(js_name = downloadResume)]
pub fn download_resume() {
    page::download_resume();
}
