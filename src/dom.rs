use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub(crate) fn html_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    document
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

pub(crate) fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn elements_of(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = element.style().set_property(property, value);
}

pub(crate) fn style_value(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|element| element.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
