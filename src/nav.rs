use std::cell::RefCell;
use std::rc::Rc;

use folio_core::nav::{
    is_scrolled, scroll_target, section_at_active_line, NavChanges, NavState, VerticalSpan,
    SCROLL_DEBOUNCE_MS,
};
use folio_core::SectionId;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

const NAVBAR_ID: &str = "navbar";
const NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-nav-link";
const ACTIVE_LINK_COLOR: &str = "var(--primary)";

pub(crate) struct NavController {
    state: RefCell<NavState>,
    debounce: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl NavController {
    fn new() -> Self {
        Self {
            state: RefCell::new(NavState::default()),
            debounce: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn install() -> Rc<Self> {
        let controller = Rc::new(Self::new());
        controller.install_listeners();
        controller.sync();
        highlight_links(controller.active());
        controller
    }

    pub(crate) fn active(&self) -> SectionId {
        self.state.borrow().active
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let controller = Rc::clone(self);
        let listener = EventListener::new(&window, "scroll", move |_event| {
            controller.schedule_sync();
        });
        self.listeners.borrow_mut().push(listener);
    }

    /// Replacing the pending timeout cancels it.
    fn schedule_sync(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        let timeout = Timeout::new(SCROLL_DEBOUNCE_MS, move || {
            controller.sync();
        });
        *self.debounce.borrow_mut() = Some(timeout);
    }

    pub(crate) fn sync(&self) -> NavChanges {
        let Some(window) = web_sys::window() else {
            return NavChanges::default();
        };
        let scrolled = is_scrolled(window.scroll_y().unwrap_or(0.0));
        let at_line = section_at_active_line(section_span);
        let changes = self.state.borrow_mut().observe(scrolled, at_line);
        if let Some(scrolled) = changes.scrolled {
            style_navbar(scrolled);
        }
        if let Some(active) = changes.active {
            highlight_links(active);
        }
        changes
    }
}

fn section_span(id: SectionId) -> Option<VerticalSpan> {
    let element = dom::element_by_id(id.as_str())?;
    let rect = element.get_bounding_client_rect();
    Some(VerticalSpan {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn style_navbar(scrolled: bool) {
    let Some(navbar) = dom::element_by_id(NAVBAR_ID) else {
        return;
    };
    if scrolled {
        dom::add_class(&navbar, "scrolled");
        dom::set_style(&navbar, "background-color", "rgba(255, 255, 255, 0.95)");
        dom::set_style(&navbar, "backdrop-filter", "blur(10px)");
        dom::set_style(&navbar, "box-shadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)");
        dom::set_style(&navbar, "border-bottom", "1px solid hsl(220, 13%, 91%)");
    } else {
        dom::remove_class(&navbar, "scrolled");
        dom::set_style(&navbar, "background-color", "transparent");
        dom::set_style(&navbar, "box-shadow", "none");
        dom::set_style(&navbar, "border-bottom", "none");
    }
}

fn highlight_links(active: SectionId) {
    for link in dom::query_all(NAV_LINK_SELECTOR) {
        let is_active = link.get_attribute("data-section").as_deref() == Some(active.as_str());
        if is_active {
            dom::add_class(&link, "active");
            dom::set_style(&link, "color", ACTIVE_LINK_COLOR);
        } else {
            dom::remove_class(&link, "active");
            dom::set_style(&link, "color", "");
        }
    }
}

/// Smooth-scrolls so the section's top lands just below the fixed navbar.
/// Unknown ids and missing sections are ignored.
pub(crate) fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = dom::element_by_id(section_id.trim()) else {
        return;
    };
    let Ok(section) = section.dyn_into::<HtmlElement>() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_links(root_id: &str) -> Element {
        let document = dom::document().expect("document available");
        let root = document.create_element("nav").expect("create nav");
        root.set_id(root_id);
        for id in folio_core::SECTION_IDS {
            let link = document.create_element("a").expect("create link");
            link.set_class_name("nav-link");
            link.set_attribute("data-section", id.as_str()).expect("data-section");
            root.append_child(&link).expect("append link");
            let mobile = document.create_element("a").expect("create mobile link");
            mobile.set_class_name("mobile-nav-link");
            mobile.set_attribute("data-section", id.as_str()).expect("data-section");
            root.append_child(&mobile).expect("append mobile link");
        }
        document.body().expect("body").append_child(&root).expect("mount nav");
        root
    }

    fn active_sections(root: &Element) -> Vec<String> {
        let list = root.query_selector_all(".active").expect("query");
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|link| link.get_attribute("data-section"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn highlight_marks_desktop_and_mobile_link_only() {
        let root = mount_links("nav-test-highlight");

        highlight_links(SectionId::Skills);
        assert_eq!(active_sections(&root), vec!["skills", "skills"]);

        highlight_links(SectionId::Contact);
        assert_eq!(active_sections(&root), vec!["contact", "contact"]);
        let stale = root
            .query_selector("[data-section=\"skills\"]")
            .expect("query")
            .expect("skills link");
        assert_eq!(dom::style_value(&stale, "color"), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn navbar_style_follows_scrolled_flag() {
        let document = dom::document().expect("document available");
        let navbar = document.create_element("nav").expect("create navbar");
        navbar.set_id(NAVBAR_ID);
        document.body().expect("body").append_child(&navbar).expect("mount navbar");

        style_navbar(true);
        assert!(dom::has_class(&navbar, "scrolled"));
        assert_eq!(dom::style_value(&navbar, "border-bottom-style"), "solid");

        style_navbar(false);
        assert!(!dom::has_class(&navbar, "scrolled"));
        assert_eq!(dom::style_value(&navbar, "background-color"), "transparent");
        navbar.remove();
    }

    fn mount_section(root: &Element, id: SectionId) -> Element {
        let document = dom::document().expect("document available");
        let section = document.create_element("section").expect("create section");
        section.set_id(id.as_str());
        root.append_child(&section).expect("append section");
        section
    }

    fn place(section: &Element, top_px: i32, height_px: i32) {
        section
            .set_attribute(
                "style",
                &format!("position: fixed; left: 0; top: {top_px}px; height: {height_px}px; width: 10px;"),
            )
            .expect("style");
    }

    #[wasm_bindgen_test]
    fn sync_moves_highlight_to_section_on_active_line() {
        let root = mount_links("nav-test-sync");
        let home = mount_section(&root, SectionId::Home);
        let about = mount_section(&root, SectionId::About);
        place(&home, -600, 200);
        place(&about, 0, 300);

        let controller = NavController::new();
        let changes = controller.sync();
        assert_eq!(changes.active, Some(SectionId::About));
        assert_eq!(controller.active(), SectionId::About);
        assert_eq!(active_sections(&root), vec!["about", "about"]);

        place(&about, 400, 300);
        let changes = controller.sync();
        assert_eq!(changes.active, None);
        assert_eq!(controller.active(), SectionId::About);
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn scroll_events_sync_after_debounce() {
        console_error_panic_hook::set_once();
        let root = mount_links("nav-test-scroll");
        let about = mount_section(&root, SectionId::About);
        let skills = mount_section(&root, SectionId::Skills);
        place(&about, 0, 300);
        place(&skills, 600, 300);

        let controller = NavController::install();
        assert_eq!(active_sections(&root), vec!["about", "about"]);

        place(&about, -600, 300);
        place(&skills, 0, 300);
        let window = web_sys::window().expect("window");
        let scroll = web_sys::Event::new("scroll").expect("scroll event");
        window.dispatch_event(&scroll).expect("dispatch scroll");
        window.dispatch_event(&scroll).expect("dispatch scroll");
        assert_eq!(controller.active(), SectionId::About);

        gloo::timers::future::TimeoutFuture::new(SCROLL_DEBOUNCE_MS + 50).await;
        assert_eq!(controller.active(), SectionId::Skills);
        assert_eq!(active_sections(&root), vec!["skills", "skills"]);

        controller.listeners.borrow_mut().clear();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn scroll_to_missing_section_is_a_no_op() {
        scroll_to_section("does-not-exist");
    }
}
