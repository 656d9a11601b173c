use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;

use crate::dom;

const TRIGGER_ID: &str = "mobile-menu-btn";
const MENU_ID: &str = "mobile-menu";
const HAMBURGER_ICON_ID: &str = "hamburger-icon";
const CLOSE_ICON_ID: &str = "close-icon";
const MOBILE_LINK_SELECTOR: &str = ".mobile-nav-link";
const HIDDEN: &str = "hidden";

pub(crate) struct MobileMenu {
    open: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

impl MobileMenu {
    pub(crate) fn install() -> Rc<Self> {
        let menu = Rc::new(Self {
            open: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        });
        menu.install_listeners();
        menu
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        if let Some(trigger) = dom::element_by_id(TRIGGER_ID) {
            let menu = Rc::clone(self);
            listeners.push(EventListener::new(&trigger, "click", move |_event| {
                menu.toggle();
            }));
        }
        for link in dom::query_all(MOBILE_LINK_SELECTOR) {
            let menu = Rc::clone(self);
            listeners.push(EventListener::new(&link, "click", move |_event| {
                menu.close();
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.open.get()
    }

    pub(crate) fn toggle(&self) {
        let open = !self.open.get();
        self.open.set(open);
        render(open);
    }

    pub(crate) fn close(&self) {
        self.open.set(false);
        render(false);
    }
}

fn render(open: bool) {
    if let Some(panel) = dom::element_by_id(MENU_ID) {
        set_hidden(&panel, !open);
    }
    if let Some(icon) = dom::element_by_id(HAMBURGER_ICON_ID) {
        set_hidden(&icon, open);
    }
    if let Some(icon) = dom::element_by_id(CLOSE_ICON_ID) {
        set_hidden(&icon, !open);
    }
}

fn set_hidden(element: &web_sys::Element, hidden: bool) {
    if hidden {
        dom::add_class(element, HIDDEN);
    } else {
        dom::remove_class(element, HIDDEN);
    }
}
