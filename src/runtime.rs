use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;

use crate::contact_form::{ContactForm, FetchTransport};
use crate::guide;
use crate::mobile_menu::MobileMenu;
use crate::nav::NavController;
use crate::page;
use crate::reveal::Reveal;
use crate::settings;

/// Everything the page keeps alive after startup.
struct Page {
    _nav: Rc<NavController>,
    menu: Rc<MobileMenu>,
    _reveal: Reveal,
    _contact: Option<Rc<ContactForm>>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

/// Starts the page now, or once the document has finished parsing.
pub(crate) fn start_when_ready() {
    let Some(document) = crate::dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| start()).forget();
    } else {
        start();
    }
}

fn start() {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        return;
    }
    gloo::console::log!("portfolio: starting");
    let nav = NavController::install();
    let menu = MobileMenu::install();
    let reveal = Reveal::install();
    let transport = Rc::new(FetchTransport::new(settings::contact_endpoint()));
    let contact = ContactForm::install(transport);
    if contact.is_none() {
        gloo::console::log!("portfolio: no contact form on this page");
    }
    page::update_current_year();
    page::preload_images();
    page::schedule_hero_intro();
    let listeners = page::log_page_errors().into_iter().collect();
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(Page {
            _nav: nav,
            menu,
            _reveal: reveal,
            _contact: contact,
            _listeners: listeners,
        });
    });
    spawn_local(guide::start());
}

pub(crate) fn with_menu(action: impl FnOnce(&MobileMenu)) {
    let menu = PAGE.with(|slot| slot.borrow().as_ref().map(|page| Rc::clone(&page.menu)));
    if let Some(menu) = menu {
        action(&menu);
    }
}
