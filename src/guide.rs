//! Section character guide.
//!
//! Every page section that exists gets one decorative character with a
//! speech bubble. Characters appear while their section is in view, the most
//! recently entered section holds the `active` character, and bubbles open on
//! entry, hover or click and close on their own after a few seconds.
//!
//! Nothing is built until the guide settings have settled, so positions and
//! messages are only ever read from a final [`GuideSettings`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use folio_core::guide::{
    BUBBLE_AUTO_HIDE_MS, BUBBLE_SHOW_DELAY_MS, RESIZE_DEBOUNCE_MS, VISIBILITY_ROOT_MARGIN,
    VISIBILITY_THRESHOLD,
};
use folio_core::{ActiveSlot, Activation, GuideSettings, SectionId, SECTION_IDS};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, IntersectionObserverEntry, Node};

use crate::dom;
use crate::observer::ViewportObserver;
use crate::settings;

const VISIBLE: &str = "visible";
const ACTIVE: &str = "active";
const SLIDE_OUT: &str = "slide-out";

struct CharacterEntry {
    container: HtmlElement,
    bubble: HtmlElement,
    image: HtmlImageElement,
    fallback: HtmlElement,
}

pub(crate) struct CharacterGuide {
    settings: GuideSettings,
    characters: BTreeMap<SectionId, CharacterEntry>,
    active: RefCell<ActiveSlot>,
    observer: RefCell<Option<ViewportObserver>>,
    resize_debounce: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CharacterGuide {
    /// Builds characters for the sections present in `document` and wires up
    /// positioning, visibility tracking and interaction.
    pub(crate) fn build(document: &Document, settings: GuideSettings) -> Result<Rc<Self>, JsValue> {
        let mut characters = BTreeMap::new();
        for id in SECTION_IDS {
            let Some(section) = document.get_element_by_id(id.as_str()) else {
                continue;
            };
            let entry = create_character(document, &section, id, settings.message(id))?;
            characters.insert(id, entry);
        }
        let guide = Rc::new(Self {
            settings,
            characters,
            active: RefCell::new(ActiveSlot::default()),
            observer: RefCell::new(None),
            resize_debounce: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        guide.apply_positions();
        guide.observe_sections(document)?;
        guide.install_listeners(document);
        guide.load_images();
        Ok(guide)
    }

    /// Runs after `install_listeners` so the image error fallback is in place.
    fn load_images(&self) {
        let src = settings::asset_url(settings::CHARACTER_IMAGE_PATH);
        for character in self.characters.values() {
            character.image.set_src(&src);
        }
    }

    pub(crate) fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.characters.keys().copied()
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<SectionId> {
        self.active.borrow().current()
    }

    pub(crate) fn apply_positions(&self) {
        self.apply_positions_for_width(dom::viewport_width());
    }

    fn apply_positions_for_width(&self, viewport_width: f64) {
        for (id, character) in &self.characters {
            let top = self.settings.top_px(*id, viewport_width);
            dom::set_style(&character.container, "top", &format!("{top}px"));
        }
    }

    fn observe_sections(self: &Rc<Self>, document: &Document) -> Result<(), JsValue> {
        let guide = Rc::clone(self);
        let observer = ViewportObserver::new(
            VISIBILITY_THRESHOLD,
            VISIBILITY_ROOT_MARGIN,
            move |entry, _observer| guide.on_visibility(entry),
        )?;
        for id in self.characters.keys() {
            if let Some(section) = document.get_element_by_id(id.as_str()) {
                observer.observe(&section);
            }
        }
        *self.observer.borrow_mut() = Some(observer);
        Ok(())
    }

    fn on_visibility(self: &Rc<Self>, entry: &IntersectionObserverEntry) {
        let Ok(id) = SectionId::parse(&entry.target().id()) else {
            return;
        };
        self.set_section_visible(id, entry.is_intersecting());
    }

    fn set_section_visible(self: &Rc<Self>, id: SectionId, visible: bool) {
        let Some(character) = self.characters.get(&id) else {
            return;
        };
        if visible {
            dom::add_class(&character.container, VISIBLE);
            let guide = Rc::clone(self);
            Timeout::new(BUBBLE_SHOW_DELAY_MS, move || {
                guide.show_bubble(id);
            })
            .forget();
            self.set_active(id);
        } else {
            dom::remove_class(&character.container, VISIBLE);
            self.hide_bubble(id);
        }
    }

    fn set_active(&self, id: SectionId) {
        let Activation::Changed { previous } = self.active.borrow_mut().activate(id) else {
            return;
        };
        if let Some(previous) = previous.and_then(|previous| self.characters.get(&previous)) {
            dom::remove_class(&previous.container, ACTIVE);
        }
        if let Some(character) = self.characters.get(&id) {
            dom::add_class(&character.container, ACTIVE);
        }
    }

    /// Auto-hide timers are not cancelled by a later show; an older timer may
    /// close a bubble that was reopened in the meantime.
    pub(crate) fn show_bubble(self: &Rc<Self>, id: SectionId) {
        let Some(character) = self.characters.get(&id) else {
            return;
        };
        dom::remove_class(&character.bubble, SLIDE_OUT);
        dom::add_class(&character.bubble, VISIBLE);
        let guide = Rc::clone(self);
        Timeout::new(BUBBLE_AUTO_HIDE_MS, move || {
            guide.hide_bubble(id);
        })
        .forget();
    }

    pub(crate) fn hide_bubble(&self, id: SectionId) {
        if let Some(character) = self.characters.get(&id) {
            dom::remove_class(&character.bubble, VISIBLE);
        }
    }

    #[cfg(test)]
    pub(crate) fn bubble_visible(&self, id: SectionId) -> bool {
        self.characters
            .get(&id)
            .is_some_and(|character| dom::has_class(&character.bubble, VISIBLE))
    }

    fn hide_bubbles_outside(&self, target: Option<&Node>) {
        for (id, character) in &self.characters {
            if !character.container.contains(target) {
                self.hide_bubble(*id);
            }
        }
    }

    fn schedule_positions(self: &Rc<Self>) {
        let guide = Rc::clone(self);
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            guide.apply_positions();
        });
        *self.resize_debounce.borrow_mut() = Some(timeout);
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();
        for (id, character) in &self.characters {
            let id = *id;
            let guide = Rc::clone(self);
            listeners.push(EventListener::new(
                &character.container,
                "mouseenter",
                move |_event| guide.show_bubble(id),
            ));
            let guide = Rc::clone(self);
            listeners.push(EventListener::new(
                &character.container,
                "click",
                move |event| {
                    event.stop_propagation();
                    guide.show_bubble(id);
                },
            ));
            let image = character.image.clone();
            let fallback = character.fallback.clone();
            listeners.push(EventListener::new(&character.image, "error", move |_event| {
                dom::set_style(&image, "display", "none");
                dom::set_style(&fallback, "display", "flex");
            }));
        }

        let guide = Rc::clone(self);
        listeners.push(EventListener::new(document, "click", move |event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            guide.hide_bubbles_outside(target.as_ref());
        }));

        if let Some(window) = web_sys::window() {
            let guide = Rc::clone(self);
            listeners.push(EventListener::new(&window, "resize", move |_event| {
                guide.schedule_positions();
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }
}

fn create_character(
    document: &Document,
    section: &Element,
    id: SectionId,
    message: &str,
) -> Result<CharacterEntry, JsValue> {
    let container = dom::create_html(
        document,
        "div",
        &format!("section-character {}-character", id.as_str()),
    )?;
    container.set_id(&id.character_dom_id());

    let image = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()?;
    image.set_class_name("character-image");
    image.set_alt(settings::CHARACTER_IMAGE_ALT);

    let fallback = dom::create_html(document, "div", "character-fallback")?;
    fallback.set_text_content(Some(settings::CHARACTER_FALLBACK_GLYPH));

    let bubble = dom::create_html(document, "div", "section-speech-bubble")?;
    bubble.set_id(&id.bubble_dom_id());
    let text = dom::create_html(document, "span", "bubble-text")?;
    text.set_text_content(Some(message));
    let arrow = dom::create_html(document, "div", "bubble-arrow")?;
    bubble.append_child(&text)?;
    bubble.append_child(&arrow)?;

    container.append_child(&image)?;
    container.append_child(&fallback)?;
    container.append_child(&bubble)?;

    dom::set_style(section, "position", "relative");
    section.append_child(&container)?;

    Ok(CharacterEntry {
        container,
        bubble,
        image,
        fallback,
    })
}

thread_local! {
    static GUIDE: RefCell<Option<Rc<CharacterGuide>>> = RefCell::new(None);
}

/// Loads the guide settings, then builds the guide once.
pub(crate) async fn start() {
    let settings = crate::guide_loader::load_guide_settings().await;
    let Some(document) = dom::document() else {
        return;
    };
    if GUIDE.with(|slot| slot.borrow().is_some()) {
        return;
    }
    match CharacterGuide::build(&document, settings) {
        Ok(guide) => {
            gloo::console::log!("character guide ready", guide.sections().count() as u32);
            GUIDE.with(|slot| {
                *slot.borrow_mut() = Some(guide);
            });
        }
        Err(err) => {
            gloo::console::warn!("character guide unavailable", dom::js_err(err));
        }
    }
}

#[cfg(test)]
impl CharacterEntry {
    fn message(&self) -> String {
        dom::query_within(&self.bubble, ".bubble-text")
            .and_then(|text| text.text_content())
            .unwrap_or_default()
    }
}
