use std::cell::Cell;

use folio_core::skills::{
    fill_width, item_delay_ms, parse_skill_level, FILL_DELAY_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, SKILLS_THRESHOLD,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::observer::ViewportObserver;

const FADE_IN_SELECTOR: &str = ".card-hover";
const SKILLS_SECTION_ID: &str = "skills";
const SKILL_ITEM_SELECTOR: &str = ".skill-item";
const SKILL_FILL_SELECTOR: &str = ".progress-fill";
const SKILL_LEVEL_ATTR: &str = "data-skill";

/// Owns the scroll-reveal observers for the page lifetime.
pub(crate) struct Reveal {
    _fade_in: Option<ViewportObserver>,
    _skills: Option<ViewportObserver>,
}

impl Reveal {
    pub(crate) fn install() -> Self {
        let fade_in = match observe_fade_in(&dom::query_all(FADE_IN_SELECTOR)) {
            Ok(observer) => Some(observer),
            Err(err) => {
                gloo::console::warn!("fade-in observer unavailable", dom::js_err(err));
                None
            }
        };
        let skills = match dom::element_by_id(SKILLS_SECTION_ID).map(|section| observe_skills_once(&section)) {
            Some(Ok(observer)) => Some(observer),
            Some(Err(err)) => {
                gloo::console::warn!("skills observer unavailable", dom::js_err(err));
                None
            }
            None => None,
        };
        Self {
            _fade_in: fade_in,
            _skills: skills,
        }
    }
}

pub(crate) fn reveal(element: &Element) {
    dom::set_style(element, "opacity", "1");
    dom::set_style(element, "transform", "translateY(0)");
}

fn observe_fade_in(targets: &[Element]) -> Result<ViewportObserver, JsValue> {
    let observer = ViewportObserver::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        reveal(&target);
        observer.unobserve(&target);
    })?;
    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

/// Latches after the first intersecting entry. There is no replay.
#[derive(Default)]
struct SkillsTrigger {
    fired: Cell<bool>,
}

impl SkillsTrigger {
    fn fire(&self, intersecting: bool) -> bool {
        intersecting && !self.fired.replace(true)
    }

    /// Animates `items` on the first intersecting call only.
    fn run(&self, intersecting: bool, items: impl FnOnce() -> Vec<Element>) -> bool {
        if !self.fire(intersecting) {
            return false;
        }
        animate_skills(&items());
        true
    }
}

/// Fires the skills animation on the first 30% visibility, then disconnects.
fn observe_skills_once(section: &Element) -> Result<ViewportObserver, JsValue> {
    let trigger = SkillsTrigger::default();
    let observer = ViewportObserver::new(SKILLS_THRESHOLD, "0px", move |entry, observer| {
        if trigger.run(entry.is_intersecting(), || dom::query_all(SKILL_ITEM_SELECTOR)) {
            observer.disconnect();
        }
    })?;
    observer.observe(section);
    Ok(observer)
}

pub(crate) fn animate_skills(items: &[Element]) {
    for (index, item) in items.iter().enumerate() {
        let item = item.clone();
        Timeout::new(item_delay_ms(index), move || {
            dom::add_class(&item, "animate");
            let level = item
                .get_attribute(SKILL_LEVEL_ATTR)
                .and_then(|raw| parse_skill_level(&raw));
            let Some(level) = level else {
                return;
            };
            let Some(fill) = dom::query_within(&item, SKILL_FILL_SELECTOR) else {
                return;
            };
            Timeout::new(FILL_DELAY_MS, move || {
                dom::set_style(&fill, "width", &fill_width(level));
            })
            .forget();
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::skills::STAGGER_MS;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn skill_item(level: &str) -> (Element, Element) {
        let document = dom::document().expect("document available");
        let item = document.create_element("div").expect("create item");
        item.set_class_name("skill-item");
        item.set_attribute(SKILL_LEVEL_ATTR, level).expect("data-skill");
        let fill = document.create_element("div").expect("create fill");
        fill.set_class_name("progress-fill");
        item.append_child(&fill).expect("append fill");
        document.body().expect("body").append_child(&item).expect("mount item");
        (item, fill)
    }

    #[wasm_bindgen_test(async)]
    async fn skills_animate_in_staggered_order() {
        console_error_panic_hook::set_once();
        let (first, first_fill) = skill_item("90");
        let (second, second_fill) = skill_item("not a number");
        let (third, third_fill) = skill_item("45");
        animate_skills(&[first.clone(), second.clone(), third.clone()]);

        TimeoutFuture::new(STAGGER_MS / 2).await;
        assert!(dom::has_class(&first, "animate"));
        assert!(!dom::has_class(&third, "animate"));
        assert_eq!(dom::style_value(&first_fill, "width"), "");

        TimeoutFuture::new(2 * STAGGER_MS + FILL_DELAY_MS + 50).await;
        assert!(dom::has_class(&second, "animate"));
        assert!(dom::has_class(&third, "animate"));
        assert_eq!(dom::style_value(&first_fill, "width"), "90%");
        assert_eq!(dom::style_value(&second_fill, "width"), "");
        assert_eq!(dom::style_value(&third_fill, "width"), "45%");

        for item in [first, second, third] {
            item.remove();
        }
    }

    #[wasm_bindgen_test]
    fn skills_trigger_latches_on_first_intersection() {
        let trigger = SkillsTrigger::default();
        assert!(!trigger.fire(false));
        assert!(trigger.fire(true));
        assert!(!trigger.fire(true));
        assert!(!trigger.fire(false));
    }

    #[wasm_bindgen_test(async)]
    async fn skills_animation_never_replays() {
        console_error_panic_hook::set_once();
        let (item, fill) = skill_item("150");
        let trigger = SkillsTrigger::default();
        let queried = Cell::new(0);
        let items = || {
            queried.set(queried.get() + 1);
            vec![item.clone()]
        };

        assert!(!trigger.run(false, items));
        assert!(trigger.run(true, items));
        TimeoutFuture::new(FILL_DELAY_MS + 50).await;
        assert!(dom::has_class(&item, "animate"));
        assert_eq!(dom::style_value(&fill, "width"), "150%");

        dom::remove_class(&item, "animate");
        assert!(!trigger.run(true, items));
        TimeoutFuture::new(FILL_DELAY_MS + 50).await;
        assert!(!dom::has_class(&item, "animate"));
        assert_eq!(queried.get(), 1);
        item.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn negative_skill_level_leaves_width_alone() {
        console_error_panic_hook::set_once();
        let (item, fill) = skill_item("-5");
        animate_skills(&[item.clone()]);
        TimeoutFuture::new(FILL_DELAY_MS + 50).await;
        assert!(dom::has_class(&item, "animate"));
        assert_eq!(dom::style_value(&fill, "width"), "");
        item.remove();
    }

    #[wasm_bindgen_test]
    fn reveal_sets_final_state() {
        let document = dom::document().expect("document available");
        let card = document.create_element("div").expect("create card");
        reveal(&card);
        assert_eq!(dom::style_value(&card, "opacity"), "1");
    }
}
