use folio_core::nav::{is_scrolled, scroll_target, section_at_active_line};
use folio_core::{ActiveSlot, Activation, NavState, SectionId, VerticalSpan};

fn span(top: f64, bottom: f64) -> Option<VerticalSpan> {
    Some(VerticalSpan { top, bottom })
}

#[test]
fn scrolled_threshold_is_exclusive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn first_section_on_the_line_wins() {
    let current = section_at_active_line(|id| match id {
        SectionId::Home => span(-900.0, -100.0),
        SectionId::About => span(-20.0, 100.0),
        SectionId::Skills => span(100.0, 700.0),
        _ => span(700.0, 1400.0),
    });
    assert_eq!(current, Some(SectionId::About));
}

#[test]
fn missing_sections_are_skipped() {
    let current = section_at_active_line(|id| match id {
        SectionId::Projects => span(50.0, 600.0),
        _ => None,
    });
    assert_eq!(current, Some(SectionId::Projects));
    assert_eq!(section_at_active_line(|_| None), None);
}

#[test]
fn nav_state_keeps_active_section_without_a_match() {
    let mut state = NavState::default();
    assert_eq!(state.active, SectionId::Home);

    let changes = state.observe(true, Some(SectionId::Skills));
    assert_eq!(changes.scrolled, Some(true));
    assert_eq!(changes.active, Some(SectionId::Skills));

    let changes = state.observe(true, None);
    assert_eq!(changes.scrolled, None);
    assert_eq!(changes.active, None);
    assert_eq!(state.active, SectionId::Skills);

    let changes = state.observe(false, Some(SectionId::Skills));
    assert_eq!(changes.scrolled, Some(false));
    assert_eq!(changes.active, None);
}

#[test]
fn scroll_target_clears_navbar() {
    assert_eq!(scroll_target(1200.0), 1120.0);
    assert_eq!(scroll_target(0.0), -80.0);
}

#[test]
fn active_slot_hands_over() {
    let mut slot = ActiveSlot::default();
    assert_eq!(
        slot.activate(SectionId::Home),
        Activation::Changed { previous: None }
    );
    assert_eq!(slot.activate(SectionId::Home), Activation::Unchanged);
    assert_eq!(
        slot.activate(SectionId::Contact),
        Activation::Changed {
            previous: Some(SectionId::Home)
        }
    );
    assert_eq!(slot.current(), Some(SectionId::Contact));
}

#[test]
fn section_ids_parse_and_name_their_elements() {
    assert_eq!("projects".parse::<SectionId>(), Ok(SectionId::Projects));
    assert!("blog".parse::<SectionId>().is_err());
    assert_eq!(SectionId::About.character_dom_id(), "about-character");
    assert_eq!(SectionId::About.bubble_dom_id(), "about-bubble");
    assert_eq!(SectionId::Contact.index(), 4);
}
