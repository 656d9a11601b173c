use crate::section::{SectionId, SECTION_IDS};

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Viewport line (from the top) a section must straddle to count as current.
pub const ACTIVE_LINE_PX: f64 = 100.0;
pub const NAVBAR_CLEARANCE_PX: f64 = 80.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const INITIAL_SECTION: SectionId = SectionId::Home;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalSpan {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// First section in page order whose box straddles the active line.
/// `span_of` returns `None` for sections missing from the page.
pub fn section_at_active_line<F>(mut span_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<VerticalSpan>,
{
    SECTION_IDS
        .into_iter()
        .find(|id| span_of(*id).is_some_and(|span| span.straddles(ACTIVE_LINE_PX)))
}

/// Document offset to scroll to so the section clears the fixed navbar.
pub fn scroll_target(section_offset_top: f64) -> f64 {
    section_offset_top - NAVBAR_CLEARANCE_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub active: SectionId,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: INITIAL_SECTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavChanges {
    pub scrolled: Option<bool>,
    pub active: Option<SectionId>,
}

impl NavState {
    /// Folds one scroll observation into the state and reports what flipped.
    /// With no section on the active line the previous section is kept.
    pub fn observe(&mut self, scrolled: bool, at_line: Option<SectionId>) -> NavChanges {
        let mut changes = NavChanges::default();
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            changes.scrolled = Some(scrolled);
        }
        if let Some(next) = at_line {
            if next != self.active {
                self.active = next;
                changes.active = Some(next);
            }
        }
        changes
    }
}
