//! Scroll-spy: map the scroll position to the menu section in view.
//!
//! The probe point sits a fixed offset below the top of the viewport. The
//! section whose vertical extent contains the probe becomes active. When the
//! probe falls between or outside all sections the previous section stays
//! active, so the highlight never flickers off while crossing a gap.

use serde::{Deserialize, Serialize};

/// Vertical extent of a section in page coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top edge inclusive, bottom edge exclusive
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Tracks which section is active as the page scrolls
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    offset: f64,
    sections: Vec<SectionBounds>,
    active: Option<String>,
}

impl ScrollSpy {
    /// Create a spy whose probe sits `offset` pixels below the scroll position.
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            sections: Vec::new(),
            active: None,
        }
    }

    /// Replace the tracked sections, e.g. after layout changes.
    ///
    /// The active section is kept; the next [`observe`](Self::observe) call
    /// corrects it if the layout moved.
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Section the probe at `scroll_y` falls into, without changing state.
    ///
    /// Sections are scanned in order and a later match wins over an
    /// earlier one when extents overlap.
    pub fn section_at(&self, scroll_y: f64) -> Option<&SectionBounds> {
        let probe = scroll_y + self.offset;
        self.sections.iter().rev().find(|s| s.contains(probe))
    }

    /// Feed a new scroll position.
    ///
    /// Returns the newly active section id only when it differs from the
    /// previous one; repeated positions inside the same section return `None`.
    pub fn observe(&mut self, scroll_y: f64) -> Option<&str> {
        let id = self.section_at(scroll_y)?.id.clone();
        if self.active.as_deref() == Some(id.as_str()) {
            return None;
        }
        tracing::debug!(section = %id, scroll_y, "Active section changed");
        self.active = Some(id);
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a navigation link with this `href` carries the active marker.
    /// Exactly one link, the one pointing at `#<active id>`, matches.
    pub fn link_is_active(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

/// Section id an anchor link should smooth-scroll to.
///
/// Returns `None` for empty hrefs and the bare `#`, which must not move the
/// page at all.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ScrollSpy {
        let mut spy = ScrollSpy::new(150.0);
        spy.set_sections(vec![
            SectionBounds::new("menu", 200.0, 600.0),
            SectionBounds::new("salads", 800.0, 400.0),
            SectionBounds::new("drinks", 1300.0, 500.0),
        ]);
        spy
    }

    #[test]
    fn probe_includes_offset() {
        let mut spy = page();
        // 0 + 150 is above the first section
        assert_eq!(spy.observe(0.0), None);
        assert_eq!(spy.active(), None);
        // 50 + 150 hits the top edge of menu
        assert_eq!(spy.observe(50.0), Some("menu"));
    }

    #[test]
    fn reports_only_changes() {
        let mut spy = page();
        assert_eq!(spy.observe(100.0), Some("menu"));
        assert_eq!(spy.observe(300.0), None);
        assert_eq!(spy.observe(650.0), Some("salads"));
        assert_eq!(spy.active(), Some("salads"));
    }

    #[test]
    fn bottom_edge_is_exclusive() {
        let spy = page();
        // probe 800 is the bottom of menu and the top of salads
        assert_eq!(spy.section_at(650.0).map(|s| s.id.as_str()), Some("salads"));
    }

    #[test]
    fn gaps_keep_previous_section() {
        let mut spy = page();
        spy.observe(700.0);
        // probe 1250 lies in the gap between salads and drinks
        assert_eq!(spy.observe(1100.0), None);
        assert_eq!(spy.active(), Some("salads"));
    }

    #[test]
    fn only_matching_link_is_active() {
        let mut spy = page();
        spy.observe(1200.0);
        assert!(spy.link_is_active("#drinks"));
        assert!(!spy.link_is_active("#menu"));
        assert!(!spy.link_is_active("drinks"));
        assert!(!spy.link_is_active("#"));
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#menu"), Some("menu"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/delivery"), None);
    }
}
