//! Section reveal animation state.
//!
//! Sections start hidden and gain the `visible` marker exactly once. Only
//! one mechanism drives this per page, selected by [`RevealMode`]: either
//! a fixed stagger after load, or an intersection threshold as the user
//! scrolls.

use std::collections::HashSet;
use std::time::Duration;

use crate::config::RevealMode;

/// Slack for observer ratios, which arrive as f32 values widened to f64
/// and can land just under the threshold that fired them.
const RATIO_EPSILON: f64 = 1e-6;

/// Tracks which sections have been revealed
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    mode: RevealMode,
    visible: HashSet<String>,
}

impl RevealAnimator {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            visible: HashSet::new(),
        }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Mark a section visible. Returns true only the first time.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        self.visible.insert(id.to_string())
    }

    /// Handle an intersection report for a section.
    ///
    /// Ignored outside intersection mode. Returns true if this report
    /// revealed the section.
    pub fn on_intersection(&mut self, id: &str, ratio: f64, threshold: f64) -> bool {
        if self.mode != RevealMode::Intersection || ratio + RATIO_EPSILON < threshold {
            return false;
        }
        self.mark_visible(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// CSS class list for a section wrapper
    pub fn section_class(&self, id: &str) -> &'static str {
        if self.is_visible(id) {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

/// Delays for revealing `count` sections one `step` apart, starting at zero.
pub fn stagger_schedule(count: usize, step: Duration) -> Vec<Duration> {
    (0..count).map(|index| step * index as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_index_times_step() {
        let delays = stagger_schedule(4, Duration::from_millis(100));
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );
        assert!(stagger_schedule(0, Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn reveal_happens_once() {
        let mut animator = RevealAnimator::new(RevealMode::Stagger);
        assert!(animator.mark_visible("menu"));
        assert!(!animator.mark_visible("menu"));
        assert_eq!(animator.visible_count(), 1);
        assert_eq!(animator.section_class("menu"), "reveal visible");
        assert_eq!(animator.section_class("drinks"), "reveal");
    }

    #[test]
    fn intersection_respects_threshold() {
        let mut animator = RevealAnimator::new(RevealMode::Intersection);
        assert!(!animator.on_intersection("menu", 0.1, 0.2));
        assert!(!animator.is_visible("menu"));
        assert!(animator.on_intersection("menu", 0.2, 0.2));
        assert!(!animator.on_intersection("menu", 0.9, 0.2));
    }

    #[test]
    fn intersection_accepts_ratio_rounded_under_threshold() {
        let mut animator = RevealAnimator::new(RevealMode::Intersection);
        assert!(animator.on_intersection("menu", 0.19999998807907104, 0.2));
        assert!(animator.is_visible("menu"));
        assert!(!animator.on_intersection("drinks", 0.199, 0.2));
    }

    #[test]
    fn intersection_ignored_in_stagger_mode() {
        let mut animator = RevealAnimator::new(RevealMode::Stagger);
        assert!(!animator.on_intersection("menu", 1.0, 0.2));
        assert!(!animator.is_visible("menu"));
    }
}
