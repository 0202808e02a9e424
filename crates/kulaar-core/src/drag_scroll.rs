//! Drag-to-scroll for horizontal product rails.
//!
//! On narrow viewports a rail can be dragged with the mouse or a finger.
//! While a drag session is active the rail's horizontal offset follows the
//! pointer, amplified by the configured speed multiplier.

/// Direction of a rail arrow button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailDirection {
    Back,
    Forward,
}

impl RailDirection {
    fn sign(self) -> f64 {
        match self {
            RailDirection::Back => -1.0,
            RailDirection::Forward => 1.0,
        }
    }
}

/// State of one rail's drag session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    /// Pointer x at press time
    pub origin_x: f64,
    /// Rail scroll offset at press time
    pub origin_scroll_left: f64,
}

/// Pointer-down that is still waiting for the rail offset to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressToken(u64);

/// Converts pointer travel into rail scroll offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScroll {
    multiplier: f64,
    state: DragState,
    /// Bumped on every arm and release; a token from an older value is stale
    generation: u64,
}

impl DragScroll {
    pub fn new(multiplier: f64) -> Self {
        Self {
            multiplier,
            state: DragState::default(),
            generation: 0,
        }
    }

    /// Record a pointer-down whose session starts once the rail offset is
    /// known. A release in the meantime makes the token stale.
    pub fn arm(&mut self) -> PressToken {
        self.generation += 1;
        PressToken(self.generation)
    }

    /// Start the session for an armed pointer-down. Returns false, leaving
    /// the rail idle, if the pointer was released before the offset arrived.
    pub fn press_armed(&mut self, token: PressToken, x: f64, scroll_left: f64) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.press(x, scroll_left);
        true
    }

    /// Start a session at pointer `x` with the rail currently at `scroll_left`.
    pub fn press(&mut self, x: f64, scroll_left: f64) {
        self.state = DragState {
            dragging: true,
            origin_x: x,
            origin_scroll_left: scroll_left,
        };
    }

    /// Pointer moved to `x`. Returns the new scroll offset for the rail, or
    /// `None` when no session is active.
    pub fn move_to(&self, x: f64) -> Option<f64> {
        if !self.state.dragging {
            return None;
        }
        let walk = (x - self.state.origin_x) * self.multiplier;
        Some(self.state.origin_scroll_left - walk)
    }

    /// End the session on pointer up, touch end or pointer leave.
    pub fn release(&mut self) {
        self.generation += 1;
        self.state.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn state(&self) -> DragState {
        self.state
    }
}

/// Whether drag scrolling applies at this viewport width.
pub fn drag_enabled(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// Target offset when an arrow button scrolls a rail by one step.
/// Never scrolls before the start of the rail.
pub fn rail_scroll_target(current: f64, step: f64, direction: RailDirection) -> f64 {
    (current + step * direction.sign()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_moves_do_nothing() {
        let drag = DragScroll::new(2.0);
        assert_eq!(drag.move_to(120.0), None);
    }

    #[test]
    fn displacement_is_doubled_and_inverted() {
        let mut drag = DragScroll::new(2.0);
        drag.press(100.0, 400.0);
        // dragging left by 30px scrolls right by 60px
        assert_eq!(drag.move_to(70.0), Some(460.0));
        // dragging right by 50px scrolls left by 100px
        assert_eq!(drag.move_to(150.0), Some(300.0));
    }

    #[test]
    fn offset_is_relative_to_session_start() {
        let mut drag = DragScroll::new(2.0);
        drag.press(10.0, 0.0);
        drag.move_to(0.0);
        drag.move_to(-5.0);
        assert_eq!(drag.move_to(0.0), Some(20.0));
    }

    #[test]
    fn release_ends_session() {
        let mut drag = DragScroll::new(2.0);
        drag.press(0.0, 0.0);
        assert!(drag.is_dragging());
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.move_to(50.0), None);
    }

    #[test]
    fn release_before_late_press_keeps_rail_idle() {
        let mut drag = DragScroll::new(2.0);
        let token = drag.arm();
        drag.release();
        assert!(!drag.press_armed(token, 100.0, 0.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.move_to(50.0), None);
    }

    #[test]
    fn armed_press_starts_session() {
        let mut drag = DragScroll::new(2.0);
        let token = drag.arm();
        assert!(drag.press_armed(token, 100.0, 40.0));
        assert_eq!(drag.move_to(90.0), Some(60.0));
    }

    #[test]
    fn newer_pointer_down_supersedes_older() {
        let mut drag = DragScroll::new(2.0);
        let first = drag.arm();
        let second = drag.arm();
        assert!(!drag.press_armed(first, 0.0, 0.0));
        assert!(drag.press_armed(second, 0.0, 0.0));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(drag_enabled(768.0, 768.0));
        assert!(drag_enabled(375.0, 768.0));
        assert!(!drag_enabled(769.0, 768.0));
    }

    #[test]
    fn rail_arrows_clamp_at_start() {
        assert_eq!(rail_scroll_target(100.0, 300.0, RailDirection::Forward), 400.0);
        assert_eq!(rail_scroll_target(100.0, 300.0, RailDirection::Back), 0.0);
        assert_eq!(rail_scroll_target(900.0, 300.0, RailDirection::Back), 600.0);
    }
}
