//! Cart modal open/closed state.
//!
//! Page scrolling is locked exactly while the modal is open; the lock is
//! derived from `open` so the two can never disagree.

/// Key name that dismisses an open modal
pub const ESCAPE_KEY: &str = "Escape";

/// Value written to the body `overflow` style while scrolling is locked
pub const SCROLL_LOCKED: &str = "hidden";

/// Open/closed state of the cart overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal. Opening an open modal changes nothing.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal. Closing a closed modal changes nothing.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body `overflow` style matching the current state; empty clears it.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            SCROLL_LOCKED
        } else {
            ""
        }
    }

    /// CSS class list for the overlay element
    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "cart-modal active"
        } else {
            "cart-modal"
        }
    }

    /// Handle a key press. Returns true if it closed the modal.
    pub fn dismiss_on_key(&mut self, key: &str) -> bool {
        if self.open && key == ESCAPE_KEY {
            self.close();
            true
        } else {
            false
        }
    }

    /// Handle a click on the overlay. Only clicks on the backdrop itself,
    /// not on the modal content, close it. Returns true if it closed.
    pub fn dismiss_on_backdrop(&mut self, target_is_backdrop: bool) -> bool {
        if self.open && target_is_backdrop {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_locks_and_close_restores_scrolling() {
        let mut modal = ModalState::new();
        assert_eq!(modal.body_overflow(), "");

        modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.body_overflow(), "hidden");
        assert_eq!(modal.overlay_class(), "cart-modal active");

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.body_overflow(), "");
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut modal = ModalState::new();
        modal.open();
        modal.open();
        assert!(modal.is_open());
        modal.close();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = ModalState::new();
        assert!(!modal.dismiss_on_key("Escape"));

        modal.open();
        assert!(!modal.dismiss_on_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.dismiss_on_key("Escape"));
        assert_eq!(modal.body_overflow(), "");
    }

    #[test]
    fn content_clicks_do_not_close() {
        let mut modal = ModalState::new();
        modal.open();
        assert!(!modal.dismiss_on_backdrop(false));
        assert!(modal.is_open());
        assert!(modal.dismiss_on_backdrop(true));
        assert!(!modal.is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut modal = ModalState::new();
        modal.toggle();
        assert!(modal.is_open());
        modal.toggle();
        assert!(!modal.is_open());
    }
}
