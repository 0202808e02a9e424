//! Transient toast notifications.
//!
//! A toast is shown, fades out after its visible period, then is removed.
//! Toasts are independent: each one runs its own timers and a new toast
//! does not cut an older one short.

use std::collections::VecDeque;

/// Identifier of a toast within one queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully visible, entering with the `slideUp` animation
    Showing,
    /// Playing the `fadeOut` animation before removal
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS class list for the toast element
    pub fn class(&self) -> &'static str {
        match self.phase {
            ToastPhase::Showing => "toast",
            ToastPhase::FadingOut => "toast fading",
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new toast and return its id for scheduling its removal.
    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Showing,
        });
        id
    }

    /// Switch a toast to its fade-out phase. Returns false if it is gone.
    pub fn begin_fade(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::FadingOut;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        self.toasts.remove(index)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
