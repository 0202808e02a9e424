//! Event handlers shared by several components.
//!
//! Each handler takes the storefront signal explicitly, applies the state
//! change, and schedules any timed follow-up on the Dioxus runtime.

use dioxus::prelude::*;
use kulaar_core::{Storefront, ToastId};

use crate::bridge;

/// "Add to cart" on the card at `index` of `section_id`.
///
/// Appends a line, shows a toast and schedules its dismissal. A card that
/// no longer exists is ignored.
pub fn add_to_cart(mut store: Signal<Storefront>, section_id: &str, index: usize) {
    let added = store.write().add_to_cart(section_id, index);
    match added {
        Some((line, toast)) => {
            tracing::debug!(line = %line.id, section = section_id, "Add to cart");
            dismiss_toast_later(store, toast);
        }
        None => tracing::debug!(section = section_id, index, "Add to cart without a card"),
    }
}

/// Fade the toast out after its visible period, then remove it.
///
/// Each toast owns its timers; nothing cancels them when another toast
/// appears.
pub fn dismiss_toast_later(mut store: Signal<Storefront>, id: ToastId) {
    let (visible, fade) = {
        let current = store.read();
        (current.config().toast_visible(), current.config().toast_fade())
    };

    spawn(async move {
        tokio::time::sleep(visible).await;
        store.write().toasts.begin_fade(id);
        tokio::time::sleep(fade).await;
        store.write().toasts.remove(id);
    });
}

/// Apply the scroll lock for the modal's current state.
pub fn sync_scroll_lock(overflow: &'static str) {
    spawn(async move {
        if let Err(e) = bridge::set_body_overflow(overflow).await {
            tracing::warn!("Failed to update scroll lock: {}", e);
        }
    });
}

/// Smooth-scroll to the section an anchor link points at.
pub fn scroll_to_anchor(href: String) {
    let Some(id) = kulaar_core::anchor_target(&href).map(str::to_string) else {
        return;
    };
    spawn(async move {
        if let Err(e) = bridge::smooth_scroll_to(&id).await {
            tracing::warn!("Failed to scroll to #{}: {}", id, e);
        }
    });
}
