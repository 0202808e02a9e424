//! Toast Stack Component
//!
//! Renders the non-blocking notifications shown after cart actions.
//! Entry and exit use the `slideUp` and `fadeOut` keyframes from the
//! global stylesheet; the phase class selects which one plays.

use dioxus::prelude::*;
use kulaar_core::Toast;

/// Properties for the ToastStack component
#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<Toast>,
}

/// Fixed-position stack of toasts at the bottom center of the page
#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    if props.toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in props.toasts.iter() {
                div {
                    key: "{toast.id.0}",
                    class: "{toast.class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
