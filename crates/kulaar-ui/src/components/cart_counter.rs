//! Cart Button and Counter Badge
//!
//! The cart-open control with its item count. The badge is not rendered
//! at all when the cart is empty.

use dioxus::prelude::*;

/// Properties for the CartButton component
#[derive(Clone, PartialEq, Props)]
pub struct CartButtonProps {
    /// Badge text from `Cart::badge`, `None` hides the badge
    pub badge: Option<String>,
    /// Click handler opening the cart
    pub on_open: EventHandler<()>,
}

/// Header control that opens the cart modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CartButton {
///         badge: store.read().cart.badge(),
///         on_open: move |_| store.write().open_cart(),
///     }
/// }
/// ```
#[component]
pub fn CartButton(props: CartButtonProps) -> Element {
    rsx! {
        button {
            id: "openCart",
            class: "cart-open",
            r#type: "button",
            onclick: move |_| props.on_open.call(()),
            "Корзина"
            CartCounter { badge: props.badge.clone() }
        }
    }
}

/// Numeric badge next to the cart control
#[component]
pub fn CartCounter(badge: Option<String>) -> Element {
    match badge {
        Some(count) => rsx! {
            span {
                class: "cart-counter",
                "aria-label": "Товаров в корзине: {count}",
                "{count}"
            }
        },
        None => rsx! {},
    }
}
