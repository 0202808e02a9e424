//! Cart Modal Component
//!
//! Overlay listing the cart lines. Open state is the `active` class on the
//! overlay; clicks on the backdrop close it, clicks on the content do not.

use dioxus::prelude::*;
use kulaar_ui::{Button, ButtonVariant, CloseButton};

use crate::context::use_storefront;

/// Cart overlay (`#cartModal`)
#[component]
pub fn CartModal() -> Element {
    let mut store = use_storefront();

    let current = store.read();
    let overlay_class = current.modal.overlay_class();
    let lines = current.cart.lines().to_vec();
    drop(current);

    rsx! {
        div {
            id: "cartModal",
            class: "{overlay_class}",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| {
                if store.write().modal.dismiss_on_backdrop(true) {
                    tracing::debug!("Cart modal closed from backdrop");
                }
            },

            div {
                class: "cart-modal-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "cart-modal-header",
                    h2 { class: "modal-title", "Корзина" }
                    CloseButton { onclick: move |_| store.write().close_cart() }
                }

                if lines.is_empty() {
                    p { class: "cart-empty", "Корзина пуста" }
                } else {
                    ul { class: "cart-lines",
                        for line in lines.iter() {
                            {
                                let id = line.id;
                                rsx! {
                                    li { key: "{line.id}", class: "cart-line",
                                        span { class: "cart-line-title", "{line.title}" }
                                        if !line.weight.is_empty() {
                                            span { class: "cart-line-weight", "{line.weight}" }
                                        }
                                        span { class: "cart-line-price", "{line.price}" }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| {
                                                store.write().remove_line(&id);
                                            },
                                            "Убрать"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| store.write().cart.clear(),
                            "Очистить"
                        }
                    }
                }
            }
        }
    }
}
