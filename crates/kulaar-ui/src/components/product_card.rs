//! Product Card Component
//!
//! One dish in a product rail. Missing text fields are simply not
//! rendered; the cart applies its own placeholders on add.

use dioxus::prelude::*;
use kulaar_core::Product;

use super::button::{Button, ButtonVariant};

/// Properties for the ProductCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    pub product: Product,
    /// Called when the card's add-to-cart button is clicked
    pub on_add: EventHandler<()>,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product.clone();

    rsx! {
        article { class: "product-card",
            if let Some(title) = product.title {
                h3 { class: "product-title", "{title}" }
            }
            div { class: "product-meta",
                if let Some(weight) = product.weight {
                    span { class: "product-weight", "{weight}" }
                }
                if let Some(price) = product.price {
                    span { class: "product-price", "{price}" }
                }
            }
            Button {
                variant: ButtonVariant::AddToCart,
                onclick: move |_| props.on_add.call(()),
                "В корзину"
            }
        }
    }
}
