//! Menu Block Component
//!
//! One navigable menu section: heading plus its product rail. The section
//! carries the reveal classes and is the element the scroll-spy measures.

use dioxus::prelude::*;
use kulaar_core::MenuSection;

use crate::components::ProductRail;
use crate::context::use_storefront;

#[derive(Props, Clone, PartialEq)]
pub struct MenuBlockProps {
    pub section: MenuSection,
}

#[component]
pub fn MenuBlock(props: MenuBlockProps) -> Element {
    let store = use_storefront();
    let reveal_class = store.read().reveal.section_class(&props.section.id);

    rsx! {
        section {
            id: "{props.section.id}",
            class: "menu-block {reveal_class}",

            h2 { class: "section-header", "{props.section.title}" }
            ProductRail { section: props.section.clone() }
        }
    }
}
