use dioxus::prelude::*;

use crate::context::provide_storefront;
use crate::pages::StorefrontPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the storefront state.
#[component]
pub fn App() -> Element {
    provide_storefront();

    rsx! {
        style { {GLOBAL_STYLES} }
        StorefrontPage {}
    }
}
