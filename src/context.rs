//! Storefront context provider.
//!
//! The single `Storefront` built at startup is wrapped in a signal and
//! handed to every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut store = use_storefront();
//! store.write().open_cart();
//! ```

use dioxus::prelude::*;
use kulaar_core::Storefront;

/// Install the storefront signal for the component tree.
///
/// Takes the `Storefront` supplied at launch and wraps it once.
pub fn provide_storefront() -> Signal<Storefront> {
    let initial = use_context::<Storefront>();
    let store = use_signal(move || initial);
    use_context_provider(|| store)
}

/// Hook to access the storefront state from context.
pub fn use_storefront() -> Signal<Storefront> {
    use_context::<Signal<Storefront>>()
}
