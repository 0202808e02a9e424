//! Application state for one storefront page session.
//!
//! `Storefront` is constructed once at startup and owns every piece of
//! mutable page state. Event handlers receive it explicitly instead of
//! reaching into module-level globals.

use crate::cart::{added_message, Cart, CartLine, CartLineId, ProductInfo};
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::drag_scroll::drag_enabled;
use crate::modal::ModalState;
use crate::notification::{ToastId, ToastQueue};
use crate::reveal::RevealAnimator;
use crate::scroll_spy::ScrollSpy;

/// All mutable state of the storefront page
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    pub cart: Cart,
    pub modal: ModalState,
    pub spy: ScrollSpy,
    pub reveal: RevealAnimator,
    pub toasts: ToastQueue,
    viewport_width: Option<f64>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            spy: ScrollSpy::new(config.scroll_spy_offset_px),
            reveal: RevealAnimator::new(config.reveal_mode),
            cart: Cart::new(),
            modal: ModalState::new(),
            toasts: ToastQueue::new(),
            viewport_width: None,
            config,
            catalog,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Emit the startup summary of what the page contains.
    pub fn log_startup(&self) {
        tracing::info!("{}: инициализация...", self.config.brand_name);
        if !self.catalog.is_empty() {
            tracing::info!(sections = self.catalog.sections.len(), "Секции найдены");
        }
        let products = self.catalog.product_count();
        if products > 0 {
            tracing::info!(products, "Карточки товаров найдены");
        }
    }

    pub fn log_ready(&self) {
        tracing::info!("{}: готов к работе!", self.config.brand_name);
    }

    /// Look up a product card by section id and position.
    pub fn product(&self, section_id: &str, index: usize) -> Option<&Product> {
        self.catalog
            .sections
            .iter()
            .find(|s| s.id == section_id)?
            .products
            .get(index)
    }

    /// Handle an "add to cart" click on a card.
    ///
    /// A click that cannot be traced to a card is silently ignored.
    pub fn add_to_cart(&mut self, section_id: &str, index: usize) -> Option<(CartLine, ToastId)> {
        let info = ProductInfo::from(self.product(section_id, index)?);
        Some(self.add_product(info))
    }

    /// Append a line and announce it with a toast.
    pub fn add_product(&mut self, info: ProductInfo) -> (CartLine, ToastId) {
        let line = self.cart.add(info);
        let toast = self.toasts.push(added_message(&line));
        (line, toast)
    }

    pub fn remove_line(&mut self, id: &CartLineId) -> Option<CartLine> {
        self.cart.remove(id)
    }

    pub fn open_cart(&mut self) {
        self.modal.open();
        tracing::debug!("Cart modal opened");
    }

    pub fn close_cart(&mut self) {
        self.modal.close();
        tracing::debug!("Cart modal closed");
    }

    /// Record the settled viewport width. Returns whether drag scrolling
    /// applies at that width.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        self.viewport_width = Some(width);
        let enabled = self.drag_enabled();
        tracing::debug!(width, enabled, "Viewport settled");
        enabled
    }

    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    /// Drag scrolling is attached only once a width is known and it is at
    /// or below the breakpoint.
    pub fn drag_enabled(&self) -> bool {
        self.viewport_width
            .is_some_and(|w| drag_enabled(w, self.config.mobile_breakpoint_px))
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default(), Catalog::default_menu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_to_cart_appends_and_toasts() {
        let mut store = Storefront::default();
        let (line, toast) = store.add_to_cart("menu", 0).unwrap();
        assert_eq!(line.title, "Плов");
        assert_eq!(store.cart.len(), 1);
        assert_eq!(
            store.toasts.get(toast).unwrap().message,
            "✅ \"Плов\" добавлен в корзину!"
        );
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut store = Storefront::default();
        assert!(store.add_to_cart("menu", 99).is_none());
        assert!(store.add_to_cart("nowhere", 0).is_none());
        assert!(store.cart.is_empty());
        assert!(store.toasts.is_empty());
    }

    #[test]
    fn drag_waits_for_a_known_width() {
        let mut store = Storefront::default();
        assert!(!store.drag_enabled());
        assert!(store.set_viewport_width(400.0));
        assert!(!store.set_viewport_width(1280.0));
        assert_eq!(store.viewport_width(), Some(1280.0));
    }

    #[test]
    fn spy_uses_configured_offset() {
        let config = StorefrontConfig {
            scroll_spy_offset_px: 80.0,
            ..Default::default()
        };
        let store = Storefront::new(config, Catalog::default_menu());
        assert_eq!(store.spy.offset(), 80.0);
    }
}
