//! Kulaar Storefront Core Library
//!
//! State and decision logic behind the Kulaar catering storefront page,
//! kept free of any UI dependency so it can be tested directly.
//!
//! ## Overview
//!
//! The storefront is a single page: a category navigation bar, menu
//! sections with horizontally scrolling product rails, and a cart overlay.
//! Everything here is session state; nothing is persisted.
//!
//! - [`cart`]: append-only cart lines with add/remove/clear
//! - [`modal`]: cart overlay open state and body scroll lock
//! - [`scroll_spy`]: which menu section is in view
//! - [`drag_scroll`]: pointer drag to rail scroll offset
//! - [`reveal`]: one-shot section reveal tracking
//! - [`notification`]: toast lifecycle
//! - [`timing`]: resize debouncing
//!
//! ## Quick Start
//!
//! ```ignore
//! use kulaar_core::{Storefront, StorefrontConfig, Catalog};
//!
//! let mut store = Storefront::new(StorefrontConfig::default(), Catalog::default_menu());
//! let (line, _toast) = store.add_to_cart("menu", 0).expect("card exists");
//! assert_eq!(store.cart.badge().as_deref(), Some("1"));
//! println!("added {}", line.title);
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod drag_scroll;
pub mod error;
pub mod modal;
pub mod notification;
pub mod reveal;
pub mod scroll_spy;
pub mod storefront;
pub mod timing;

// Re-exports
pub use cart::{added_message, Cart, CartLine, CartLineId, ProductInfo};
pub use catalog::{Catalog, MenuSection, Product};
pub use config::{RevealMode, StorefrontConfig, StorefrontFile};
pub use drag_scroll::{drag_enabled, rail_scroll_target, DragScroll, DragState, PressToken, RailDirection};
pub use error::{StorefrontError, StorefrontResult};
pub use modal::ModalState;
pub use notification::{Toast, ToastId, ToastPhase, ToastQueue};
pub use reveal::{stagger_schedule, RevealAnimator};
pub use scroll_spy::{anchor_target, ScrollSpy, SectionBounds};
pub use storefront::Storefront;
pub use timing::{Debouncer, Ticket};
