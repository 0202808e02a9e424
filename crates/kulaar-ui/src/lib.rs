//! Kulaar Storefront UI Components
//!
//! This crate provides the presentational Dioxus components of the
//! storefront page. Components take plain data and callbacks; all page
//! state lives in `kulaar_core::Storefront` and is owned by the app.
//!
//! ## Design Notes
//!
//! The look is a light catering menu:
//! - **Black (#000)**: primary buttons, toasts
//! - **Red (#e53935)**: cart counter badge
//! - **Warm cream (#faf6f0)**: page background
//!
//! Class names match the stylesheet shipped by the desktop app
//! (`.product-card`, `.add-to-cart`, `.menu-categories`, `.cart-counter`).

pub mod components;

pub use components::*;
