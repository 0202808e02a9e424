//! Page-level components for the Kulaar storefront.
//!
//! These read and write the shared storefront state directly; purely
//! presentational pieces live in `kulaar-ui`.

mod cart_modal;
mod menu_block;
mod product_rail;

pub use cart_modal::CartModal;
pub use menu_block::MenuBlock;
pub use product_rail::ProductRail;
