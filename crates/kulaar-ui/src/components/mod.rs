//! Reusable storefront components

mod button;
mod cart_counter;
mod menu_categories;
mod product_card;
mod toast;

pub use button::*;
pub use cart_counter::*;
pub use menu_categories::*;
pub use product_card::*;
pub use toast::*;
