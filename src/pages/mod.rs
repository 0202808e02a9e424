//! Page components for the Kulaar storefront.

mod storefront;

pub use storefront::StorefrontPage;
