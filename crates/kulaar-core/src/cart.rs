//! In-memory shopping cart.
//!
//! The cart lives for one page session. Every add appends a fresh line,
//! even for a product that is already in the cart; lines are never merged.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::catalog::Product;

/// Title used when a product card has no title text
pub const FALLBACK_TITLE: &str = "Без названия";
/// Price used when a product card has no price text
pub const FALLBACK_PRICE: &str = "0 ₽";

/// Unique identifier for a cart line
///
/// Uses ULID so lines sort by the moment they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CartLineId(pub Ulid);

impl CartLineId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CartLineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// Product text as read from a card, with placeholders filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub title: String,
    pub price: String,
    pub weight: String,
}

impl ProductInfo {
    /// Build from optional card fields. Absent or blank fields take the
    /// placeholder values; this never fails.
    pub fn from_fields(title: Option<&str>, price: Option<&str>, weight: Option<&str>) -> Self {
        fn or_default(value: Option<&str>, fallback: &str) -> String {
            match value.map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => fallback.to_string(),
            }
        }

        Self {
            title: or_default(title, FALLBACK_TITLE),
            price: or_default(price, FALLBACK_PRICE),
            weight: or_default(weight, ""),
        }
    }
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        Self::from_fields(
            product.title.as_deref(),
            product.price.as_deref(),
            product.weight.as_deref(),
        )
    }
}

/// One entry in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub title: String,
    /// Display-formatted, not numeric
    pub price: String,
    pub weight: String,
    /// Always at least 1
    pub quantity: u32,
}

/// Ordered list of cart lines for the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line for the product and return it.
    pub fn add(&mut self, product: ProductInfo) -> CartLine {
        let line = CartLine {
            id: CartLineId::new(),
            title: product.title,
            price: product.price,
            weight: product.weight,
            quantity: 1,
        };
        self.lines.push(line.clone());
        tracing::debug!(line = %line.id, title = %line.title, count = self.lines.len(), "Added cart line");
        line
    }

    /// Remove a line by id, returning it if it was present.
    pub fn remove(&mut self, id: &CartLineId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id == *id)?;
        let line = self.lines.remove(index);
        tracing::debug!(line = %line.id, count = self.lines.len(), "Removed cart line");
        Some(line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Badge text for the cart button, or `None` when the badge should be
    /// removed entirely.
    pub fn badge(&self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.len().to_string())
        }
    }
}

/// Toast text confirming that a line was added
pub fn added_message(line: &CartLine) -> String {
    format!("✅ \"{}\" добавлен в корзину!", line.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plov() -> ProductInfo {
        ProductInfo::from_fields(Some("Плов"), Some("450 ₽"), Some("300 г"))
    }

    #[test]
    fn add_appends_with_quantity_one() {
        let mut cart = Cart::new();
        let line = cart.add(plov());
        assert_eq!(cart.len(), 1);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.title, "Плов");
        assert_eq!(cart.lines()[0], line);
    }

    #[test]
    fn same_product_is_never_merged() {
        let mut cart = Cart::new();
        let a = cart.add(plov());
        let b = cart.add(plov());
        assert_eq!(cart.len(), 2);
        assert_ne!(a.id, b.id);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let info = ProductInfo::from_fields(None, Some("   "), None);
        assert_eq!(info.title, "Без названия");
        assert_eq!(info.price, "0 ₽");
        assert_eq!(info.weight, "");
    }

    #[test]
    fn card_text_is_trimmed() {
        let info = ProductInfo::from_fields(Some("  Самса \n"), Some("150 ₽"), Some("1 шт"));
        assert_eq!(info.title, "Самса");
    }

    #[test]
    fn badge_disappears_when_cart_empties() {
        let mut cart = Cart::new();
        assert_eq!(cart.badge(), None);

        let line = cart.add(plov());
        cart.add(plov());
        assert_eq!(cart.badge().as_deref(), Some("2"));

        cart.remove(&line.id);
        assert_eq!(cart.badge().as_deref(), Some("1"));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.badge(), None);
    }

    #[test]
    fn remove_unknown_line_is_none() {
        let mut cart = Cart::new();
        cart.add(plov());
        assert!(cart.remove(&CartLineId::new()).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn added_message_quotes_title() {
        let mut cart = Cart::new();
        let line = cart.add(plov());
        assert_eq!(added_message(&line), "✅ \"Плов\" добавлен в корзину!");
    }

    #[test]
    fn product_conversion_applies_fallbacks() {
        let info = ProductInfo::from(&Product::default());
        assert_eq!(info.title, FALLBACK_TITLE);
        assert_eq!(info.price, FALLBACK_PRICE);
    }
}
