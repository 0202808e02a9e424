//! Menu catalog shown on the storefront.
//!
//! Each [`MenuSection`] becomes one navigable menu block with its own
//! horizontal product rail. Product fields are optional because the cart
//! tolerates incomplete cards (see [`crate::cart::ProductInfo`]).

use serde::{Deserialize, Serialize};

/// A single product card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub title: Option<String>,
    /// Display-formatted price, e.g. "450 ₽"
    pub price: Option<String>,
    /// Display-formatted portion size, e.g. "300 г"
    pub weight: Option<String>,
}

impl Product {
    pub fn new(title: &str, price: &str, weight: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            price: Some(price.to_string()),
            weight: Some(weight.to_string()),
        }
    }
}

/// A navigable block of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Anchor id, linked from the category navigation as `#<id>`
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl MenuSection {
    /// Anchor href pointing at this section
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// The full storefront menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<MenuSection>,
}

impl Catalog {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    /// Built-in menu used when no storefront file provides one
    pub fn default_menu() -> Self {
        Self::new(vec![
            MenuSection {
                id: "menu".to_string(),
                title: "Горячие блюда".to_string(),
                products: vec![
                    Product::new("Плов", "450 ₽", "300 г"),
                    Product::new("Бешбармак", "520 ₽", "350 г"),
                    Product::new("Лагман", "390 ₽", "400 г"),
                    Product::new("Манты", "420 ₽", "5 шт"),
                ],
            },
            MenuSection {
                id: "salads".to_string(),
                title: "Салаты".to_string(),
                products: vec![
                    Product::new("Ачичук", "220 ₽", "200 г"),
                    Product::new("Салат с говядиной", "340 ₽", "220 г"),
                    Product::new("Винегрет", "190 ₽", "200 г"),
                ],
            },
            MenuSection {
                id: "pastry".to_string(),
                title: "Выпечка".to_string(),
                products: vec![
                    Product::new("Самса", "150 ₽", "1 шт"),
                    Product::new("Баурсаки", "180 ₽", "250 г"),
                    Product::new("Чак-чак", "260 ₽", "300 г"),
                ],
            },
            MenuSection {
                id: "drinks".to_string(),
                title: "Напитки".to_string(),
                products: vec![
                    Product::new("Чай с чабрецом", "120 ₽", "500 мл"),
                    Product::new("Айран", "110 ₽", "300 мл"),
                    Product::new("Компот", "100 ₽", "300 мл"),
                ],
            },
        ])
    }

    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
