//! Storefront file loading from disk

use std::io::Write;

use kulaar_core::{Catalog, RevealMode, StorefrontError, StorefrontFile};
use tempfile::TempDir;

/// A missing file is not an error: defaults and the built-in menu apply
#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let file = StorefrontFile::load(dir.path().join("storefront.toml")).unwrap();
    let (config, catalog) = file.into_parts();
    assert_eq!(config.scroll_spy_offset_px, 150.0);
    assert_eq!(catalog, Catalog::default_menu());
}

/// Settings and menu both come from the file when present
#[test]
fn test_file_with_menu() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storefront.toml");
    let mut handle = std::fs::File::create(&path).unwrap();
    write!(
        handle,
        r#"
[storefront]
reveal_mode = "stagger"
brand_name = "Тестовая кухня"

[[sections]]
id = "menu"
title = "Меню"

[[sections.products]]
title = "Плов"
price = "450 ₽"

[[sections.products]]
weight = "200 г"
"#
    )
    .unwrap();

    let (config, catalog) = StorefrontFile::load(&path).unwrap().into_parts();
    assert_eq!(config.reveal_mode, RevealMode::Stagger);
    assert_eq!(config.brand_name, "Тестовая кухня");
    assert_eq!(catalog.sections.len(), 1);
    assert_eq!(catalog.product_count(), 2);
    assert_eq!(catalog.sections[0].products[1].title, None);
}

/// A file that exists but does not parse is reported
#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storefront.toml");
    std::fs::write(&path, "[storefront\nbroken").unwrap();
    let err = StorefrontFile::load(&path).unwrap_err();
    assert!(matches!(err, StorefrontError::Toml(_)));
}

/// A directory in place of the file cannot be read
#[test]
fn test_unreadable_path_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = StorefrontFile::load(dir.path()).unwrap_err();
    assert!(matches!(err, StorefrontError::Config(_)));
}
