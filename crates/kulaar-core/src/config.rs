//! Storefront configuration.
//!
//! Every tunable that shapes page behavior lives here as a named value, so
//! the numbers that used to be scattered through event handlers have a
//! single documented home. Values load from an optional TOML file:
//!
//! ```toml
//! [storefront]
//! scroll_spy_offset_px = 150.0
//! drag_speed_multiplier = 2.0
//! reveal_mode = "stagger"
//!
//! [[sections]]
//! id = "menu"
//! title = "Меню"
//!
//! [[sections.products]]
//! title = "Плов"
//! price = "450 ₽"
//! weight = "300 г"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MenuSection};
use crate::error::{StorefrontError, StorefrontResult};

/// Distance below the viewport top used as the scroll-spy probe point.
pub const DEFAULT_SCROLL_SPY_OFFSET_PX: f64 = 150.0;
/// Drag acceleration: scroll distance per pixel of pointer travel.
pub const DEFAULT_DRAG_SPEED_MULTIPLIER: f64 = 2.0;
/// Widest viewport on which drag scrolling is attached.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 2500;
pub const DEFAULT_TOAST_FADE_MS: u64 = 300;
/// Fraction of a section that must be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;
/// Distance a rail arrow button scrolls per click.
pub const DEFAULT_RAIL_STEP_PX: f64 = 300.0;
pub const DEFAULT_BRAND_NAME: &str = "Кулаар Кейтеринг";

/// Which single mechanism reveals sections as the page comes into view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Reveal each section once it crosses the visibility threshold
    #[default]
    Intersection,
    /// Reveal every section after load, one step apart
    Stagger,
}

/// Tunable storefront behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Added to the scroll position before matching it against sections
    pub scroll_spy_offset_px: f64,
    /// Multiplies pointer displacement while drag scrolling a rail
    pub drag_speed_multiplier: f64,
    /// Drag scrolling is attached only at or below this viewport width
    pub mobile_breakpoint_px: f64,
    /// Quiet period after the last resize before re-evaluating the layout
    pub resize_debounce_ms: u64,
    /// How long a toast stays fully visible
    pub toast_visible_ms: u64,
    /// Length of the toast fade-out animation
    pub toast_fade_ms: u64,
    pub reveal_mode: RevealMode,
    /// Visible fraction that triggers an intersection reveal
    pub reveal_threshold: f64,
    /// Delay between consecutive sections in stagger mode
    pub reveal_stagger_ms: u64,
    pub rail_step_px: f64,
    pub brand_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            scroll_spy_offset_px: DEFAULT_SCROLL_SPY_OFFSET_PX,
            drag_speed_multiplier: DEFAULT_DRAG_SPEED_MULTIPLIER,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            toast_visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
            reveal_mode: RevealMode::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            rail_step_px: DEFAULT_RAIL_STEP_PX,
            brand_name: DEFAULT_BRAND_NAME.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> StorefrontResult<()> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(StorefrontError::InvalidConfig(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !(self.drag_speed_multiplier > 0.0) {
            return Err(StorefrontError::InvalidConfig(format!(
                "drag_speed_multiplier must be positive, got {}",
                self.drag_speed_multiplier
            )));
        }
        if !(self.mobile_breakpoint_px > 0.0) {
            return Err(StorefrontError::InvalidConfig(format!(
                "mobile_breakpoint_px must be positive, got {}",
                self.mobile_breakpoint_px
            )));
        }
        if !(self.scroll_spy_offset_px >= 0.0) {
            return Err(StorefrontError::InvalidConfig(format!(
                "scroll_spy_offset_px must not be negative, got {}",
                self.scroll_spy_offset_px
            )));
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}

/// On-disk layout of a storefront file: settings plus an optional menu
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontFile {
    pub storefront: StorefrontConfig,
    pub sections: Vec<MenuSection>,
}

impl StorefrontFile {
    /// Parse and validate a storefront file from TOML text.
    pub fn from_toml_str(text: &str) -> StorefrontResult<Self> {
        let file: StorefrontFile = toml::from_str(text)?;
        file.storefront.validate()?;
        Ok(file)
    }

    /// Load a storefront file.
    ///
    /// A missing file yields defaults; a file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No storefront file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file = Self::from_toml_str(&text)?;
        tracing::info!(
            "Loaded storefront file {:?} ({} menu sections)",
            path,
            file.sections.len()
        );
        Ok(file)
    }

    /// Split into settings and catalog, falling back to the built-in menu
    /// when the file declares no sections.
    pub fn into_parts(self) -> (StorefrontConfig, Catalog) {
        let catalog = if self.sections.is_empty() {
            Catalog::default_menu()
        } else {
            Catalog::new(self.sections)
        };
        (self.storefront, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        let config = StorefrontConfig::default();
        assert_eq!(config.scroll_spy_offset_px, 150.0);
        assert_eq!(config.drag_speed_multiplier, 2.0);
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.toast_visible(), Duration::from_millis(2500));
        assert_eq!(config.reveal_mode, RevealMode::Intersection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = StorefrontFile::from_toml_str(
            r#"
            [storefront]
            reveal_mode = "stagger"
            drag_speed_multiplier = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(file.storefront.reveal_mode, RevealMode::Stagger);
        assert_eq!(file.storefront.drag_speed_multiplier, 3.0);
        assert_eq!(file.storefront.scroll_spy_offset_px, 150.0);
        assert!(file.sections.is_empty());
    }

    #[test]
    fn empty_sections_fall_back_to_builtin_menu() {
        let (_, catalog) = StorefrontFile::default().into_parts();
        assert_eq!(catalog, Catalog::default_menu());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = StorefrontFile::from_toml_str("[storefront]\nreveal_threshold = 1.5\n")
            .unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidConfig(_)));
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let config = StorefrontConfig {
            drag_speed_multiplier: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_reveal_mode_is_a_toml_error() {
        let err = StorefrontFile::from_toml_str("[storefront]\nreveal_mode = \"fade\"\n")
            .unwrap_err();
        assert!(matches!(err, StorefrontError::Toml(_)));
    }
}
