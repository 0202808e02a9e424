//! Error types for the Kulaar storefront

use thiserror::Error;

/// Main error type for storefront operations
///
/// Missing page elements are never errors: handlers simply do nothing.
/// These variants cover the surfaces that can genuinely fail, namely
/// configuration loading and the webview script bridge.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Configuration file could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration parsed but holds values outside their allowed range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML syntax or schema error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Script evaluation in the webview failed or returned unexpected data
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::InvalidConfig("reveal_threshold must be in (0, 1]".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: reveal_threshold must be in (0, 1]"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorefrontError = io_err.into();
        assert!(matches!(err, StorefrontError::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: StorefrontError = toml_err.into();
        assert!(format!("{}", err).starts_with("TOML error"));
    }
}
