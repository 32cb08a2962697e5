//! Error types for tracker-i18n
//!
//! Lookups never fail; these errors only surface while building a catalog
//! or loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the crate
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building a translation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Locale '{code}' is declared more than once")]
    DuplicateLocale { code: String },

    #[error("Default locale '{code}' is not present in the catalog")]
    UnknownDefaultLocale { code: String },

    #[error("Locale '{code}' has an empty display name")]
    EmptyDisplayName { code: String },

    #[error("Catalog contains a locale with an empty code")]
    EmptyLocaleCode,

    #[error("Locale '{locale}' is missing {} key(s): {}", missing.len(), missing.join(", "))]
    IncompleteLocale { locale: String, missing: Vec<String> },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Result type alias for catalog construction
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result type alias for Config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::IncompleteLocale {
            locale: "de".to_string(),
            missing: vec!["geo_fence".to_string(), "speed".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Locale 'de' is missing 2 key(s): geo_fence, speed"
        );
    }

    #[test]
    fn test_error_conversion() {
        let catalog_err = CatalogError::DuplicateLocale {
            code: "en".to_string(),
        };
        let err: I18nError = catalog_err.into();
        assert!(matches!(err, I18nError::Catalog(_)));

        let config_err = ConfigError::ParseError("bad toml".to_string());
        let err: I18nError = config_err.into();
        assert!(matches!(err, I18nError::Config(_)));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(err.to_string().starts_with("Failed to parse catalog"));
    }
}
