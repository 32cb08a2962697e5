//! Configuration management for tracker-i18n
//!
//! Configuration is layered; a later layer overrides only the keys it sets:
//! 1. Embedded default_config.toml (compile-time defaults)
//! 2. User config at ~/.config/tracker-i18n/config.toml (or platform-specific location)
//! 3. Project-local config at ./.tracker-i18n/config.toml
//! 4. `TRACKER_I18N_LOCALE` environment variable for the active locale

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_LOCALE;
use crate::error::{ConfigError, ConfigResult};

/// Default configuration embedded in binary
const DEFAULT_CONFIG: &str = include_str!("../../default_config.toml");

/// Environment variable overriding the active locale
pub const LOCALE_ENV_VAR: &str = "TRACKER_I18N_LOCALE";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog and locale settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Active locale for new translators
    #[serde(default = "default_locale")]
    pub locale: String,
    /// External catalog file replacing the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Reject catalogs whose locales lack default keys
    #[serde(default = "default_false")]
    pub strict: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            catalog_path: None,
            strict: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub timestamps: bool,
    #[serde(default = "default_false")]
    pub file_line: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            timestamps: true,
            file_line: false,
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

// ============================================================================
// Configuration loading
// ============================================================================

impl AppConfig {
    /// Load configuration with fallback chain:
    /// 1. Project-local .tracker-i18n/config.toml
    /// 2. User config ~/.config/tracker-i18n/config.toml
    /// 3. Embedded default_config.toml
    ///
    /// The locale environment override is applied last.
    pub fn load() -> ConfigResult<Self> {
        let layers = [Self::user_config_path(), Self::project_config_path()];
        let mut config = Self::load_layers(layers.iter().flatten())?;
        config.apply_locale_override(std::env::var(LOCALE_ENV_VAR).ok());
        Ok(config)
    }

    /// Load the embedded defaults with each existing file layered on top, in order
    ///
    /// A layer overrides only the keys it sets. Layers that cannot be read
    /// or do not describe a valid configuration are logged and skipped.
    pub fn load_layers<I>(paths: I) -> ConfigResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse default config: {}", e))
        })?;

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::read_layer(path) {
                Ok(layer) => {
                    merge_tables(&mut merged, layer);
                    tracing::info!("Loaded config from {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to load config {:?}: {}", path, e);
                }
            }
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Read one layer as a raw table, rejecting values of the wrong type
    fn read_layer(path: &Path) -> ConfigResult<toml::Table> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let table: toml::Table = toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        toml::Value::Table(table.clone())
            .try_into::<Self>()
            .map_err(|e| {
                ConfigError::ParseError(format!("Invalid config {}: {}", path.display(), e))
            })?;
        Ok(table)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Get the user config path (~/.config/tracker-i18n/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("tracker-i18n").join("config.toml"))
    }

    /// Get the project-local config path (./.tracker-i18n/config.toml)
    pub fn project_config_path() -> Option<PathBuf> {
        std::env::current_dir()
            .ok()
            .map(|cwd| cwd.join(".tracker-i18n").join("config.toml"))
    }

    /// Replace the active locale when an override is given and non-blank
    pub fn apply_locale_override(&mut self, value: Option<String>) {
        if let Some(locale) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!(locale = %locale, "Active locale overridden from environment");
            self.i18n.locale = locale;
        }
    }

    /// Write configuration as TOML
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml_string).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Save configuration to user config path
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::user_config_path().ok_or_else(|| {
            ConfigError::IoError("Could not determine user config directory".to_string())
        })?;
        self.save_to_file(&config_path)
    }
}

/// Overlay `overlay` onto `base`, descending into tables present in both
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(overlay_section) = value {
            if let Some(toml::Value::Table(base_section)) = base.get_mut(&key) {
                merge_tables(base_section, overlay_section);
                continue;
            }
            base.insert(key, toml::Value::Table(overlay_section));
        } else {
            base.insert(key, value);
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
        })
    }
}
