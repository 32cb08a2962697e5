//! Translation catalog with default-locale fallback
//!
//! A catalog holds, per locale code, a display name and a flat map from
//! message key to text. Lookups walk a fixed chain:
//!
//! 1. the requested locale (exact code, then case/separator-insensitive),
//! 2. the default locale,
//! 3. the key itself, so a missing translation stays visible in the UI.
//!
//! A catalog is immutable once built and is `Send + Sync`.
//!
//! # Examples
//!
//! ```
//! use tracker_i18n::Catalog;
//!
//! let catalog = Catalog::bundled().unwrap();
//! assert_eq!(catalog.get("en", "sign_in"), "Sign In");
//! assert_eq!(catalog.get("bg", "sign_in"), "Вход");
//! assert_eq!(catalog.get("xx-unknown", "sign_in"), "Sign In");
//! assert_eq!(catalog.get("en", "no_such_key"), "no_such_key");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::config::I18nConfig;
use crate::error::{CatalogError, CatalogResult};

/// Locale used when a translation is missing
pub const DEFAULT_LOCALE: &str = "en";

/// Catalog data compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../assets/messages.json");

// =============================================================================
// Locale Entry
// =============================================================================

/// Messages and display name of a single locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Locale code (e.g., "en", "pt_PT")
    pub code: String,

    /// Name shown in a language picker
    #[serde(rename = "name")]
    pub display_name: String,

    /// Message key to localized text
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl LocaleEntry {
    /// Creates an entry with no messages
    pub fn new(code: &str, display_name: &str) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            messages: BTreeMap::new(),
        }
    }

    /// Inserts a message, replacing any previous text for the key
    pub fn insert(&mut self, key: &str, text: &str) {
        self.messages.insert(key.to_string(), text.to_string());
    }

    /// Builder form of [`LocaleEntry::insert`]
    pub fn with_message(mut self, key: &str, text: &str) -> Self {
        self.insert(key, text);
        self
    }

    /// Gets a message by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the locale has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// On-disk layout of a catalog file
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_locale_code")]
    default_locale: String,
    locales: Vec<LocaleEntry>,
}

fn default_locale_code() -> String {
    DEFAULT_LOCALE.to_string()
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only translation catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Entries in declaration order
    entries: Vec<LocaleEntry>,

    /// Locale code to position in `entries`
    index: HashMap<String, usize>,

    /// Position of the default locale, `None` only for an empty catalog
    default_index: Option<usize>,

    default_locale: String,
}

impl Catalog {
    /// Builds a catalog from entries, keeping their order
    ///
    /// Fails on an empty code or display name, a duplicated code, or a
    /// default locale that is not among the entries.
    pub fn from_entries(default_locale: &str, entries: Vec<LocaleEntry>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.code.trim().is_empty() {
                return Err(CatalogError::EmptyLocaleCode);
            }
            if entry.display_name.trim().is_empty() {
                return Err(CatalogError::EmptyDisplayName {
                    code: entry.code.clone(),
                });
            }
            if index.insert(entry.code.clone(), position).is_some() {
                return Err(CatalogError::DuplicateLocale {
                    code: entry.code.clone(),
                });
            }
        }

        let default_index = index.get(default_locale).copied().ok_or_else(|| {
            CatalogError::UnknownDefaultLocale {
                code: default_locale.to_string(),
            }
        })?;

        Ok(Self {
            entries,
            index,
            default_index: Some(default_index),
            default_locale: default_locale.to_string(),
        })
    }

    /// A catalog without locales; every lookup yields the key itself
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            default_index: None,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Parses a catalog from its JSON form
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_entries(&file.default_locale, file.locales)
    }

    /// Reads and parses a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// The catalog compiled into the crate
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Loads the catalog described by `config`
    ///
    /// Uses `catalog_path` when set, the bundled data otherwise. Locales
    /// missing default keys are logged; with `strict` the first one is
    /// returned as an error instead.
    pub fn load(config: &I18nConfig) -> CatalogResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::debug!("Loading catalog from {:?}", path);
                Self::from_path(path)?
            }
            None => Self::bundled()?,
        };

        let report = catalog.coverage_report();
        for coverage in report.locales.iter().filter(|c| !c.missing.is_empty()) {
            tracing::warn!(
                locale = %coverage.locale,
                missing = coverage.missing.len(),
                "Locale is missing keys of the default locale"
            );
        }
        if config.strict {
            catalog.ensure_complete()?;
        }

        tracing::info!(
            locales = catalog.len(),
            default_locale = %catalog.default_locale,
            "Translation catalog loaded"
        );
        Ok(catalog)
    }

    /// The fallback locale code
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Number of locales
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no locales
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// Whether `code` names a locale of this catalog (see [`Catalog::resolve_locale`])
    pub fn contains_locale(&self, code: &str) -> bool {
        self.resolve_locale(code).is_some()
    }

    /// Maps a requested code to the catalog's own spelling of it
    ///
    /// Exact match first, then a match ignoring ASCII case with `-` and `_`
    /// treated as equal, so "pt-PT" resolves to "pt_PT".
    pub fn resolve_locale(&self, code: &str) -> Option<&str> {
        self.position(code)
            .map(|position| self.entries[position].code.as_str())
    }

    /// The entry for a locale
    pub fn entry(&self, code: &str) -> Option<&LocaleEntry> {
        self.position(code).map(|position| &self.entries[position])
    }

    /// Display name of a locale
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entry(code).map(|entry| entry.display_name.as_str())
    }

    /// `(code, display name)` pairs in declaration order
    ///
    /// The iterator is `Clone`, and calling this again starts over.
    pub fn list_locales(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + Clone + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.code.as_str(), entry.display_name.as_str()))
    }

    /// Keys of the default locale, sorted
    pub fn keys(&self) -> Vec<&str> {
        self.default_entry()
            .map(|entry| entry.messages.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Looks up a message, falling back to the default locale
    ///
    /// Returns `None` when neither locale has the key.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(text) = self.entry(locale).and_then(|entry| entry.get(key)) {
            return Some(text);
        }

        let text = self.default_entry()?.get(key)?;
        tracing::trace!(
            locale,
            key,
            default_locale = %self.default_locale,
            "Falling back to default locale"
        );
        Some(text)
    }

    /// Looks up a message; the key itself is returned when nothing matches
    pub fn get<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.lookup(locale, key).unwrap_or_else(|| {
            tracing::debug!(locale, key, "No translation found, using key as placeholder");
            key
        })
    }

    /// Compares every locale against the default locale's key set
    pub fn coverage_report(&self) -> CoverageReport {
        let Some(default_entry) = self.default_entry() else {
            return CoverageReport {
                default_locale: self.default_locale.clone(),
                total_keys: 0,
                locales: Vec::new(),
            };
        };

        let locales = self
            .entries
            .iter()
            .map(|entry| {
                let missing: Vec<String> = default_entry
                    .messages
                    .keys()
                    .filter(|key| !entry.messages.contains_key(*key))
                    .cloned()
                    .collect();

                let extra: Vec<String> = entry
                    .messages
                    .keys()
                    .filter(|key| !default_entry.messages.contains_key(*key))
                    .cloned()
                    .collect();

                let untranslated: Vec<String> = if entry.code == default_entry.code {
                    Vec::new()
                } else {
                    default_entry
                        .messages
                        .iter()
                        .filter(|(key, text)| entry.messages.get(*key) == Some(*text))
                        .map(|(key, _)| key.clone())
                        .collect()
                };

                LocaleCoverage {
                    locale: entry.code.clone(),
                    present: default_entry.len() - missing.len(),
                    missing,
                    extra,
                    untranslated,
                }
            })
            .collect();

        CoverageReport {
            default_locale: self.default_locale.clone(),
            total_keys: default_entry.len(),
            locales,
        }
    }

    /// Fails with the first locale that lacks a default key
    pub fn ensure_complete(&self) -> CatalogResult<()> {
        match self
            .coverage_report()
            .locales
            .into_iter()
            .find(|coverage| !coverage.missing.is_empty())
        {
            Some(coverage) => Err(CatalogError::IncompleteLocale {
                locale: coverage.locale,
                missing: coverage.missing,
            }),
            None => Ok(()),
        }
    }

    fn default_entry(&self) -> Option<&LocaleEntry> {
        self.default_index.map(|position| &self.entries[position])
    }

    fn position(&self, code: &str) -> Option<usize> {
        if let Some(&position) = self.index.get(code) {
            return Some(position);
        }
        self.entries
            .iter()
            .position(|entry| codes_match(&entry.code, code))
    }
}

/// ASCII case-insensitive comparison with `-` and `_` treated as equal
fn codes_match(a: &str, b: &str) -> bool {
    fn fold(byte: u8) -> u8 {
        if byte == b'-' {
            b'_'
        } else {
            byte.to_ascii_lowercase()
        }
    }

    a.len() == b.len() && a.bytes().zip(b.bytes()).all(|(x, y)| fold(x) == fold(y))
}

// =============================================================================
// Coverage
// =============================================================================

/// Coverage of every locale relative to the default locale
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Locale the others are measured against
    pub default_locale: String,
    /// Number of keys in the default locale
    pub total_keys: usize,
    /// Per-locale coverage, in declaration order
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Whether every locale carries every default key
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }

    /// Coverage of a single locale
    pub fn locale(&self, code: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|coverage| coverage.locale == code)
    }
}

/// Per-locale coverage statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Default keys present in this locale
    pub present: usize,
    /// Default keys absent from this locale, sorted
    pub missing: Vec<String>,
    /// Keys unknown to the default locale, sorted
    pub extra: Vec<String>,
    /// Keys whose text equals the default locale's, sorted
    pub untranslated: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of default keys present, 0.0 to 100.0
    pub fn coverage_percent(&self) -> f32 {
        let total = self.present + self.missing.len();
        if total == 0 {
            100.0
        } else {
            (self.present as f32 / total as f32) * 100.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
