//! tracker-i18n Library
//!
//! Translation catalog for the tracker mobile UI:
//! - Per-locale label tables (login screen, sidebar, device details)
//! - Lookup with requested locale -> default locale -> key fallback
//! - Locale listing for a language picker, in declaration order
//! - A process-wide catalog assigned once and never mutated
//!
//! # Examples
//!
//! ```
//! assert_eq!(tracker_i18n::get("en", "sign_in"), "Sign In");
//! assert_eq!(tracker_i18n::get("bg", "sign_in"), "Вход");
//!
//! let (code, name) = tracker_i18n::list_locales().next().unwrap();
//! assert_eq!((code, name), ("en", "English"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod translator;

pub use catalog::{Catalog, CoverageReport, LocaleCoverage, LocaleEntry, DEFAULT_LOCALE};
pub use config::{AppConfig, I18nConfig};
pub use error::{CatalogError, ConfigError, I18nError, Result};
pub use translator::Translator;

use once_cell::sync::OnceCell;

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Installs the process-wide catalog
///
/// Succeeds only once, and only before the first [`global`] access.
/// Otherwise the rejected catalog is handed back.
pub fn install(catalog: Catalog) -> std::result::Result<(), Catalog> {
    CATALOG.set(catalog).map_err(|rejected| {
        tracing::warn!("Translation catalog already initialized, ignoring install");
        rejected
    })
}

/// The process-wide catalog
///
/// Falls back to the bundled catalog on first access. If that cannot be
/// parsed, an empty catalog is used so lookups still return their keys.
pub fn global() -> &'static Catalog {
    CATALOG.get_or_init(|| match Catalog::bundled() {
        Ok(catalog) => {
            tracing::debug!(locales = catalog.len(), "Using bundled translation catalog");
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to load bundled translation catalog: {}", e);
            Catalog::empty()
        }
    })
}

/// Looks up `key` for `locale` in the process-wide catalog
///
/// See [`Catalog::get`] for the fallback chain.
pub fn get<'a>(locale: &str, key: &'a str) -> &'a str {
    global().get(locale, key)
}

/// `(code, display name)` pairs of the process-wide catalog, in declaration order
pub fn list_locales() -> impl ExactSizeIterator<Item = (&'static str, &'static str)> + Clone {
    global().list_locales()
}
