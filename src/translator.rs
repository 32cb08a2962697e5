//! Translator bound to an active locale
//!
//! Render code holds a [`Translator`] and calls [`Translator::t`] wherever a
//! label is drawn; switching language is a single [`Translator::set_locale`].

use crate::catalog::Catalog;
use crate::config::I18nConfig;

/// Catalog lookups for one active locale
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    catalog: &'a Catalog,

    /// Current active locale, as requested
    locale: String,
}

impl Translator<'static> {
    /// Creates a translator over the process-wide catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_i18n::{keys, Translator};
    /// let translator = Translator::new("ru");
    /// assert_eq!(translator.t(keys::LOGOUT), "Выйти");
    /// ```
    pub fn new(locale: &str) -> Self {
        Self::with_catalog(crate::global(), locale)
    }

    /// Creates a translator over the process-wide catalog using the configured locale
    pub fn from_config(config: &I18nConfig) -> Self {
        Self::new(&config.locale)
    }
}

impl<'a> Translator<'a> {
    /// Creates a translator over a specific catalog
    pub fn with_catalog(catalog: &'a Catalog, locale: &str) -> Self {
        let translator = Self {
            catalog,
            locale: locale.to_string(),
        };
        translator.warn_if_unknown();
        translator
    }

    /// Sets the active locale
    ///
    /// Unknown codes are accepted; lookups then use the default locale.
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
        self.warn_if_unknown();
    }

    /// The active locale as requested
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Display name of the active locale, if the catalog knows it
    pub fn display_name(&self) -> Option<&'a str> {
        self.catalog.display_name(&self.locale)
    }

    /// `(code, display name)` pairs for a language picker
    pub fn available_locales(&self) -> Vec<(&'a str, &'a str)> {
        self.catalog.list_locales().collect()
    }

    /// Translates a message key to the active locale
    ///
    /// Falls back to the default locale, then to the key itself.
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.catalog.get(&self.locale, key)
    }

    /// The catalog this translator reads from
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn warn_if_unknown(&self) {
        if !self.catalog.contains_locale(&self.locale) {
            tracing::debug!(
                locale = %self.locale,
                default_locale = %self.catalog.default_locale(),
                "Unknown locale, lookups will use the default locale"
            );
        }
    }
}
