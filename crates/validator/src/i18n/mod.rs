//! Locale registry.
//!
//! A [`LocaleRegistry`] maps locale keys to flat rule-name → template maps.
//! It starts with one default language and only grows: locales are added or
//! replaced, never removed. Handles are cheap clones sharing one store, so
//! several engines with different active locales can read the same catalogs.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::i18n::{LocaleRegistry, MessageMap};
//!
//! let registry = LocaleRegistry::new();
//! let german = MessageMap::from([("required".to_owned(), "Pflichtfeld.".to_owned())]);
//! registry.register_locale("de", german, true);
//!
//! assert_eq!(registry.template("de", "required").as_deref(), Some("Pflichtfeld."));
//! // Inherited from the default language.
//! assert_eq!(
//!     registry.template("de", "email").as_deref(),
//!     Some("Please enter a valid email address.")
//! );
//! ```

mod en;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

pub use en::{CATALOG_EN, DEFAULT_LOCALE};

/// Templates of one locale keyed by rule name.
pub type MessageMap = HashMap<String, String>;

/// Last-resort text when neither the rule nor the locale's `custom` entry has a template.
pub const GENERIC_MESSAGE: &str = "This field is invalid.";

/// Catalog key of a locale's generic fallback template.
pub const FALLBACK_KEY: &str = "custom";

static SHARED: LazyLock<LocaleRegistry> = LazyLock::new(LocaleRegistry::new);

/// The bundled English catalog as an owned map.
#[must_use]
pub fn english() -> MessageMap {
    CATALOG_EN
        .iter()
        .map(|(rule, text)| ((*rule).to_owned(), (*text).to_owned()))
        .collect()
}

#[derive(Debug)]
struct Catalogs {
    default_locale: String,
    locales: HashMap<String, MessageMap>,
}

/// Shared, append-only store of locale catalogs.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    inner: Arc<RwLock<Catalogs>>,
}

impl LocaleRegistry {
    /// A fresh registry seeded with the bundled English catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(DEFAULT_LOCALE, english())
    }

    /// A fresh registry seeded with a caller-provided default language.
    pub fn with_default(key: impl Into<String>, messages: MessageMap) -> Self {
        let key = key.into();
        let locales = HashMap::from([(key.clone(), messages)]);
        Self {
            inner: Arc::new(RwLock::new(Catalogs {
                default_locale: key,
                locales,
            })),
        }
    }

    /// Handle to the process-wide registry.
    #[must_use]
    pub fn shared() -> Self {
        SHARED.clone()
    }

    /// Key of the default language.
    #[must_use]
    pub fn default_locale(&self) -> String {
        self.inner.read().default_locale.clone()
    }

    /// Returns `true` if `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.read().locales.contains_key(key)
    }

    /// Registered locale keys, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.read().locales.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Registers or replaces a locale.
    ///
    /// With `extend`, `messages` is layered over a copy of the default
    /// language so missing keys inherit its text. Without it the map is stored
    /// as given.
    pub fn register_locale(&self, key: impl Into<String>, messages: MessageMap, extend: bool) {
        let key = key.into();
        let mut catalogs = self.inner.write();

        let stored = if extend {
            let mut base = catalogs
                .locales
                .get(&catalogs.default_locale)
                .cloned()
                .unwrap_or_default();
            base.extend(messages);
            base
        } else {
            messages
        };

        tracing::debug!(locale = %key, entries = stored.len(), extend, "registered locale");
        catalogs.locales.insert(key, stored);
    }

    /// Template of `rule` in `locale`, without any fallback.
    #[must_use]
    pub fn template(&self, locale: &str, rule: &str) -> Option<String> {
        self.inner
            .read()
            .locales
            .get(locale)
            .and_then(|messages| messages.get(rule))
            .cloned()
    }

    /// Copy of a locale's whole catalog.
    #[must_use]
    pub fn messages(&self, locale: &str) -> Option<MessageMap> {
        self.inner.read().locales.get(locale).cloned()
    }

    /// Sets one template, creating the locale as an extension of the default
    /// language if it does not exist yet.
    pub(crate) fn insert_message(&self, locale: &str, rule: &str, text: &str) {
        let mut catalogs = self.inner.write();
        if !catalogs.locales.contains_key(locale) {
            let base = catalogs
                .locales
                .get(&catalogs.default_locale)
                .cloned()
                .unwrap_or_default();
            tracing::debug!(%locale, "creating locale from default language");
            catalogs.locales.insert(locale.to_owned(), base);
        }
        if let Some(messages) = catalogs.locales.get_mut(locale) {
            messages.insert(rule.to_owned(), text.to_owned());
        }
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
