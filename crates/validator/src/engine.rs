//! Engine configuration and custom rule registration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::custom::{CustomRule, RuleMessage};
use crate::error::ConfigError;
use crate::i18n::{GENERIC_MESSAGE, LocaleRegistry};
use crate::message::MessageResolver;
use crate::schema::{LABEL_SUFFIX, MESSAGE_SUFFIX};
use crate::validators::BuiltinRule;

// ============================================================================
// OPTIONS
// ============================================================================

/// Construction-time settings of a [`Validator`].
///
/// Deserializable so embedders can read it from their own config files.
///
/// # Examples
///
/// ```
/// use formcheck_validator::engine::ValidatorOptions;
///
/// let options: ValidatorOptions =
///     serde_json::from_str(r#"{"messages": {"required": "Needed"}}"#).unwrap();
/// assert_eq!(options.locale, None);
/// assert_eq!(options.messages["required"], "Needed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Locale to activate; `None` selects the registry's default language.
    pub locale: Option<String>,
    /// Engine-level message overrides keyed by rule name.
    pub messages: HashMap<String, String>,
}

impl ValidatorOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Adds one message override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(rule.into(), template.into());
        self
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Resolved predicate for one rule name.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Predicate<'a> {
    Builtin(BuiltinRule),
    Custom(&'a CustomRule),
}

/// A validation engine instance.
///
/// Holds the active locale, engine-level message overrides and the custom
/// rules registered on it. Instances are independent of each other but read
/// templates from a shared [`LocaleRegistry`].
///
/// # Examples
///
/// ```
/// use formcheck_validator::prelude::*;
///
/// let validator = Validator::default();
/// let schema = Schema::new().field("name", RuleSet::new().rule("required", true));
/// let values = ValueMap::from([("name".to_owned(), FieldValue::from(""))]);
///
/// let result = validator.validate(&schema, &values);
/// assert!(!result.valid);
/// assert_eq!(result.first_message("name"), Some("This field is required."));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    pub(crate) registry: LocaleRegistry,
    pub(crate) locale: String,
    pub(crate) overrides: HashMap<String, String>,
    pub(crate) custom: HashMap<String, CustomRule>,
}

impl Validator {
    /// Creates an engine over `registry`.
    ///
    /// An unregistered locale falls back to the registry's default language
    /// with a warning.
    #[must_use]
    pub fn new(registry: LocaleRegistry, options: ValidatorOptions) -> Self {
        let default_locale = registry.default_locale();
        let locale = match options.locale {
            Some(requested) if registry.contains(&requested) => requested,
            Some(requested) => {
                warn!(
                    %requested,
                    fallback = %default_locale,
                    "locale is not registered, using default language"
                );
                default_locale
            }
            None => default_locale,
        };

        debug!(%locale, overrides = options.messages.len(), "validator created");
        Self {
            registry,
            locale,
            overrides: options.messages,
            custom: HashMap::new(),
        }
    }

    /// Engine over the process-wide registry with the given locale.
    #[must_use]
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self::new(
            LocaleRegistry::shared(),
            ValidatorOptions::new().with_locale(locale),
        )
    }

    /// Active locale key.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Registry this engine reads templates from.
    #[must_use]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Engine-level message overrides.
    #[must_use]
    pub fn overrides(&self) -> &HashMap<String, String> {
        &self.overrides
    }

    /// Activates a registered locale.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownLocale`] if `key` was never registered; the
    /// active locale is left unchanged.
    pub fn set_locale(&mut self, key: &str) -> Result<(), ConfigError> {
        if !self.registry.contains(key) {
            return Err(ConfigError::UnknownLocale(key.to_owned()));
        }
        key.clone_into(&mut self.locale);
        debug!(locale = %key, "locale activated");
        Ok(())
    }

    /// Registers a custom rule, replacing any custom rule of the same name.
    ///
    /// Custom rules take precedence over built-ins of the same name. A plain
    /// text message becomes an override on this engine only. A localized
    /// message is merged into the registry per locale, and this engine's
    /// override is set from the active locale's entry, falling back to the
    /// default language's entry and then to a generic text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRuleName`] for empty names and names ending in
    /// the reserved `Message` or `Label` suffixes.
    pub fn add_rule(
        &mut self,
        name: &str,
        rule: CustomRule,
        message: impl Into<RuleMessage>,
    ) -> Result<(), ConfigError> {
        validate_rule_name(name)?;

        let text = match message.into() {
            RuleMessage::Text(text) => text,
            RuleMessage::Localized(entries) => {
                for (locale, text) in &entries {
                    self.registry.insert_message(locale, name, text);
                }
                entries
                    .get(&self.locale)
                    .or_else(|| entries.get(&self.registry.default_locale()))
                    .cloned()
                    .unwrap_or_else(|| GENERIC_MESSAGE.to_owned())
            }
        };

        if BuiltinRule::from_name(name).is_some() {
            debug!(rule = name, "custom rule shadows built-in");
        }
        self.overrides.insert(name.to_owned(), text);
        self.custom.insert(name.to_owned(), rule);
        debug!(rule = name, "custom rule registered");
        Ok(())
    }

    /// Returns `true` if `name` resolves to a custom or built-in rule.
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Message resolver for this engine's locale and overrides.
    #[must_use]
    pub fn resolver(&self) -> MessageResolver<'_> {
        MessageResolver::new(&self.registry, &self.locale, &self.overrides)
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<Predicate<'_>> {
        self.custom
            .get(name)
            .map(Predicate::Custom)
            .or_else(|| BuiltinRule::from_name(name).map(Predicate::Builtin))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(LocaleRegistry::shared(), ValidatorOptions::default())
    }
}

fn validate_rule_name(name: &str) -> Result<(), ConfigError> {
    let reason = if name.trim().is_empty() {
        "name must not be empty"
    } else if name.ends_with(MESSAGE_SUFFIX) || name.ends_with(LABEL_SUFFIX) {
        "names ending in 'Message' or 'Label' are reserved for metadata"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidRuleName {
        name: name.to_owned(),
        reason,
    })
}
