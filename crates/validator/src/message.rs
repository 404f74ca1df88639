//! Message resolution and interpolation.
//!
//! Precedence for a failing rule, highest first:
//!
//! 1. inline `<rule>Message` entry of the field's rule set, used verbatim
//! 2. engine-level override for the rule
//! 3. active locale's template for the rule
//! 4. active locale's `custom` template, then [`GENERIC_MESSAGE`]
//!
//! Templates from levels 2 to 4 are interpolated; unknown `{placeholders}`
//! stay in the output untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::i18n::{FALLBACK_KEY, GENERIC_MESSAGE, LocaleRegistry};
use crate::schema::{RuleParam, RuleSet};
use crate::value::format_number;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Placeholder values for one failing rule.
pub type Variables = HashMap<&'static str, String>;

/// Resolves failure messages for one engine's locale and overrides.
#[derive(Debug, Clone, Copy)]
pub struct MessageResolver<'a> {
    registry: &'a LocaleRegistry,
    locale: &'a str,
    overrides: &'a HashMap<String, String>,
}

impl<'a> MessageResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(
        registry: &'a LocaleRegistry,
        locale: &'a str,
        overrides: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            registry,
            locale,
            overrides,
        }
    }

    /// Final message for `rule` failing with `param` on a field with `rules`.
    #[must_use]
    pub fn resolve(&self, rule: &str, param: &RuleParam, rules: &RuleSet) -> String {
        if let Some(inline) = rules.inline_message(rule) {
            return inline;
        }
        interpolate(&self.template(rule), &variables(rule, param, rules))
    }

    /// Uninterpolated template for `rule`, ignoring inline messages.
    #[must_use]
    pub fn template(&self, rule: &str) -> String {
        self.overrides
            .get(rule)
            .cloned()
            .or_else(|| self.registry.template(self.locale, rule))
            .or_else(|| self.registry.template(self.locale, FALLBACK_KEY))
            .unwrap_or_else(|| GENERIC_MESSAGE.to_owned())
    }
}

/// Placeholder values for `rule`.
///
/// `min` and `max` always carry the parameter; the remaining names depend on
/// the rule: `target` for `equalTo`/`notEqualTo` (label of the other field
/// when the rule set has one), `values` for `in`/`notIn`, `types` for
/// `fileType`, and `max` as a byte size for `fileSize`.
#[must_use]
pub fn variables(rule: &str, param: &RuleParam, rules: &RuleSet) -> Variables {
    let raw = param.to_string();
    let mut vars = Variables::from([("min", raw.clone()), ("max", raw.clone())]);

    match rule {
        "equalTo" | "notEqualTo" => {
            let target = rules.label_for(&raw).unwrap_or(raw);
            vars.insert("target", target);
        }
        "in" | "notIn" => {
            vars.insert("values", param.as_list().join(", "));
        }
        "fileSize" => {
            if let Some(bytes) = param.as_number() {
                vars.insert("max", format_bytes(bytes));
            }
        }
        "fileType" => {
            vars.insert("types", param.as_list().join(", "));
        }
        _ => {}
    }
    vars
}

/// Replaces `{name}` tokens in one pass.
///
/// # Examples
///
/// ```
/// use formcheck_validator::message::{Variables, interpolate};
///
/// let vars = Variables::from([("min", "3".to_owned())]);
/// assert_eq!(interpolate("At least {min}, not {mni}.", &vars), "At least 3, not {mni}.");
/// ```
#[must_use]
pub fn interpolate(template: &str, vars: &Variables) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Human-readable byte size in base 1024 with up to two decimals.
///
/// # Examples
///
/// ```
/// use formcheck_validator::message::format_bytes;
///
/// assert_eq!(format_bytes(0.0), "0 Bytes");
/// assert_eq!(format_bytes(1536.0), "1.5 KB");
/// assert_eq!(format_bytes(5.0 * 1024.0 * 1024.0), "5 MB");
/// ```
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 || !bytes.is_finite() || bytes < 0.0 {
        return format!("{} Bytes", format_number(bytes));
    }

    let mut scaled = bytes;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let text = format!("{scaled:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", BYTE_UNITS[unit])
}
