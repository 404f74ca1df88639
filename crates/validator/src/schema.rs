//! Declarative rule sets and schemas.
//!
//! A [`RuleSet`] maps rule names to parameters for one field, in declaration
//! order. Keys ending in `Message` or `Label` are metadata: an inline message
//! override for a rule, or a display label for a field referenced by a
//! cross-field rule. They are never executed.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::value::{FieldValue, format_number, parse_number};

/// Suffix of inline message override keys, e.g. `requiredMessage`.
pub const MESSAGE_SUFFIX: &str = "Message";

/// Suffix of display label keys, e.g. `passwordLabel`.
pub const LABEL_SUFFIX: &str = "Label";

/// Current values of every field, keyed by field name.
pub type ValueMap = IndexMap<String, FieldValue>;

/// Returns `true` when `key` names a metadata entry rather than a rule.
#[must_use]
pub fn is_metadata_key(key: &str) -> bool {
    key.ends_with(MESSAGE_SUFFIX) || key.ends_with(LABEL_SUFFIX)
}

// ============================================================================
// RULE PARAMETER
// ============================================================================

/// Parameter attached to one rule in a [`RuleSet`].
///
/// Deserializes from any JSON scalar or array of scalars. A parameter of
/// exactly `false` switches the rule off for that field.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum RuleParam {
    /// `true` to enable a flag-style rule such as `email`.
    Flag(bool),
    /// Numeric bound, length or byte size.
    Number(f64),
    /// Free text: a field name, a comma-separated list, a date, a pattern.
    Text(String),
    /// Explicit list of tokens.
    List(Vec<String>),
    /// Pre-compiled regular expression.
    Pattern(Regex),
}

impl RuleParam {
    /// `false` disables the rule it is attached to.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Flag(false))
    }

    /// Numeric reading of the parameter, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(text) => parse_number(text),
            Self::Flag(_) | Self::List(_) | Self::Pattern(_) => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// The text of a `Text` parameter.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Token list of a `List` parameter, or the comma-separated pieces of a
    /// `Text` parameter. Tokens are trimmed; blank tokens are dropped.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            Self::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            Self::Number(n) => vec![format_number(*n)],
            Self::Flag(_) | Self::Pattern(_) => Vec::new(),
        }
    }

    /// Regular expression carried by the parameter, compiling text on demand.
    ///
    /// `None` when the parameter is neither a pattern nor text.
    pub fn regex(&self) -> Option<Result<Cow<'_, Regex>, regex::Error>> {
        match self {
            Self::Pattern(re) => Some(Ok(Cow::Borrowed(re))),
            Self::Text(text) => Some(Regex::new(text).map(Cow::Owned)),
            _ => None,
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(", ")),
            Self::Pattern(re) => f.write_str(re.as_str()),
        }
    }
}

impl PartialEq for RuleParam {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Flag(a), Self::Flag(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl TryFrom<serde_json::Value> for RuleParam {
    type Error = ConfigError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Self::Flag(true)),
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            Value::Number(n) => n.as_f64().map(Self::Number).ok_or_else(|| {
                ConfigError::InvalidParameter(format!("number {n} is out of range"))
            }),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .map(scalar_token)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(_) => Err(ConfigError::InvalidParameter(
                "objects are not valid rule parameters".to_owned(),
            )),
        }
    }
}

fn scalar_token(value: serde_json::Value) -> Result<String, ConfigError> {
    use serde_json::Value;

    match value {
        Value::String(text) => Ok(text),
        Value::Number(n) => Ok(n.as_f64().map_or_else(|| n.to_string(), format_number)),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(ConfigError::InvalidParameter(
            "list parameters may only contain scalars".to_owned(),
        )),
    }
}

impl From<bool> for RuleParam {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for RuleParam {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RuleParam {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RuleParam {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u64> for RuleParam {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for RuleParam {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RuleParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RuleParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for RuleParam {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for RuleParam {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleParam {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl From<Regex> for RuleParam {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Rules for one field, in declaration order.
///
/// # Examples
///
/// ```
/// use formcheck_validator::schema::RuleSet;
///
/// let rules = RuleSet::new()
///     .rule("required", true)
///     .rule("minLength", 8)
///     .message("required", "Pick a password");
///
/// let names: Vec<&str> = rules.rules().map(|(name, _)| name).collect();
/// assert_eq!(names, ["required", "minLength"]);
/// assert_eq!(rules.inline_message("required").as_deref(), Some("Pick a password"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    entries: IndexMap<String, RuleParam>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, param: impl Into<RuleParam>) -> Self {
        self.insert(name, param);
        self
    }

    /// Adds an inline message override for `rule`, used verbatim.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: &str, text: impl Into<String>) -> Self {
        self.insert(format!("{rule}{MESSAGE_SUFFIX}"), RuleParam::Text(text.into()));
        self
    }

    /// Adds a display label for `field`, used by cross-field messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, field: &str, text: impl Into<String>) -> Self {
        self.insert(format!("{field}{LABEL_SUFFIX}"), RuleParam::Text(text.into()));
        self
    }

    /// Inserts or replaces an entry, keeping its original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, param: impl Into<RuleParam>) {
        self.entries.insert(key.into(), param.into());
    }

    /// Raw entry lookup, metadata included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RuleParam> {
        self.entries.get(key)
    }

    /// Executable rules in declaration order; metadata keys are skipped.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RuleParam)> {
        self.entries
            .iter()
            .filter(|(key, _)| !is_metadata_key(key))
            .map(|(key, param)| (key.as_str(), param))
    }

    /// Inline override stored under `<rule>Message`.
    #[must_use]
    pub fn inline_message(&self, rule: &str) -> Option<String> {
        self.entries
            .get(&format!("{rule}{MESSAGE_SUFFIX}"))
            .map(ToString::to_string)
    }

    /// Display label stored under `<field>Label`.
    #[must_use]
    pub fn label_for(&self, field: &str) -> Option<String> {
        self.entries
            .get(&format!("{field}{LABEL_SUFFIX}"))
            .map(ToString::to_string)
    }

    /// Number of entries, metadata included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for RuleSet
where
    K: Into<String>,
    P: Into<RuleParam>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, param)| (key.into(), param.into()))
                .collect(),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Rule sets keyed by field name.
///
/// Fields are validated independently; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, RuleSet>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.insert(name, rules);
        self
    }

    /// Inserts or replaces a field's rule set.
    pub fn insert(&mut self, name: impl Into<String>, rules: RuleSet) {
        self.fields.insert(name.into(), rules);
    }

    /// Rule set of one field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.fields.get(name)
    }

    /// Fields and their rule sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RuleSet)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, RuleSet)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}
