//! Validation outcomes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Name of the rule that failed.
    pub rule: String,
    /// Resolved, interpolated message.
    pub message: String,
}

impl ErrorEntry {
    /// Creates an entry.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Verdict over a whole schema.
///
/// `valid` is `true` iff no field produced an error. Fields that passed have
/// no key in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Overall verdict.
    pub valid: bool,
    /// Failed fields and their errors, in evaluation order.
    pub errors: IndexMap<String, Vec<ErrorEntry>>,
}

impl ValidationResult {
    /// A passing result with no errors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: IndexMap::new(),
        }
    }

    /// Records one field's errors; an empty list leaves the result untouched.
    pub(crate) fn record(&mut self, field: &str, errors: Vec<ErrorEntry>) {
        if errors.is_empty() {
            return;
        }
        self.valid = false;
        self.errors.insert(field.to_owned(), errors);
    }

    /// Errors of one field, empty if it passed or was not validated.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[ErrorEntry] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// First message of one field.
    #[must_use]
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.field_errors(field)
            .first()
            .map(|entry| entry.message.as_str())
    }

    /// Total number of failed rules across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A rule name in a schema that resolves to neither a built-in nor a custom rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownRule {
    /// Field whose rule set references the name.
    pub field: String,
    /// The unresolved rule name.
    pub rule: String,
}
