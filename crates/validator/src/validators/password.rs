//! Password strength rule.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

const MIN_LENGTH: usize = 8;

/// At least 8 characters with a lowercase letter, an uppercase letter, a digit
/// and a character that is neither letter nor digit.
pub fn strong_password(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    let text = value.to_text();
    text.chars().count() >= MIN_LENGTH
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().any(|c| !c.is_ascii_alphanumeric())
}
