//! Loose phone number rule.
//!
//! Accepts an optional leading `+` followed by 7 to 20 characters drawn from
//! digits, spaces, hyphens, parentheses and dots. No country rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,20}$").unwrap());

/// Loose phone shape check on the text form.
pub fn phone(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    PHONE_REGEX.is_match(&value.to_text())
}
