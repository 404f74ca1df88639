//! Pattern and character-class rules.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

static ALPHA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}+$").unwrap());

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").unwrap());

// ============================================================================
// PATTERN
// ============================================================================

/// Text form matches the parameter's regular expression (unanchored).
///
/// A parameter that is not a pattern, or text that does not compile, is a
/// schema problem rather than a data problem: it is logged and the rule
/// passes.
pub fn pattern(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    match param.regex() {
        Some(Ok(re)) => re.is_match(&value.to_text()),
        Some(Err(error)) => {
            warn!(pattern = %param, %error, "pattern does not compile; rule skipped");
            true
        }
        None => {
            warn!(param = %param, "pattern parameter is not a regular expression; rule skipped");
            true
        }
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Letters only, any script.
pub fn alpha(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    ALPHA_REGEX.is_match(&value.to_text())
}

/// Letters and digits only, any script.
pub fn alphanumeric(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    ALPHANUMERIC_REGEX.is_match(&value.to_text())
}
