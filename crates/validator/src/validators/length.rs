//! Text length rules.
//!
//! Length is measured in Unicode scalar values of the value's text form.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

fn char_count(value: &FieldValue) -> f64 {
    value.to_text().chars().count() as f64
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Text form has at least `param` characters. A non-numeric bound fails.
pub fn min_length(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    param.as_number().is_some_and(|min| char_count(value) >= min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Text form has at most `param` characters. A non-numeric bound fails.
pub fn max_length(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    param.as_number().is_some_and(|max| char_count(value) <= max)
}
