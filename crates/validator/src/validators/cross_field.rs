//! Rules that compare a field against another field's current value.
//!
//! The parameter names the other field; its value is read from the full
//! value map. A missing field reads as null.

use crate::schema::{RuleParam, ValueMap};
use crate::value::{FieldValue, NULL};

fn other<'a>(param: &RuleParam, all: &'a ValueMap) -> &'a FieldValue {
    all.get(param.to_string().as_str()).unwrap_or(&NULL)
}

/// Value equals the referenced field's value.
pub fn equal_to(value: &FieldValue, param: &RuleParam, all: &ValueMap) -> bool {
    value == other(param, all)
}

/// Value differs from the referenced field's value.
pub fn not_equal_to(value: &FieldValue, param: &RuleParam, all: &ValueMap) -> bool {
    value != other(param, all)
}
