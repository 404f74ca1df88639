//! Number-shape rules.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

/// Value coerces to a number and its text form is not blank.
pub fn numeric(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    !value.to_number().is_nan() && !value.to_text().trim().is_empty()
}

/// Value coerces to a finite whole number.
pub fn integer(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    let n = value.to_number();
    n.is_finite() && n.fract() == 0.0
}
