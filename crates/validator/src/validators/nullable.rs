//! Presence rule.
//!
//! `required` is the only rule the executor runs on empty values, so it is
//! the only place emptiness turns into a failure.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

/// Passes iff the value is not empty.
///
/// # Examples
///
/// ```
/// use formcheck_validator::schema::{RuleParam, ValueMap};
/// use formcheck_validator::validators::nullable::required;
///
/// let all = ValueMap::new();
/// let on = RuleParam::Flag(true);
/// assert!(required(&0.into(), &on, &all));
/// assert!(!required(&"  ".into(), &on, &all));
/// ```
pub fn required(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FileInfo;

    fn check(value: FieldValue) -> bool {
        required(&value, &RuleParam::Flag(true), &ValueMap::new())
    }

    #[test]
    fn test_required_fails_on_empty() {
        assert!(!check(FieldValue::Null));
        assert!(!check("".into()));
        assert!(!check("   ".into()));
        assert!(!check(FieldValue::List(vec![])));
        assert!(!check(FieldValue::files([])));
    }

    #[test]
    fn test_required_passes_on_falsy_but_present() {
        assert!(check(0.into()));
        assert!(check(false.into()));
        assert!(check("0".into()));
        assert!(check(FieldValue::files([FileInfo::new("a.txt", 0, "text/plain")])));
    }
}
