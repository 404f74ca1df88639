//! Membership rules.
//!
//! The parameter is a list or a comma-separated string; the value's text form
//! is compared against each trimmed token.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

/// Text form is one of the allowed tokens (`in`).
pub fn one_of(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    let needle = value.to_text();
    param.as_list().iter().any(|token| *token == needle)
}

/// Text form is none of the excluded tokens (`notIn`).
pub fn not_in(value: &FieldValue, param: &RuleParam, all: &ValueMap) -> bool {
    !one_of(value, param, all)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_list_and_csv() {
        let all = ValueMap::new();
        assert!(one_of(&"red".into(), &["red", "green"].into(), &all));
        assert!(one_of(&"green".into(), &"red, green ,blue".into(), &all));
        assert!(one_of(&2.into(), &"1,2,3".into(), &all));
        assert!(!one_of(&"purple".into(), &"red,green".into(), &all));
    }

    #[test]
    fn test_not_in() {
        let all = ValueMap::new();
        assert!(not_in(&"guest".into(), &"admin,root".into(), &all));
        assert!(!not_in(&"root".into(), &["admin", "root"].into(), &all));
    }
}
