//! Numeric bound rules.
//!
//! The value is coerced to a number first; a value with no numeric reading
//! (NaN) fails both bounds.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

// ============================================================================
// MIN
// ============================================================================

/// Numeric value is `>= param`.
pub fn min(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    let n = value.to_number();
    param.as_number().is_some_and(|min| n >= min)
}

// ============================================================================
// MAX
// ============================================================================

/// Numeric value is `<= param`.
pub fn max(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    let n = value.to_number();
    param.as_number().is_some_and(|max| n <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min() {
        let all = ValueMap::new();
        assert!(min(&18.into(), &18.into(), &all));
        assert!(min(&"21".into(), &18.into(), &all));
        assert!(!min(&"17.5".into(), &18.into(), &all));
        assert!(!min(&"abc".into(), &0.into(), &all));
    }

    #[test]
    fn test_max() {
        let all = ValueMap::new();
        assert!(max(&100.into(), &100.into(), &all));
        assert!(max(&"-5".into(), &0.into(), &all));
        assert!(!max(&101.into(), &"100".into(), &all));
        assert!(!max(&"NaN".into(), &100.into(), &all));
    }
}
