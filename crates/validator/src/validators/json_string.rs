//! JSON text rule.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

/// Text form parses as a JSON document (any top-level value).
pub fn json(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    serde_json::from_str::<serde_json::Value>(&value.to_text()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: RuleParam = RuleParam::Flag(true);

    #[test]
    fn test_json() {
        let all = ValueMap::new();
        assert!(json(&r#"{"name": "John"}"#.into(), &ON, &all));
        assert!(json(&"[1, 2, 3]".into(), &ON, &all));
        assert!(json(&"42".into(), &ON, &all));
        assert!(json(&"null".into(), &ON, &all));
        assert!(!json(&r#"{"name": "John""#.into(), &ON, &all));
        assert!(!json(&"undefined".into(), &ON, &all));
        assert!(!json(&"{'single': 1}".into(), &ON, &all));
    }
}
